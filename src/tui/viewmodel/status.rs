//! Status message shown in the footer.

use std::time::{Duration, Instant};

/// A temporary notice such as "Exported to renewals-branch.csv".
///
/// With an auto-clear duration the message expires on the first read after
/// that much time has passed.
#[derive(Debug, Clone, Default)]
pub struct StatusMessage {
    message: Option<String>,
    set_at: Option<Instant>,
    auto_clear_after: Option<Duration>,
}

impl StatusMessage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_auto_clear(duration: Duration) -> Self {
        Self {
            message: None,
            set_at: None,
            auto_clear_after: Some(duration),
        }
    }

    pub fn set(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.set_at = Some(Instant::now());
    }

    pub fn clear(&mut self) {
        self.message = None;
        self.set_at = None;
    }

    /// Drop the message if its auto-clear duration has elapsed.
    pub fn expire(&mut self) {
        if let (Some(set_at), Some(duration)) = (self.set_at, self.auto_clear_after) {
            if set_at.elapsed() >= duration {
                self.clear();
            }
        }
    }

    /// Get the current message without checking auto-clear.
    #[must_use]
    pub fn peek(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub const fn has_message(&self) -> bool {
        self.message.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_status_message_set_clear() {
        let mut status = StatusMessage::new();
        assert!(!status.has_message());

        status.set("Theme: light");
        assert_eq!(status.peek(), Some("Theme: light"));

        status.clear();
        assert!(status.peek().is_none());
    }

    #[test]
    fn test_status_message_auto_clear() {
        let mut status = StatusMessage::with_auto_clear(Duration::from_millis(30));
        status.set("Exported");
        status.expire();
        assert!(status.has_message());

        thread::sleep(Duration::from_millis(40));
        status.expire();
        assert!(!status.has_message());
    }

    #[test]
    fn test_no_auto_clear_by_default() {
        let mut status = StatusMessage::new();
        status.set("Sticky");
        thread::sleep(Duration::from_millis(5));
        status.expire();
        assert_eq!(status.peek(), Some("Sticky"));
    }
}
