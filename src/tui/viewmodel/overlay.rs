//! Overlay visibility (help, export, legend).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    Help,
    Export,
    Legend,
}

/// At most one overlay is visible; showing one closes the others.
#[derive(Debug, Clone, Default)]
pub struct OverlayState {
    current: Option<OverlayKind>,
}

impl OverlayState {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn has_overlay(&self) -> bool {
        self.current.is_some()
    }

    pub fn is_showing(&self, kind: OverlayKind) -> bool {
        self.current == Some(kind)
    }

    pub const fn current(&self) -> Option<OverlayKind> {
        self.current
    }

    pub fn close(&mut self) {
        self.current = None;
    }

    /// Show `kind`, or close it if it is already showing.
    pub fn toggle(&mut self, kind: OverlayKind) {
        if self.current == Some(kind) {
            self.current = None;
        } else {
            self.current = Some(kind);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlays_are_exclusive() {
        let mut overlay = OverlayState::new();
        overlay.toggle(OverlayKind::Help);
        assert!(overlay.is_showing(OverlayKind::Help));

        overlay.toggle(OverlayKind::Legend);
        assert!(overlay.is_showing(OverlayKind::Legend));
        assert!(!overlay.is_showing(OverlayKind::Help));

        overlay.toggle(OverlayKind::Legend);
        assert!(!overlay.has_overlay());
    }
}
