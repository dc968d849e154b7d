//! Navigation tags for the dashboard views.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The views reachable from the navigation tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DashboardView {
    Overview,
    Branch,
    Product,
    Concerning,
    Channel,
    Regional,
}

impl DashboardView {
    /// All views in tab order.
    pub const ALL: [Self; 6] = [
        Self::Overview,
        Self::Branch,
        Self::Product,
        Self::Concerning,
        Self::Channel,
        Self::Regional,
    ];

    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Branch => "Branch Performance",
            Self::Product => "Product Portfolio",
            Self::Concerning => "Concerning Cases",
            Self::Channel => "Channel Analysis",
            Self::Regional => "Regional Analysis",
        }
    }

    #[must_use]
    pub const fn shortcut(&self) -> &'static str {
        match self {
            Self::Overview => "1",
            Self::Branch => "2",
            Self::Product => "3",
            Self::Concerning => "4",
            Self::Channel => "5",
            Self::Regional => "6",
        }
    }

    /// Stable tag used in config files, preferences and the CLI.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Branch => "branch",
            Self::Product => "product",
            Self::Concerning => "concerning",
            Self::Channel => "channel",
            Self::Regional => "regional",
        }
    }

    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim().to_lowercase();
        Self::ALL.into_iter().find(|v| v.tag() == tag)
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Overview => 0,
            Self::Branch => 1,
            Self::Product => 2,
            Self::Concerning => 3,
            Self::Channel => 4,
            Self::Regional => 5,
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Overview => Self::Branch,
            Self::Branch => Self::Product,
            Self::Product => Self::Concerning,
            Self::Concerning => Self::Channel,
            Self::Channel => Self::Regional,
            Self::Regional => Self::Overview,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Overview => Self::Regional,
            Self::Branch => Self::Overview,
            Self::Product => Self::Branch,
            Self::Concerning => Self::Product,
            Self::Channel => Self::Concerning,
            Self::Regional => Self::Channel,
        }
    }
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// The view currently mounted in the content area.
///
/// Tags that do not name a known view still mount, as a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveView {
    Known(DashboardView),
    Unrecognized(String),
}

impl Default for ActiveView {
    fn default() -> Self {
        Self::Known(DashboardView::Overview)
    }
}

impl ActiveView {
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        DashboardView::from_tag(tag).map_or_else(|| Self::Unrecognized(tag.trim().to_string()), Self::Known)
    }

    #[must_use]
    pub const fn known(&self) -> Option<DashboardView> {
        match self {
            Self::Known(view) => Some(*view),
            Self::Unrecognized(_) => None,
        }
    }

    /// Heading for the placeholder, e.g. `forecast` becomes `Forecast View`.
    #[must_use]
    pub fn placeholder_title(&self) -> String {
        match self {
            Self::Known(view) => format!("{} View", view.title()),
            Self::Unrecognized(tag) => {
                let mut chars = tag.chars();
                let capitalized: String = chars
                    .next()
                    .map(|first| first.to_uppercase().chain(chars).collect())
                    .unwrap_or_default();
                format!("{capitalized} View")
            }
        }
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::Known(view) => view.tag(),
            Self::Unrecognized(tag) => tag,
        }
    }
}

impl From<DashboardView> for ActiveView {
    fn from(view: DashboardView) -> Self {
        Self::Known(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_roundtrip() {
        for view in DashboardView::ALL {
            assert_eq!(DashboardView::from_tag(view.tag()), Some(view));
        }
        assert_eq!(DashboardView::from_tag(" Branch "), Some(DashboardView::Branch));
        assert_eq!(DashboardView::from_tag("forecast"), None);
    }

    #[test]
    fn test_next_prev_cycle() {
        let mut view = DashboardView::Overview;
        for _ in 0..DashboardView::ALL.len() {
            view = view.next();
        }
        assert_eq!(view, DashboardView::Overview);
        assert_eq!(DashboardView::Overview.prev(), DashboardView::Regional);
    }

    #[test]
    fn test_index_matches_order() {
        for (i, view) in DashboardView::ALL.iter().enumerate() {
            assert_eq!(view.index(), i);
        }
    }

    #[test]
    fn test_unrecognized_placeholder_title() {
        let active = ActiveView::from_tag("forecast");
        assert_eq!(active, ActiveView::Unrecognized("forecast".to_string()));
        assert_eq!(active.placeholder_title(), "Forecast View");
        assert!(active.known().is_none());
    }

    #[test]
    fn test_known_from_tag() {
        assert_eq!(
            ActiveView::from_tag("concerning"),
            ActiveView::Known(DashboardView::Concerning)
        );
    }
}
