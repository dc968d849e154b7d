//! Named constants for TUI layout and navigation.

/// Number of items to scroll per page-up/page-down action.
pub(crate) const PAGE_SIZE: usize = 10;

/// Interval between crossterm polls on the event thread, in milliseconds.
pub(crate) const EVENT_POLL_MS: u64 = 100;

/// Shortest tick interval the event thread accepts, in milliseconds.
pub(crate) const MIN_TICK_MS: u64 = 16;

/// Height of the dashboard header (title and subtitle rows).
pub(crate) const HEADER_HEIGHT: u16 = 2;

/// Height of the tab bar including its bottom border.
pub(crate) const TABS_HEIGHT: u16 = 3;

/// Height of the filter panel when open.
pub(crate) const FILTER_PANEL_HEIGHT: u16 = 5;

/// Rows above the first data row of a bordered table (border and header).
pub(crate) const TABLE_HEADER_ROWS: u16 = 2;

/// Branch selected when the dashboard opens.
pub(crate) const DEFAULT_BRANCH: &str = "BR001";
