//! State shared across the dashboard that is not tied to a single view.
//!
//! - [`FilterPanelState`] - filter panel visibility and focus
//! - [`OverlayState`] - help, export and legend overlays
//! - [`StatusMessage`] - temporary footer notices

pub mod filter;
mod overlay;
mod status;

pub use filter::{FilterPanelState, PanelOutcome};
pub use overlay::{OverlayKind, OverlayState};
pub use status::StatusMessage;
