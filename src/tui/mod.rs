//! Interactive terminal dashboard built on ratatui.
//!
//! # Architecture
//!
//! [`DashboardApp`] owns the dataset, the filter selection and one state
//! machine per tab. Tabs with selectable content implement the
//! [`ViewState`] trait; the event layer routes keys and clicks to the active
//! one, and the view renderers read the same state back when drawing.

mod app;
pub(crate) mod constants;
mod events;
pub mod state;
pub mod theme;
pub mod traits;
mod ui;
pub mod view_states;
pub mod viewmodel;
pub(crate) mod views;
pub(crate) mod widgets;

pub use app::DashboardApp;
pub use events::{handle_key_event, handle_mouse_event, Event, EventHandler};
pub use theme::{
    colors, set_theme, toggle_theme, ColorScheme, FooterHints, Styles, Theme,
};
pub use traits::{EventResult, Shortcut, ViewContext, ViewState};
pub use ui::{render, run_dashboard};
pub use viewmodel::{FilterPanelState, OverlayKind, OverlayState, PanelOutcome, StatusMessage};

pub use state::{ListNavigation, ListState};
