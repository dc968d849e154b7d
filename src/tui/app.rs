//! Dashboard application state.
//!
//! `DashboardApp` owns everything the frame renders: the dataset, the active
//! tab, the filter selection, per-view state and the overlays. Event handlers
//! mutate it; rendering only reads it (apart from recording list geometry
//! for mouse hit-testing).

use chrono::{DateTime, Local};
use std::path::PathBuf;
use std::time::Duration;

use crate::config::{AppConfig, ExportConfig, TuiPreferences};
use crate::data::DashboardData;
use crate::model::{ActiveView, DashboardView, FilterSelection};
use crate::reports::{default_file_name, export_to_file, ExportFormat, ExportScope};
use crate::tui::theme;
use crate::tui::traits::{EventResult, ViewContext};
use crate::tui::view_states::ViewStates;
use crate::tui::viewmodel::{FilterPanelState, OverlayKind, OverlayState, StatusMessage};

/// How long footer notices stay up.
const STATUS_TIMEOUT: Duration = Duration::from_secs(5);

pub struct DashboardApp {
    pub data: DashboardData,
    pub active_view: ActiveView,
    pub filters: FilterSelection,
    pub filter_panel: FilterPanelState,
    pub views: ViewStates,
    pub overlays: OverlayState,
    pub status: StatusMessage,
    /// Local time the dashboard was opened, shown in the header.
    pub last_updated: DateTime<Local>,
    pub export: ExportConfig,
    pub mouse_enabled: bool,
    pub tick: u64,
    pub should_quit: bool,
    /// Regions of the last frame, for mouse hit-testing.
    pub(crate) layout: LayoutCache,
}

/// Screen areas recorded while rendering.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct LayoutCache {
    pub tabs: ratatui::layout::Rect,
    pub filter_toggle: ratatui::layout::Rect,
}

impl DashboardApp {
    pub fn new(data: DashboardData) -> Self {
        Self {
            data,
            active_view: ActiveView::default(),
            filters: FilterSelection::new(),
            filter_panel: FilterPanelState::new(),
            views: ViewStates::default(),
            overlays: OverlayState::new(),
            status: StatusMessage::with_auto_clear(STATUS_TIMEOUT),
            last_updated: Local::now(),
            export: ExportConfig::default(),
            mouse_enabled: true,
            tick: 0,
            should_quit: false,
            layout: LayoutCache::default(),
        }
    }

    /// Build the app from loaded data and the effective config.
    pub fn from_config(data: DashboardData, config: &AppConfig) -> Self {
        let mut app = Self::new(data);
        app.active_view = ActiveView::from_tag(&config.tui.default_view);
        app.filters = config.filters.clone();
        app.export = config.export.clone();
        app.mouse_enabled = config.tui.mouse_enabled;
        app
    }

    /// Open on a tag; unknown tags mount the placeholder.
    #[must_use]
    pub fn with_view(mut self, tag: &str) -> Self {
        self.active_view = ActiveView::from_tag(tag);
        self
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    pub fn select_view(&mut self, view: DashboardView) {
        if self.active_view != ActiveView::Known(view) {
            tracing::debug!(view = view.tag(), "view switched");
        }
        self.active_view = ActiveView::Known(view);
    }

    /// Next tab; from the placeholder this mounts the first tab.
    pub fn next_view(&mut self) {
        let next = self
            .active_view
            .known()
            .map_or(DashboardView::Overview, DashboardView::next);
        self.select_view(next);
    }

    /// Previous tab; from the placeholder this mounts the last tab.
    pub fn prev_view(&mut self) {
        let prev = self
            .active_view
            .known()
            .map_or(DashboardView::Regional, DashboardView::prev);
        self.select_view(prev);
    }

    // ------------------------------------------------------------------
    // Filters
    // ------------------------------------------------------------------

    /// Replace the filter selection. Row indices into the filtered case list
    /// are no longer meaningful afterwards, so that view is reset.
    pub fn set_filters(&mut self, filters: FilterSelection) {
        if filters != self.filters {
            self.filters = filters;
            self.views.concerning.reset();
        }
    }

    pub fn clear_filters(&mut self) {
        self.set_filters(FilterSelection::clear());
    }

    // ------------------------------------------------------------------
    // View dispatch
    // ------------------------------------------------------------------

    /// Forward a key to the active view's state machine.
    pub fn dispatch_key(&mut self, key: crossterm::event::KeyEvent) -> EventResult {
        let Some(view) = self.active_view.known() else {
            return EventResult::Ignored;
        };
        let ctx = ViewContext {
            data: &self.data,
            filters: &self.filters,
        };
        let result = match self.views.get_mut(view) {
            Some(state) => state.handle_key(key, &ctx),
            None => EventResult::Ignored,
        };
        self.apply_result(result)
    }

    /// Forward a click on the `row`-th list row of the active view.
    pub fn dispatch_click(&mut self, row: usize) -> EventResult {
        let Some(view) = self.active_view.known() else {
            return EventResult::Ignored;
        };
        let ctx = ViewContext {
            data: &self.data,
            filters: &self.filters,
        };
        let result = match self.views.get_mut(view) {
            Some(state) => state.handle_click(row, &ctx),
            None => EventResult::Ignored,
        };
        self.apply_result(result)
    }

    fn apply_result(&mut self, result: EventResult) -> EventResult {
        if let EventResult::StatusMessage(msg) = &result {
            self.status.set(msg.clone());
        }
        result
    }

    // ------------------------------------------------------------------
    // Overlays and status
    // ------------------------------------------------------------------

    pub fn toggle_overlay(&mut self, kind: OverlayKind) {
        self.overlays.toggle(kind);
    }

    pub const fn has_overlay(&self) -> bool {
        self.overlays.has_overlay()
    }

    pub fn close_overlays(&mut self) {
        self.overlays.close();
    }

    pub fn set_status_message(&mut self, msg: impl Into<String>) {
        self.status.set(msg);
    }

    pub fn clear_status_message(&mut self) {
        self.status.clear();
    }

    // ------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------

    /// What the export overlay writes for the current tab.
    #[must_use]
    pub fn export_scope(&self) -> Option<ExportScope> {
        self.active_view.known().map(ExportScope::from)
    }

    /// Export the active view to the configured directory.
    pub fn export(&mut self, format: ExportFormat) -> Option<PathBuf> {
        let Some(scope) = self.export_scope() else {
            self.set_status_message("Nothing to export from this view");
            return None;
        };
        let dir = self.export.directory.clone().unwrap_or_default();
        let path = dir.join(default_file_name(scope, format));

        match export_to_file(&self.data, scope, &self.filters, format, &path) {
            Ok(written) => {
                self.set_status_message(format!("Exported to {}", written.display()));
                Some(written)
            }
            Err(e) => {
                tracing::warn!(error = %e, "export failed");
                self.set_status_message(format!("Export failed: {e}"));
                None
            }
        }
    }

    /// Cycle the theme and persist the choice.
    pub fn toggle_theme(&mut self) {
        let name = theme::toggle_theme();
        let mut prefs = TuiPreferences::load();
        prefs.theme = Some(name.to_string());
        match prefs.save() {
            Ok(()) => self.set_status_message(format!("Theme: {name}")),
            Err(e) => {
                tracing::warn!(error = %e, "failed to save theme preference");
                self.set_status_message(format!("Theme: {name} (not saved: {e})"));
            }
        }
    }

    /// Called on every tick of the event loop.
    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        self.status.expire();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::mock;
    use crate::model::FilterField;

    fn app() -> DashboardApp {
        DashboardApp::new(mock::dashboard_data())
    }

    #[test]
    fn test_opens_on_overview() {
        let app = app();
        assert_eq!(app.active_view, ActiveView::Known(DashboardView::Overview));
        assert!(!app.filters.has_active_filters());
    }

    #[test]
    fn test_tab_cycle_wraps() {
        let mut app = app();
        app.prev_view();
        assert_eq!(app.active_view, ActiveView::Known(DashboardView::Regional));
        app.next_view();
        assert_eq!(app.active_view, ActiveView::Known(DashboardView::Overview));
    }

    #[test]
    fn test_unknown_tag_then_tab_mounts_overview() {
        let mut app = app().with_view("forecast");
        assert_eq!(app.active_view.known(), None);
        assert!(app.export_scope().is_none());
        app.next_view();
        assert_eq!(app.active_view, ActiveView::Known(DashboardView::Overview));
    }

    #[test]
    fn test_filter_change_resets_case_selection() {
        let mut app = app();
        app.select_view(DashboardView::Concerning);
        app.dispatch_click(0);
        assert_eq!(app.views.concerning.open(), Some(0));

        app.set_filters(app.filters.update(FilterField::Region, "North"));
        assert_eq!(app.views.concerning.open(), None);
    }

    #[test]
    fn test_from_config() {
        let config = AppConfig::builder()
            .default_view("branch")
            .mouse_enabled(false)
            .filters(FilterSelection::new().update(FilterField::Product, "ULIP"))
            .build();
        let app = DashboardApp::from_config(mock::dashboard_data(), &config);
        assert_eq!(app.active_view, ActiveView::Known(DashboardView::Branch));
        assert!(!app.mouse_enabled);
        assert_eq!(app.filters.product, "ULIP");
    }

    #[test]
    fn test_export_writes_into_directory() {
        let tmp = tempfile::TempDir::new().unwrap();
        let mut app = app();
        app.export.directory = Some(tmp.path().to_path_buf());
        app.select_view(DashboardView::Regional);

        let path = app.export(ExportFormat::Csv).unwrap();
        assert!(path.starts_with(tmp.path()));
        assert!(std::fs::read_to_string(&path).unwrap().contains("# Regions"));
        assert!(app.status.peek().unwrap().starts_with("Exported to"));
    }
}
