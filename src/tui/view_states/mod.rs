//! Concrete `ViewState` implementations.
//!
//! Product, Regional, Channel and Concerning share [`DetailListView`]: a
//! cursor plus an optional open row whose details are shown beside the list.
//! Branch Performance always has exactly one branch selected.

mod branch;
mod detail_list;

pub use branch::BranchView;
pub use detail_list::{DetailList, DetailListView};

use crate::model::DashboardView;
use crate::tui::traits::ViewState;

/// Per-tab state owned by the app. Overview has no selectable content.
#[derive(Debug)]
pub struct ViewStates {
    pub branch: BranchView,
    pub product: DetailListView,
    pub concerning: DetailListView,
    pub channel: DetailListView,
    pub regional: DetailListView,
}

impl Default for ViewStates {
    fn default() -> Self {
        Self {
            branch: BranchView::new(),
            product: DetailListView::new(DetailList::Products),
            concerning: DetailListView::new(DetailList::Cases),
            channel: DetailListView::new(DetailList::Channels),
            regional: DetailListView::new(DetailList::Regions),
        }
    }
}

impl ViewStates {
    /// The state machine behind a tab, if it has one.
    pub fn get_mut(&mut self, view: DashboardView) -> Option<&mut dyn ViewState> {
        match view {
            DashboardView::Overview => None,
            DashboardView::Branch => Some(&mut self.branch),
            DashboardView::Product => Some(&mut self.product),
            DashboardView::Concerning => Some(&mut self.concerning),
            DashboardView::Channel => Some(&mut self.channel),
            DashboardView::Regional => Some(&mut self.regional),
        }
    }

    pub fn get(&self, view: DashboardView) -> Option<&dyn ViewState> {
        match view {
            DashboardView::Overview => None,
            DashboardView::Branch => Some(&self.branch),
            DashboardView::Product => Some(&self.product),
            DashboardView::Concerning => Some(&self.concerning),
            DashboardView::Channel => Some(&self.channel),
            DashboardView::Regional => Some(&self.regional),
        }
    }

    /// Screen area of the clickable list in a view, as last rendered.
    pub fn list_area(&self, view: DashboardView) -> Option<(ratatui::layout::Rect, usize)> {
        match view {
            DashboardView::Overview => None,
            DashboardView::Branch => Some((self.branch.list_area, self.branch.table.offset())),
            DashboardView::Product => Some(self.product.list_geometry()),
            DashboardView::Concerning => Some(self.concerning.list_geometry()),
            DashboardView::Channel => Some(self.channel.list_geometry()),
            DashboardView::Regional => Some(self.regional.list_geometry()),
        }
    }
}
