//! Regional Analysis: regions with their top branches.

use ratatui::{prelude::*, widgets::{Cell, Row}};

use super::{detail_line, render_list_table, section_heading, split_list_detail};
use crate::data::DashboardData;
use crate::metrics::{format_grouped, format_millions, format_percent, format_signed};
use crate::model::RegionDetail;
use crate::tui::theme::{colors, count_badge, Styles};
use crate::tui::view_states::DetailListView;
use crate::tui::widgets::{render_detail_panel, render_empty_state};

pub fn render_regional(frame: &mut Frame, area: Rect, data: &DashboardData, state: &mut DetailListView) {
    let (list_area, detail_area) = split_list_detail(area, 55);
    let scheme = colors();

    let rows: Vec<Row<'static>> = data
        .region_details
        .iter()
        .map(|r| {
            Row::new(vec![
                Cell::from(r.region.clone()),
                Cell::from(r.branches.to_string()),
                Cell::from(format_grouped(i64::from(r.policies))),
                Cell::from(Span::styled(
                    format_percent(r.collection_rate),
                    Style::default().fg(scheme.primary),
                )),
                Cell::from(format_millions(r.collections)),
                Cell::from(Span::styled(
                    format!("{}%", format_signed(r.growth, 1)),
                    Style::default().fg(scheme.trend_color(r.growth > 0.0)),
                )),
            ])
        })
        .collect();

    render_list_table(
        frame,
        list_area,
        "Regions",
        &["Region", "Branches", "Policies", "Rate", "Collected", "Growth"],
        &[
            Constraint::Min(9),
            Constraint::Length(8),
            Constraint::Length(9),
            Constraint::Length(7),
            Constraint::Length(10),
            Constraint::Length(7),
        ],
        rows,
        &mut state.table,
    );
    state.list_area = list_area;

    match state.open().and_then(|idx| data.region_details.get(idx)) {
        Some(region) => render_region_detail(frame, detail_area, region),
        None => render_empty_state(
            frame,
            detail_area,
            "Select a region to see its top branches",
            Some("Enter or click a row"),
        ),
    }
}

fn render_region_detail(frame: &mut Frame, area: Rect, region: &RegionDetail) {
    let scheme = colors();
    let mut lines = vec![
        detail_line("Branches", region.branches.to_string()),
        detail_line("Policies", format_grouped(i64::from(region.policies))),
        detail_line("Collection Rate", format_percent(region.collection_rate)),
        detail_line("Collections", format_millions(region.collections)),
        Line::from(""),
        section_heading("Top Branches"),
    ];

    if region.top_branches.is_empty() {
        lines.push(Line::styled("No branch data", Styles::text_muted()));
    }
    for branch in &region.top_branches {
        let (label, color) = if region.is_above_average(branch) {
            ("Above Avg", scheme.success)
        } else {
            ("Below Avg", scheme.warning)
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", branch.name),
                Style::default().fg(scheme.text).bold(),
            ),
            Span::styled(format!("({})", branch.code), Styles::text_muted()),
        ]));
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(
                format!("{} policies · ", format_grouped(i64::from(branch.policies))),
                Styles::text(),
            ),
            Span::styled(
                format_percent(branch.collection_rate),
                Style::default().fg(scheme.primary),
            ),
            Span::raw(" "),
            count_badge(label, color),
        ]));
    }

    render_detail_panel(frame, area, &region.region, lines, scheme.primary);
}
