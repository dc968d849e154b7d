//! Concerning Cases: filtered high-risk policies with a case detail panel.

use ratatui::{
    prelude::*,
    widgets::{Cell, Paragraph, Row},
};

use super::{detail_line, detail_line_colored, render_list_table, section_heading, split_list_detail};
use crate::data::DashboardData;
use crate::metrics::format_inr;
use crate::model::{ConcerningCase, FilterSelection};
use crate::tui::theme::{colors, count_badge, risk_badge, Styles};
use crate::tui::view_states::DetailListView;
use crate::tui::widgets::{render_detail_panel, render_empty_state, truncate_str};

pub fn render_concerning(
    frame: &mut Frame,
    area: Rect,
    data: &DashboardData,
    filters: &FilterSelection,
    state: &mut DetailListView,
) {
    let scheme = colors();
    let cases: Vec<&ConcerningCase> = data.filtered_cases(filters).collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(5)])
        .split(area);

    let mut header = vec![
        Span::styled(" High-Risk Policies ", Styles::section_title()),
        count_badge(&format!("{} Critical Cases", cases.len()), scheme.risk_high),
    ];
    if filters.has_active_filters() {
        header.push(Span::styled(
            format!("  of {} before filters", data.concerning_cases.len()),
            Styles::text_muted(),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(header)), chunks[0]);

    let (list_area, detail_area) = split_list_detail(chunks[1], 55);

    let rows: Vec<Row<'static>> = cases
        .iter()
        .map(|c| {
            let due_color = if c.due_days > 60 { scheme.error } else { scheme.warning };
            Row::new(vec![
                Cell::from(c.policy_number.clone()),
                Cell::from(truncate_str(&c.customer.name, 18)),
                Cell::from(c.region.clone()),
                Cell::from(Span::styled(
                    format!("{}d", c.due_days),
                    Style::default().fg(due_color),
                )),
                Cell::from(format_inr(c.dues)),
                Cell::from(risk_badge(c.risk_band())),
            ])
        })
        .collect();

    render_list_table(
        frame,
        list_area,
        "Cases",
        &["Policy", "Customer", "Region", "Due", "Dues", "Risk"],
        &[
            Constraint::Length(9),
            Constraint::Min(12),
            Constraint::Length(8),
            Constraint::Length(5),
            Constraint::Length(10),
            Constraint::Length(13),
        ],
        rows,
        &mut state.table,
    );
    state.list_area = list_area;

    match state.open().and_then(|idx| cases.get(idx)) {
        Some(case) => render_case_detail(frame, detail_area, case),
        None if cases.is_empty() => render_empty_state(
            frame,
            detail_area,
            "No cases match the current filters",
            Some("Press f to adjust filters"),
        ),
        None => render_empty_state(
            frame,
            detail_area,
            "Select a case to view details",
            Some("Enter or click a row"),
        ),
    }
}

fn render_case_detail(frame: &mut Frame, area: Rect, case: &ConcerningCase) {
    let scheme = colors();
    let band = case.risk_band();

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{}  ", case.policy_number),
                Style::default().fg(scheme.primary).bold(),
            ),
            risk_badge(band),
        ]),
        Line::from(""),
        section_heading("Contact"),
        detail_line("Customer", case.customer.name.clone()),
        detail_line("Phone", case.customer.phone.clone()),
        detail_line("Email", case.customer.email.clone()),
        detail_line("Last Contact", case.last_contact.format("%Y-%m-%d").to_string()),
        Line::from(""),
        section_heading("Policy"),
        detail_line("Branch", case.branch_code.clone()),
        detail_line("Region", case.region.clone()),
        detail_line("Product", case.product.clone()),
        detail_line_colored("Outstanding", format_inr(case.dues), scheme.error),
        detail_line("Overdue", format!("{} days", case.due_days)),
        detail_line(
            "Claims / Withdrawals",
            format!("{} / {}", case.claims, case.withdrawals),
        ),
        detail_line_colored(
            "Risk Score",
            format!("{}/100", case.risk_score),
            scheme.risk_color(band),
        ),
    ];

    if !case.reasons.is_empty() {
        lines.push(Line::from(""));
        lines.push(section_heading("Risk Factors"));
        for reason in &case.reasons {
            lines.push(Line::from(vec![
                Span::styled("  ⚠ ", Style::default().fg(scheme.warning)),
                Span::styled(reason.clone(), Styles::text()),
            ]));
        }
    }
    if !case.actions.is_empty() {
        lines.push(Line::from(""));
        lines.push(section_heading("Recommended Actions"));
        for action in &case.actions {
            lines.push(Line::from(vec![
                Span::styled("  → ", Style::default().fg(scheme.success)),
                Span::styled(action.clone(), Styles::text()),
            ]));
        }
    }

    render_detail_panel(frame, area, "Case Details", lines, scheme.risk_color(band));
}
