//! Branch Performance: branch list, the selected branch's monthly series
//! and an optional peer comparison.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, Wrap},
};

use super::{detail_line, detail_line_colored, render_list_table, section_heading};
use crate::data::DashboardData;
use crate::metrics::{
    branch_monthly_series, collection_opportunity, current_month_collection, find_peer,
    forecast_accuracy, format_grouped, format_millions, format_percent, format_signed,
    format_thousands, performance_label, risk_label, trend_label, PeerComparison,
};
use crate::model::{BranchMonth, BranchProfile};
use crate::tui::theme::{colors, Styles};
use crate::tui::view_states::BranchView;
use crate::tui::widgets::{render_empty_state, CardVariant, KpiCard};

/// Products every branch in the network sells.
const COMMON_PRODUCTS: &str = "Term Life, ULIP, Endowment";

pub fn render_branch(frame: &mut Frame, area: Rect, data: &DashboardData, state: &mut BranchView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),  // Summary cards
            Constraint::Min(8),     // List + detail
            Constraint::Length(10), // Monthly series
        ])
        .split(area);

    render_summary_cards(frame, chunks[0], &data.branches);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);
    render_branch_table(frame, main[0], data, state);

    let Some(selected) = data.branch(state.selected_code()) else {
        render_empty_state(
            frame,
            main[1],
            "Select a branch to view details",
            Some("Use ↑/↓ or click a row"),
        );
        return;
    };
    render_branch_detail(frame, main[1], data, selected, state.show_peer());

    let series = branch_monthly_series(&data.branch_monthly_base, &data.branches, &selected.code);
    let monthly = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[2]);
    render_monthly_table(frame, monthly[0], &selected.name, &series);
    render_monthly_cards(frame, monthly[1], selected, &series);
}

#[allow(clippy::cast_precision_loss)]
fn render_summary_cards(frame: &mut Frame, area: Rect, branches: &[BranchProfile]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    let average_rate = if branches.is_empty() {
        0.0
    } else {
        branches.iter().map(|b| b.collection_rate).sum::<f64>() / branches.len() as f64
    };
    let collections: f64 = branches.iter().map(|b| b.collections).sum();
    let policies: i64 = branches.iter().map(|b| i64::from(b.policies)).sum();

    frame.render_widget(
        KpiCard::new("Total Branches", branches.len().to_string()).variant(CardVariant::Primary),
        cols[0],
    );
    frame.render_widget(
        KpiCard::new("Avg Collection Rate", format_percent(average_rate))
            .variant(CardVariant::Secondary),
        cols[1],
    );
    frame.render_widget(
        KpiCard::new("Total Collections", format_millions(collections))
            .variant(CardVariant::Teal),
        cols[2],
    );
    frame.render_widget(
        KpiCard::new("Total Policies", format_grouped(policies))
            .variant(CardVariant::Accent),
        cols[3],
    );
}

fn render_branch_table(frame: &mut Frame, area: Rect, data: &DashboardData, state: &mut BranchView) {
    let scheme = colors();
    let rows: Vec<Row<'static>> = data
        .branches
        .iter()
        .map(|b| {
            Row::new(vec![
                Cell::from(b.code.clone()),
                Cell::from(b.name.clone()),
                Cell::from(b.region.clone()),
                Cell::from(format_grouped(i64::from(b.policies))),
                Cell::from(Span::styled(
                    format_percent(b.collection_rate),
                    Style::default().fg(scheme.primary),
                )),
                Cell::from(format_millions(b.collections)),
                Cell::from(Span::styled(
                    format!("{}%", format_signed(b.growth, 1)),
                    Style::default().fg(scheme.trend_color(b.growth > 0.0)),
                )),
            ])
        })
        .collect();

    let idx = state.selected_index(&data.branches);
    state.table.select(idx);
    render_list_table(
        frame,
        area,
        "Branches",
        &["Code", "Branch", "Region", "Policies", "Rate", "Collected", "Growth"],
        &[
            Constraint::Length(6),
            Constraint::Min(14),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(7),
            Constraint::Length(9),
            Constraint::Length(7),
        ],
        rows,
        &mut state.table,
    );
    state.list_area = area;
}

fn render_branch_detail(
    frame: &mut Frame,
    area: Rect,
    data: &DashboardData,
    branch: &BranchProfile,
    show_peer: bool,
) {
    let scheme = colors();
    let mut lines = vec![
        Line::styled(
            format!("{} ({})", branch.name, branch.code),
            Style::default().fg(scheme.primary).bold(),
        ),
        detail_line("Policies", format_grouped(i64::from(branch.policies))),
        detail_line_colored(
            "Collection Rate",
            format_percent(branch.collection_rate),
            scheme.primary,
        ),
        detail_line("Collections", format_millions(branch.collections)),
        detail_line("Productivity", format!("{:.0}", branch.productivity)),
        detail_line("Manager", branch.manager.clone()),
        detail_line("Region", branch.region.clone()),
        detail_line("Size", branch.size.label()),
        detail_line_colored(
            "Growth",
            format!(
                "{}% ({})",
                format_signed(branch.growth, 1),
                trend_label(branch.growth)
            ),
            scheme.trend_color(branch.growth > 0.0),
        ),
        detail_line("Performance", performance_label(branch.collection_rate)),
        detail_line("Risk", risk_label(branch.risk_score)),
    ];

    if show_peer {
        lines.push(Line::from(""));
        lines.extend(peer_lines(data, branch));
    } else {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("[p]", Styles::shortcut_key()),
            Span::styled(" Compare with peers", Styles::shortcut_desc()),
        ]));
    }

    let panel = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Branch Details ")
                .title_style(Styles::section_title())
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Styles::border()),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(panel, area);
}

#[allow(clippy::cast_precision_loss)]
fn peer_lines(data: &DashboardData, branch: &BranchProfile) -> Vec<Line<'static>> {
    let scheme = colors();
    let Some(peer) = find_peer(&data.branches, branch) else {
        return vec![Line::styled(
            "No peer branch to compare against",
            Styles::text_muted(),
        )];
    };
    let cmp = PeerComparison::between(branch, peer);
    // Positive gaps mean the peer is ahead.
    let gap_color = |v: f64| if v > 0.0 { scheme.accent } else { scheme.teal };

    vec![
        section_heading("Branch vs Peer Comparison"),
        detail_line(
            "Peer Branch",
            format!("{} ({})", peer.name, peer.code),
        ),
        detail_line(
            "Peer Policies",
            format_grouped(i64::from(peer.policies)),
        ),
        detail_line_colored(
            "Peer Collection Rate",
            format_percent(peer.collection_rate),
            scheme.teal,
        ),
        detail_line("Common Products", COMMON_PRODUCTS),
        detail_line_colored(
            "Performance Gap",
            format!("{}%", format_signed(cmp.performance_gap, 1)),
            gap_color(cmp.performance_gap),
        ),
        detail_line_colored(
            "Policy Volume Gap",
            if cmp.policy_gap > 0 {
                format!("+{}", cmp.policy_gap)
            } else {
                cmp.policy_gap.to_string()
            },
            gap_color(cmp.policy_gap as f64),
        ),
        detail_line_colored(
            "Opportunity",
            format_thousands(cmp.opportunity),
            scheme.primary,
        ),
    ]
}

fn optional_amount(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), format_thousands)
}

fn render_monthly_table(frame: &mut Frame, area: Rect, branch_name: &str, series: &[BranchMonth]) {
    let scheme = colors();
    let header = Row::new(
        ["Month", "Due", "Collected", "Forecast", "Rate", "Efficiency"]
            .into_iter()
            .map(|h| Cell::from(h).style(Style::default().fg(scheme.accent).bold())),
    );
    let rows: Vec<Row> = series
        .iter()
        .map(|m| {
            let style = if m.total_collection.is_some() {
                Styles::text()
            } else {
                Styles::text_muted()
            };
            Row::new(vec![
                Cell::from(m.month.clone()),
                Cell::from(format_thousands(m.total_due)),
                Cell::from(optional_amount(m.total_collection)),
                Cell::from(format_thousands(m.forecast)),
                Cell::from(m.collection_rate.map_or_else(|| "-".to_string(), format_percent)),
                Cell::from(format_percent(m.efficiency)),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(7),
            Constraint::Length(9),
            Constraint::Length(10),
            Constraint::Length(9),
            Constraint::Length(7),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(format!(" Monthly Trend: {branch_name} "))
            .title_style(Styles::section_title())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Styles::border()),
    );
    frame.render_widget(table, area);
}

fn render_monthly_cards(frame: &mut Frame, area: Rect, branch: &BranchProfile, series: &[BranchMonth]) {
    let scheme = colors();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Min(1),
        ])
        .split(area);
    let halves = |r: Rect| {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(r)
    };
    let top = halves(rows[0]);
    let middle = halves(rows[1]);

    frame.render_widget(
        KpiCard::new("Current Month", format_thousands(current_month_collection(series)))
            .variant(CardVariant::Primary),
        top[0],
    );
    frame.render_widget(
        KpiCard::new("Forecast Accuracy", format_percent(forecast_accuracy(series)))
            .variant(CardVariant::Secondary),
        top[1],
    );
    frame.render_widget(
        KpiCard::new("Growth", format!("{}%", format_signed(branch.growth, 1)))
            .variant(CardVariant::Teal),
        middle[0],
    );
    frame.render_widget(
        KpiCard::new("Risk", risk_label(branch.risk_score)).variant(CardVariant::Accent),
        middle[1],
    );

    let opportunity = Line::from(vec![
        Span::styled(" Collection opportunity: ", Styles::label()),
        Span::styled(
            format_thousands(collection_opportunity(series)),
            Style::default().fg(scheme.warning).bold(),
        ),
        Span::styled(" still due this month", Styles::text_muted()),
    ]);
    frame.render_widget(Paragraph::new(opportunity), rows[2]);
}
