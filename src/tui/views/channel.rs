//! Channel Analysis: channel table, performance badges and a metric profile.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row},
};

use super::{detail_line, render_bar_rows, render_list_table, section_heading, split_list_detail};
use crate::data::DashboardData;
use crate::metrics::{
    channel_badge, format_grouped, format_inr, format_millions, format_percent, format_signed,
    ChannelMetric,
};
use crate::model::ChannelMetrics;
use crate::tui::theme::{colors, level_badge, Styles};
use crate::tui::view_states::DetailListView;
use crate::tui::widgets::{render_empty_state, HorizontalBar};

pub fn render_channel(frame: &mut Frame, area: Rect, data: &DashboardData, state: &mut DetailListView) {
    let (list_area, detail_area) = split_list_detail(area, 55);
    let scheme = colors();

    let rows: Vec<Row<'static>> = data
        .channel_metrics
        .iter()
        .map(|c| {
            Row::new(vec![
                Cell::from(c.channel.clone()),
                Cell::from(format_grouped(i64::from(c.policies))),
                Cell::from(format_millions(c.collections)),
                Cell::from(Span::styled(
                    format_percent(c.collection_rate),
                    Style::default().fg(scheme.primary),
                )),
                Cell::from(Span::styled(
                    format!("{}%", format_signed(c.growth, 1)),
                    Style::default().fg(scheme.trend_color(c.growth > 0.0)),
                )),
            ])
        })
        .collect();

    render_list_table(
        frame,
        list_area,
        "Channels",
        &["Channel", "Policies", "Collected", "Rate", "Growth"],
        &[
            Constraint::Min(12),
            Constraint::Length(9),
            Constraint::Length(10),
            Constraint::Length(7),
            Constraint::Length(7),
        ],
        rows,
        &mut state.table,
    );
    state.list_area = list_area;

    match state.open().and_then(|idx| data.channel_metrics.get(idx)) {
        Some(channel) => render_channel_detail(frame, detail_area, channel),
        None => render_empty_state(
            frame,
            detail_area,
            "Select a channel to view its performance profile",
            Some("Enter or click a row"),
        ),
    }
}

fn badge_line(label: &str, value: String, metric_value: f64, metric: ChannelMetric) -> Line<'static> {
    let badge = channel_badge(metric_value, metric);
    Line::from(vec![
        Span::styled(format!("{label:<22}"), Styles::label()),
        Span::styled(format!("{value:<8}"), Styles::value()),
        level_badge(badge.label, badge.level),
    ])
}

fn render_channel_detail(frame: &mut Frame, area: Rect, channel: &ChannelMetrics) {
    let scheme = colors();
    let block = Block::default()
        .title(format!(" {} ", channel.channel))
        .title_style(Style::default().fg(scheme.primary).bold())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(scheme.primary));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        badge_line(
            "Collection Rate",
            format_percent(channel.collection_rate),
            channel.collection_rate,
            ChannelMetric::CollectionRate,
        ),
        badge_line(
            "Growth",
            format!("{}%", format_signed(channel.growth, 1)),
            channel.growth,
            ChannelMetric::Growth,
        ),
        badge_line(
            "Profitability",
            format_percent(channel.profitability),
            channel.profitability,
            ChannelMetric::Profitability,
        ),
        badge_line(
            "Customer Satisfaction",
            format!("{:.1}/5", channel.customer_satisfaction),
            channel.customer_satisfaction,
            ChannelMetric::CustomerSatisfaction,
        ),
        Line::from(""),
        detail_line("Avg Deal Size", format_inr(channel.avg_deal_size)),
        detail_line("Conversion Rate", format_percent(channel.conversion_rate)),
        detail_line("Retention Rate", format_percent(channel.retention_rate)),
        detail_line("Cost per Acquisition", format_inr(channel.cost_per_acquisition)),
        Line::from(""),
        section_heading("Performance Profile"),
    ];

    let text_height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    frame.render_widget(Paragraph::new(lines), inner);

    if inner.height > text_height {
        let profile_area = Rect::new(
            inner.x,
            inner.y + text_height,
            inner.width,
            inner.height - text_height,
        );
        let palette = scheme.chart_palette();
        // Scaled values can exceed 100, so the axis stretches to fit.
        let profile = channel.scaled_profile();
        let max = profile.iter().map(|(_, v)| *v).fold(100.0, f64::max);
        let bars = profile
            .iter()
            .enumerate()
            .map(|(i, (name, value))| {
                HorizontalBar::new(*name, *value, max)
                    .value_text(format!("{value:.1}"))
                    .color(palette[i % palette.len()])
                    .label_width(16)
            })
            .collect();
        render_bar_rows(frame.buffer_mut(), profile_area, bars);
    }
}
