//! Overview: headline KPIs, the chart grid and the insight panel.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::render_bar_rows;
use crate::data::DashboardData;
use crate::metrics::{
    average_historical_rate, format_grouped, format_millions, format_millions_precise, format_percent,
    format_signed_percent, monthly_performance, overview_insights,
};
use crate::tui::theme::{colors, Styles};
use crate::tui::widgets::{
    CardVariant, ChartCard, ChartVariant, HorizontalBar, KpiCard, MiniSparkline, Trend,
};

pub fn render_overview(frame: &mut Frame, area: Rect, data: &DashboardData) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Primary KPIs
            Constraint::Length(4), // Secondary KPIs
            Constraint::Min(8),    // Charts
            Constraint::Length(5), // Insights
        ])
        .split(area);

    render_primary_kpis(frame, chunks[0], data);
    render_secondary_kpis(frame, chunks[1], data);
    render_charts(frame, chunks[2], data);
    render_insights(frame, chunks[3], data);
}

fn quarters(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area)
}

fn render_primary_kpis(frame: &mut Frame, area: Rect, data: &DashboardData) {
    let kpi = &data.kpi;
    let cols = quarters(area);
    let last_month = "vs last month";

    frame.render_widget(
        KpiCard::new("Total Policies", format_grouped(i64::from(kpi.total_policies)))
            .subtitle("Active renewal policies")
            .trend(Trend::new(kpi.trends.policies, last_month, kpi.trends.policies >= 0.0))
            .variant(CardVariant::Primary),
        cols[0],
    );
    frame.render_widget(
        KpiCard::new("Collection Rate", format_percent(kpi.collection_rate))
            .subtitle("Of total dues collected")
            .trend(Trend::new(
                kpi.trends.collection_rate,
                last_month,
                kpi.trends.collection_rate >= 0.0,
            ))
            .variant(CardVariant::Secondary),
        cols[1],
    );
    frame.render_widget(
        KpiCard::new("Total Collections", format_millions(kpi.total_collections))
            .subtitle(format!("of {} due", format_millions(kpi.total_dues)))
            .trend(Trend::new(
                kpi.trends.collections,
                last_month,
                kpi.trends.collections >= 0.0,
            ))
            .variant(CardVariant::Teal),
        cols[2],
    );
    // Fewer concerning cases is good news.
    frame.render_widget(
        KpiCard::new("Concerning Cases", kpi.concerning_policies.to_string())
            .subtitle("Claims/withdrawals, no collection")
            .trend(Trend::new(
                kpi.trends.concerning_cases,
                last_month,
                kpi.trends.concerning_cases <= 0.0,
            ))
            .variant(CardVariant::Accent),
        cols[3],
    );
}

fn render_secondary_kpis(frame: &mut Frame, area: Rect, data: &DashboardData) {
    let cols = quarters(area);

    frame.render_widget(
        KpiCard::new("Premium Leakage", format_millions(data.kpi.premium_leakage))
            .subtitle("Uncollected premiums"),
        cols[0],
    );
    frame.render_widget(
        KpiCard::new(
            "Surrender Propensity",
            format_percent(data.kpi.surrender_propensity),
        )
        .subtitle("Likelihood of surrender"),
        cols[1],
    );
    frame.render_widget(
        KpiCard::new("Payment Methods", data.payment_mechanisms.len().to_string())
            .subtitle("Active mechanisms"),
        cols[2],
    );
    frame.render_widget(
        KpiCard::new("Product Portfolio", data.products.len().to_string())
            .subtitle("Product lines"),
        cols[3],
    );
}

fn render_charts(frame: &mut Frame, area: Rect, data: &DashboardData) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let top = quarters(rows[0]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[1]);

    let buf = frame.buffer_mut();
    render_rate_trend(buf, top[0], data);
    render_regional_bars(buf, top[1], data);
    render_product_bars(buf, top[2], data);
    render_payment_bars(buf, top[3], data);
    render_concerning_summary(buf, bottom[0], data);
    render_channel_scores(buf, bottom[1], data);
    render_monthly_performance(buf, bottom[2], data);
}

fn render_rate_trend(buf: &mut Buffer, area: Rect, data: &DashboardData) {
    let scheme = colors();
    let inner = ChartCard::new("Collection Rate Trends")
        .variant(ChartVariant::Primary)
        .render(area, buf);
    if inner.height == 0 {
        return;
    }

    let rates: Vec<f64> = data.monthly_trends.iter().map(|t| t.collection_rate).collect();
    let spark_height = inner.height.saturating_sub(1).max(1);
    // Months under the historical average are drawn muted.
    MiniSparkline::new(rates)
        .color(scheme.primary)
        .baseline(average_historical_rate(&data.monthly_trends))
        .render(Rect::new(inner.x, inner.y, inner.width, spark_height), buf);

    if inner.height > 1 {
        if let Some(latest) = data.monthly_trends.last() {
            let text = format!("{}: {}", latest.month, format_percent(latest.collection_rate));
            buf.set_stringn(
                inner.x,
                inner.bottom() - 1,
                text,
                inner.width as usize,
                Styles::value(),
            );
        }
    }
}

fn render_regional_bars(buf: &mut Buffer, area: Rect, data: &DashboardData) {
    let inner = ChartCard::new("Regional Performance").render(area, buf);
    let palette = colors().chart_palette();
    let bars = data
        .regions
        .iter()
        .enumerate()
        .map(|(i, r)| {
            HorizontalBar::new(r.region.clone(), r.collection_rate, 100.0)
                .value_text(format_percent(r.collection_rate))
                .color(palette[i % palette.len()])
                .label_width(8)
        })
        .collect();
    render_bar_rows(buf, inner, bars);
}

fn render_product_bars(buf: &mut Buffer, area: Rect, data: &DashboardData) {
    let inner = ChartCard::new("Product Contribution").render(area, buf);
    let palette = colors().chart_palette();
    let bars = data
        .products
        .iter()
        .enumerate()
        .map(|(i, p)| {
            HorizontalBar::new(p.product.clone(), p.contribution, 100.0)
                .value_text(format!(
                    "{} ({:.0}%)",
                    format_millions(p.amount),
                    p.contribution
                ))
                .color(palette[i % palette.len()])
                .label_width(10)
        })
        .collect();
    render_bar_rows(buf, inner, bars);
}

fn render_payment_bars(buf: &mut Buffer, area: Rect, data: &DashboardData) {
    let inner = ChartCard::new("Payment Mechanism Success").render(area, buf);
    let scheme = colors();
    let bars = data
        .payment_mechanisms
        .iter()
        .map(|m| {
            HorizontalBar::new(m.mechanism.clone(), m.success_rate, 100.0)
                .value_text(format_percent(m.success_rate))
                .color(scheme.teal)
                .label_width(10)
        })
        .collect();
    render_bar_rows(buf, inner, bars);
}

fn render_concerning_summary(buf: &mut Buffer, area: Rect, data: &DashboardData) {
    let scheme = colors();
    let inner = ChartCard::new("Concerning Cases Analysis")
        .description("High-risk cases by product")
        .variant(ChartVariant::Secondary)
        .render(area, buf);

    let max_cases = data
        .concerning_summary
        .iter()
        .map(|s| f64::from(s.cases))
        .fold(0.0, f64::max);
    let bars = data
        .concerning_summary
        .iter()
        .map(|s| {
            HorizontalBar::new(s.product.clone(), f64::from(s.cases), max_cases)
                .value_text(format!(
                    "{} · {}",
                    s.cases,
                    format_millions_precise(s.potential_loss)
                ))
                .color(scheme.risk_high)
                .label_width(10)
        })
        .collect();
    render_bar_rows(buf, inner, bars);
}

fn render_channel_scores(buf: &mut Buffer, area: Rect, data: &DashboardData) {
    let inner = ChartCard::new("Channel Performance Score").render(area, buf);
    let palette = colors().chart_palette();
    let bars = data
        .channels
        .iter()
        .enumerate()
        .map(|(i, c)| {
            HorizontalBar::new(c.channel.clone(), c.score, 100.0)
                .value_text(format!("{:.0}", c.score))
                .color(palette[i % palette.len()])
                .label_width(10)
        })
        .collect();
    render_bar_rows(buf, inner, bars);
}

fn render_monthly_performance(buf: &mut Buffer, area: Rect, data: &DashboardData) {
    let scheme = colors();
    let inner = ChartCard::new("Monthly Performance")
        .variant(ChartVariant::Primary)
        .render(area, buf);

    if data.monthly_trends.is_empty() {
        buf.set_stringn(
            inner.x,
            inner.y,
            "No monthly data",
            inner.width as usize,
            Styles::text_muted(),
        );
        return;
    }

    let perf = monthly_performance(&data.monthly_trends);
    let change_color = scheme.trend_color(perf.collections_change >= 0.0);
    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{} collections: ", perf.month), Styles::label()),
            Span::styled(format_millions(perf.collections), Styles::value()),
            Span::styled(
                format!(" ({})", format_signed_percent(perf.collections_change)),
                Style::default().fg(change_color),
            ),
        ]),
        Line::from(vec![
            Span::styled("Collection gap: ", Styles::label()),
            Span::styled(
                format_millions(perf.collection_gap),
                Style::default().fg(scheme.warning).bold(),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                format!("Avg rate ({} months): ", perf.history_months),
                Styles::label(),
            ),
            Span::styled(
                format_percent(perf.average_rate),
                Style::default().fg(scheme.success).bold(),
            ),
        ]),
    ];
    Paragraph::new(lines).render(inner, buf);
}

fn render_insights(frame: &mut Frame, area: Rect, data: &DashboardData) {
    let scheme = colors();
    let markers = [scheme.error, scheme.warning, scheme.success];
    let lines: Vec<Line> = overview_insights(data)
        .into_iter()
        .zip(markers.iter().cycle())
        .map(|(insight, color)| {
            Line::from(vec![
                Span::styled("● ", Style::default().fg(*color)),
                Span::styled(format!("{}: ", insight.title), Style::default().fg(*color).bold()),
                Span::styled(insight.message, Styles::text()),
            ])
        })
        .collect();

    let panel = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Key Insights & Recommendations ")
                .title_style(Styles::section_title())
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Styles::border()),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(panel, area);
}
