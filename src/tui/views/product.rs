//! Product Portfolio: product lines with a sub-product drill-down.

use ratatui::{prelude::*, widgets::{Cell, Row}};

use super::{detail_line, render_list_table, section_heading, split_list_detail};
use crate::data::DashboardData;
use crate::metrics::{format_grouped, format_inr, format_millions, format_signed};
use crate::model::ProductLine;
use crate::tui::theme::{colors, Styles};
use crate::tui::view_states::DetailListView;
use crate::tui::widgets::{render_detail_panel, render_empty_state, HorizontalBar};

pub fn render_product(frame: &mut Frame, area: Rect, data: &DashboardData, state: &mut DetailListView) {
    let (list_area, detail_area) = split_list_detail(area, 60);
    let scheme = colors();

    let rows: Vec<Row<'static>> = data
        .product_lines
        .iter()
        .map(|p| {
            Row::new(vec![
                Cell::from(p.name.clone()),
                Cell::from(format!("{:.1}%", p.contribution)),
                Cell::from(format_millions(p.amount)),
                Cell::from(format_grouped(i64::from(p.policies))),
                Cell::from(Span::styled(
                    format!("{}%", format_signed(p.growth, 1)),
                    Style::default().fg(scheme.trend_color(p.growth > 0.0)),
                )),
                Cell::from(format_inr(p.avg_premium)),
            ])
        })
        .collect();

    render_list_table(
        frame,
        list_area,
        "Product Portfolio",
        &["Product", "Share", "Amount", "Policies", "Growth", "Avg Premium"],
        &[
            Constraint::Min(12),
            Constraint::Length(7),
            Constraint::Length(8),
            Constraint::Length(9),
            Constraint::Length(7),
            Constraint::Length(12),
        ],
        rows,
        &mut state.table,
    );
    state.list_area = list_area;

    match state.open().and_then(|idx| data.product_lines.get(idx)) {
        Some(product) => render_sub_products(frame, detail_area, product),
        None => render_empty_state(
            frame,
            detail_area,
            "Select a product to view its sub-products",
            Some("Enter or click a row"),
        ),
    }
}

fn render_sub_products(frame: &mut Frame, area: Rect, product: &ProductLine) {
    let scheme = colors();
    let mut lines = vec![
        detail_line("Contribution", format!("{:.1}%", product.contribution)),
        detail_line("Amount", format_millions(product.amount)),
        detail_line("Policies", format_grouped(i64::from(product.policies))),
        Line::from(""),
        section_heading("Sub-products"),
    ];

    if product.sub_products.is_empty() {
        lines.push(Line::styled("No sub-products recorded", Styles::text_muted()));
    }
    for sub in &product.sub_products {
        lines.push(Line::from(vec![
            Span::styled(format!("• {}", sub.name), Style::default().fg(scheme.text).bold()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("    ", Styles::text()),
            Span::styled(format!("{:.1}%", sub.contribution), Style::default().fg(scheme.primary)),
            Span::styled(" · ", Styles::text_muted()),
            Span::styled(format_millions(sub.amount), Styles::text()),
            Span::styled(" · ", Styles::text_muted()),
            Span::styled(
                format!("{} policies", format_grouped(i64::from(sub.policies))),
                Styles::text(),
            ),
        ]));
    }

    render_detail_panel(frame, area, &product.name, lines, scheme.primary);

    // Contribution bars along the bottom of the panel when there is room.
    let bar_rows = u16::try_from(product.sub_products.len()).unwrap_or(u16::MAX);
    let needed = 2 * bar_rows + 6 + bar_rows + 2;
    if area.height >= needed && area.width > 12 {
        let bars_area = Rect::new(
            area.x + 1,
            area.bottom() - 1 - bar_rows,
            area.width - 2,
            bar_rows,
        );
        let palette = scheme.chart_palette();
        let bars = product
            .sub_products
            .iter()
            .enumerate()
            .map(|(i, sub)| {
                HorizontalBar::new(sub.name.clone(), sub.contribution, 100.0)
                    .value_text(format!("{:.0}%", sub.contribution))
                    .color(palette[i % palette.len()])
            })
            .collect();
        super::render_bar_rows(frame.buffer_mut(), bars_area, bars);
    }
}
