use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, progress_bar, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    if app.comparison.is_empty() {
        render_empty(f, area);
        return;
    }

    let items: Vec<ListItem> = app
        .comparison
        .iter()
        .enumerate()
        .skip(app.budget_scroll)
        .take(area.height.saturating_sub(2) as usize)
        .map(|(i, row)| {
            let ratio = if row.budget > Decimal::ZERO {
                (row.spent / row.budget).to_f64().unwrap_or(0.0)
            } else {
                0.0
            };
            let color = theme::usage_color(ratio);

            let style = if i == app.budget_index {
                theme::selected_style()
            } else if i % 2 == 0 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            let remaining = if row.remaining < Decimal::ZERO {
                Span::styled(
                    format!(" over by {}", format_amount(-row.remaining)),
                    Style::default().fg(theme::RED).add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(
                    format!(" {} left", format_amount(row.remaining)),
                    theme::dim_style(),
                )
            };

            let display_name = truncate(row.category.as_str(), 17);
            ListItem::new(Line::from(vec![
                Span::styled(format!("{display_name:<18}"), style),
                Span::styled(
                    format!(
                        "{}/{} ",
                        format_amount(row.spent),
                        format_amount(row.budget)
                    ),
                    Style::default().fg(color),
                ),
                Span::styled(progress_bar(ratio, 20), Style::default().fg(color)),
                Span::styled(
                    format!(" {:.0}%", ratio * 100.0),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                remaining,
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                format!(" Budgets for {} ", app.month),
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(list, area);
}

fn render_empty(f: &mut Frame, area: Rect) {
    let msg = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("No budgets set", theme::dim_style())),
        Line::from(""),
        Line::from(Span::styled(
            "Use :budget <category> <amount> to set a spending limit",
            theme::dim_style(),
        )),
    ])
    .centered()
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                " Budgets ",
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(msg, area);
}
