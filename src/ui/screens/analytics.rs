use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, progress_bar, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_monthly_chart(f, chunks[0], app);
    render_category_shares(f, chunks[1], app);
}

fn render_monthly_chart(f: &mut Frame, area: Rect, app: &App) {
    if app.monthly.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "No data to chart yet",
            theme::dim_style(),
        )))
        .centered()
        .block(titled_block(" Monthly Expenses "));
        f.render_widget(msg, area);
        return;
    }

    let bars: Vec<Bar> = app
        .monthly
        .iter()
        .map(|m| {
            Bar::default()
                .value(m.total.to_u64().unwrap_or(0))
                .label(Line::from(m.label.clone()))
                .style(Style::default().fg(theme::ACCENT))
                .value_style(
                    Style::default()
                        .fg(theme::TEXT)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(titled_block(" Monthly Expenses "))
        .data(BarGroup::default().bars(&bars))
        .bar_width(9)
        .bar_gap(2)
        .bar_style(Style::default().fg(theme::ACCENT))
        .value_style(Style::default().fg(theme::TEXT));

    f.render_widget(chart, area);
}

fn render_category_shares(f: &mut Frame, area: Rect, app: &App) {
    let total = app.insights.total_expenses;
    if app.category_breakdown.is_empty() || total <= Decimal::ZERO {
        let msg = Paragraph::new(Line::from(Span::styled(
            "No spending recorded",
            theme::dim_style(),
        )))
        .centered()
        .block(titled_block(" Category Breakdown "));
        f.render_widget(msg, area);
        return;
    }

    let items: Vec<ListItem> = app
        .category_breakdown
        .iter()
        .take(area.height.saturating_sub(2) as usize)
        .map(|entry| {
            let share = (entry.total / total).to_f64().unwrap_or(0.0);
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<18}", truncate(entry.category.as_str(), 17)),
                    theme::normal_style(),
                ),
                Span::styled(
                    format!("{:>12} ", format_amount(entry.total)),
                    theme::amount_style(),
                ),
                Span::styled(
                    progress_bar(share, 24),
                    Style::default().fg(theme::ACCENT),
                ),
                Span::styled(format!(" {:.1}%", share * 100.0), theme::dim_style()),
            ]))
        })
        .collect();

    let list = List::new(items).block(titled_block(" Category Breakdown "));
    f.render_widget(list, area);
}

fn titled_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            title,
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ))
}
