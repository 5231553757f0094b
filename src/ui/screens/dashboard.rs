use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, List, ListItem, Paragraph, Sparkline},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Summary cards
            Constraint::Min(10),   // Category chart + recent transactions
            Constraint::Length(3), // Monthly trend sparkline
        ])
        .split(area);

    render_summary_cards(f, chunks[0], app);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_category_chart(f, middle[0], app);
    render_recent_transactions(f, middle[1], app);
    render_trend_sparkline(f, chunks[2], app);
}

fn render_summary_cards(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    render_card(
        f,
        cards[0],
        "Total Expenses",
        format_amount(app.insights.total_expenses),
        theme::RED,
        Some("all time".into()),
    );
    render_card(
        f,
        cards[1],
        "Categories",
        format!("{}", app.category_breakdown.len()),
        theme::GREEN,
        Some("with spending".into()),
    );
    render_card(
        f,
        cards[2],
        "Transactions",
        format!("{}", app.transaction_count),
        theme::PURPLE,
        None,
    );

    let utilization = app
        .insights
        .budget_utilization
        .to_f64()
        .unwrap_or(0.0);
    render_card(
        f,
        cards[3],
        "Budget Used",
        format!("{utilization:.1}%"),
        theme::usage_color(utilization / 100.0),
        Some(app.month.clone()),
    );
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    value: String,
    color: ratatui::style::Color,
    subtitle: Option<String>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));

    let sub_text = subtitle.unwrap_or_default();

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(sub_text, theme::dim_style())),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}

fn render_category_chart(f: &mut Frame, area: Rect, app: &App) {
    if app.category_breakdown.is_empty() {
        let block = titled_block(" Spending by Category ");
        let msg = Paragraph::new(Line::from(Span::styled(
            "No transactions yet. Add one with :add",
            theme::dim_style(),
        )))
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let bars: Vec<Bar> = app
        .category_breakdown
        .iter()
        .take(11)
        .map(|entry| {
            let val = entry.total.to_u64().unwrap_or(0);
            let label = truncate(entry.category.as_str(), 10);
            Bar::default()
                .value(val)
                .label(Line::from(label))
                .style(Style::default().fg(theme::ACCENT))
                .value_style(
                    Style::default()
                        .fg(theme::TEXT)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(titled_block(" Spending by Category "))
        .data(BarGroup::default().bars(&bars))
        .bar_width(10)
        .bar_gap(1)
        .bar_style(Style::default().fg(theme::ACCENT))
        .value_style(Style::default().fg(theme::TEXT));

    f.render_widget(chart, area);
}

fn render_recent_transactions(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .recent_transactions()
        .iter()
        .map(|txn| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", txn.date), theme::dim_style()),
                Span::styled(
                    format!("{:<20}", truncate(&txn.description, 19)),
                    theme::normal_style(),
                ),
                Span::styled(format_amount(txn.amount), theme::amount_style()),
            ]))
        })
        .collect();

    if items.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "Nothing recorded yet",
            theme::dim_style(),
        )))
        .centered()
        .block(titled_block(" Recent Transactions "));
        f.render_widget(msg, area);
        return;
    }

    let list = List::new(items).block(titled_block(" Recent Transactions "));
    f.render_widget(list, area);
}

fn render_trend_sparkline(f: &mut Frame, area: Rect, app: &App) {
    let data: Vec<u64> = app
        .monthly
        .iter()
        .map(|m| m.total.to_u64().unwrap_or(0))
        .collect();

    let sparkline = Sparkline::default()
        .block(titled_block(" Monthly Spending Trend "))
        .data(&data)
        .style(Style::default().fg(theme::YELLOW));

    f.render_widget(sparkline, area);
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
