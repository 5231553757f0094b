use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::format_amount;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Metric cards
            Constraint::Min(8),    // Narrative insights
            Constraint::Length(5), // Health score gauge
        ])
        .split(area);

    render_metric_cards(f, chunks[0], app);
    render_narrative(f, chunks[1], app);
    render_health_score(f, chunks[2], app);
}

fn render_metric_cards(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    render_card(
        f,
        cards[0],
        "Average Transaction",
        format_amount(app.insights.avg_transaction),
        theme::ACCENT,
        "per transaction".into(),
    );

    let (top_name, top_sub) = match &app.insights.top_category {
        Some(top) => (
            top.category.as_str().to_string(),
            format!("{} spent", format_amount(top.total)),
        ),
        None => ("N/A".to_string(), "$0.00 spent".to_string()),
    };
    render_card(f, cards[1], "Top Category", top_name, theme::GREEN, top_sub);

    render_card(
        f,
        cards[2],
        "This Month",
        format_amount(app.insights.current_month_spending),
        theme::PURPLE,
        format!("spending in {}", app.month),
    );
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    value: String,
    color: ratatui::style::Color,
    subtitle: String,
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

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle, theme::dim_style())),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}

fn render_narrative(f: &mut Frame, area: Rect, app: &App) {
    let utilization = app.insights.budget_utilization;

    let budget_line = if utilization < Decimal::from(80) {
        "You're doing great! Your spending is well within budget limits."
    } else if utilization < Decimal::from(100) {
        "You're approaching your budget limits. Consider monitoring your expenses more closely."
    } else {
        "You've exceeded your budget this month. Time to review your spending habits."
    };

    let pattern_line = match &app.insights.top_category {
        Some(top) if app.insights.total_expenses > Decimal::ZERO => {
            let share = (top.total / app.insights.total_expenses).to_f64().unwrap_or(0.0) * 100.0;
            format!(
                "Your highest spending category is {} with {} total ({share:.1}% of all expenses).",
                top.category,
                format_amount(top.total),
            )
        }
        _ => "No spending recorded yet.".to_string(),
    };

    let trend_line = if app.monthly.len() > 1 {
        let last = &app.monthly[app.monthly.len() - 1];
        let prev = &app.monthly[app.monthly.len() - 2];
        let direction = if last.total > prev.total {
            "increased"
        } else {
            "decreased"
        };
        format!("Compared to the previous month, your spending has {direction}.")
    } else {
        "Add more transactions to see monthly comparisons.".to_string()
    };

    let mut lines = vec![
        insight_line("Budget Performance", budget_line.to_string(), theme::ACCENT),
        Line::from(""),
        insight_line("Spending Pattern", pattern_line, theme::GREEN),
        Line::from(""),
        insight_line("Monthly Comparison", trend_line, theme::YELLOW),
    ];

    if utilization > Decimal::from(90) {
        lines.push(Line::from(""));
        lines.push(insight_line(
            "Recommendation",
            "You're close to or over budget - consider reducing discretionary spending.".into(),
            theme::RED,
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            " Spending Insights ",
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn insight_line(title: &'static str, body: String, color: ratatui::style::Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {title}: "),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(body, theme::normal_style()),
    ])
}

fn render_health_score(f: &mut Frame, area: Rect, app: &App) {
    let tier = app.score.tier();
    let color = theme::tier_color(tier);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::OVERLAY))
                .title(Span::styled(
                    format!(" Financial Health Score: {} ", tier.message()),
                    Style::default()
                        .fg(theme::TEXT_DIM)
                        .add_modifier(Modifier::BOLD),
                )),
        )
        .gauge_style(Style::default().fg(color).bg(theme::SURFACE))
        .percent(u16::from(app.score.value))
        .label(Span::styled(
            format!("{} / 100", app.score.value),
            Style::default()
                .fg(theme::TEXT)
                .add_modifier(Modifier::BOLD),
        ));

    f.render_widget(gauge, area);
}
