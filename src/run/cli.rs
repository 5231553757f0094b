use anyhow::Result;
use chrono::Local;

use crate::analytics;
use crate::store::Store;
use crate::ui::util::format_amount;

pub(crate) fn as_cli(args: &[String], store: &mut Store) -> Result<()> {
    match args[1].as_str() {
        "summary" | "s" => cli_summary(&args[2..], store),
        "insights" | "i" => cli_insights(store),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("fintrack {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("FinTrack — in-memory personal finance tracker");
    println!();
    println!("Usage: fintrack [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  summary [YYYY-MM]             Print totals and budget comparison");
    println!("  insights                      Print spending insights and health score");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
}

fn cli_summary(args: &[String], store: &Store) -> Result<()> {
    let month = match args.first() {
        Some(m) => m.clone(),
        None => reference_month(store),
    };

    let txns = store.transactions();
    let budgets = store.budgets();

    println!("Monthly totals:");
    for m in analytics::monthly_totals(txns) {
        println!("  {:<10} {:>12}", m.label, format_amount(m.total));
    }

    println!();
    println!("Spending by category:");
    for c in analytics::category_totals(txns) {
        println!("  {:<20} {:>12}", c.category.as_str(), format_amount(c.total));
    }

    println!();
    println!("Budgets for {month}:");
    let rows = analytics::budget_comparison(txns, budgets, &month);
    if rows.is_empty() {
        println!("  (no budgets set)");
    }
    for row in rows {
        let state = if row.remaining < rust_decimal::Decimal::ZERO {
            format!("over by {}", format_amount(-row.remaining))
        } else {
            format!("{} left", format_amount(row.remaining))
        };
        println!(
            "  {:<20} {:>12} of {:>12}  ({state})",
            row.category.as_str(),
            format_amount(row.spent),
            format_amount(row.budget),
        );
    }

    Ok(())
}

fn cli_insights(store: &Store) -> Result<()> {
    let month = reference_month(store);
    let txns = store.transactions();
    let budgets = store.budgets();

    let insights = analytics::insights(txns, budgets, &month);
    let score = analytics::health_score(&insights, budgets.len(), txns.len());

    println!("Insights for {month}:");
    println!("  Total expenses:      {}", format_amount(insights.total_expenses));
    println!("  Average transaction: {}", format_amount(insights.avg_transaction));
    match &insights.top_category {
        Some(top) => println!(
            "  Top category:        {} ({})",
            top.category,
            format_amount(top.total)
        ),
        None => println!("  Top category:        N/A"),
    }
    println!(
        "  This month:          {}",
        format_amount(insights.current_month_spending)
    );
    println!("  Budget utilization:  {:.1}%", insights.budget_utilization);
    println!();
    println!(
        "  Financial health:    {}/100 ({})",
        score.value,
        score.tier().message()
    );

    Ok(())
}

fn reference_month(store: &Store) -> String {
    store
        .latest_month()
        .unwrap_or_else(|| Local::now().format("%Y-%m").to_string())
}
