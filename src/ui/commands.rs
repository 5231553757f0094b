use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::{Months, NaiveDate};

use super::app::{App, InputMode, PendingAction, Screen};
use crate::models::{BudgetInput, Category, TransactionInput};
use crate::store::Store;
use crate::ui::util::format_amount;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &mut Store) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit FinTrack", cmd_quit, r);
    register_command!("quit", "Quit FinTrack", cmd_quit, r);
    register_command!("d", "Go to Dashboard", cmd_dashboard, r);
    register_command!("dashboard", "Go to Dashboard", cmd_dashboard, r);
    register_command!("t", "Go to Transactions", cmd_transactions, r);
    register_command!("transactions", "Go to Transactions", cmd_transactions, r);
    register_command!("b", "Go to Budgets", cmd_budgets, r);
    register_command!("budgets", "Go to Budgets", cmd_budgets, r);
    register_command!("a", "Go to Analytics", cmd_analytics, r);
    register_command!("analytics", "Go to Analytics", cmd_analytics, r);
    register_command!("i", "Go to Insights", cmd_insights, r);
    register_command!("insights", "Go to Insights", cmd_insights, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!(
        "add",
        "Add transaction (e.g. :add 2024-12-05 45.00 food Lunch out)",
        cmd_add,
        r
    );
    register_command!(
        "edit",
        "Edit selected transaction (e.g. :edit 2024-12-05 45.00 food Lunch out)",
        cmd_edit,
        r
    );
    register_command!(
        "delete-txn",
        "Delete selected transaction",
        cmd_delete_txn,
        r
    );
    register_command!(
        "budget",
        "Set budget limit (e.g. :budget Food & Dining 500)",
        cmd_budget,
        r
    );
    register_command!(
        "delete-budget",
        "Delete selected budget",
        cmd_delete_budget,
        r
    );
    register_command!("month", "Set month (e.g. :month 2024-12)", cmd_month, r);
    register_command!("m", "Set month (e.g. :m 2024-12)", cmd_month, r);
    register_command!("next-month", "Go to next month", cmd_next_month, r);
    register_command!("prev-month", "Go to previous month", cmd_prev_month, r);
    register_command!(
        "search",
        "Search transactions (e.g. :search coffee)",
        cmd_search,
        r
    );
    register_command!("s", "Search transactions (e.g. :s coffee)", cmd_search, r);
    register_command!("categories", "List valid categories", cmd_categories, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app, store)?;
    } else {
        // Try fuzzy match
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Argument parsing ─────────────────────────────────────────

/// Parse `:add`/`:edit` arguments of the form
/// `<date> <amount> <category> <description…>`. Multi-word category
/// names ("Bills & Utilities") are matched greedily; anything that
/// does not resolve is still passed through so validation can report
/// it per field rather than failing here.
pub(crate) fn parse_txn_input(args: &str) -> TransactionInput {
    let mut parts = args.splitn(3, char::is_whitespace);
    let date = parts.next().unwrap_or("").to_string();
    let amount = parts.next().unwrap_or("").to_string();
    let rest = parts.next().unwrap_or("");
    let (category, description) = split_category(rest);

    TransactionInput {
        amount,
        date,
        description,
        category,
    }
}

/// Split the leading category name off a string, trying the longest
/// token run first so "Bills & Utilities Phone bill" resolves to the
/// three-word category.
fn split_category(rest: &str) -> (String, String) {
    let tokens: Vec<&str> = rest.split_whitespace().collect();
    if tokens.is_empty() {
        return (String::new(), String::new());
    }

    let max_take = tokens.len().min(3);
    for take in (1..=max_take).rev() {
        let candidate = tokens[..take].join(" ");
        if Category::parse(&candidate).is_some() {
            return (candidate, tokens[take..].join(" "));
        }
    }

    // Unrecognized: pass the first token through as the category so
    // the validation error names the right field.
    (tokens[0].to_string(), tokens[1..].join(" "))
}

/// Parse `:budget` arguments of the form `<category…> <amount>`.
pub(crate) fn parse_budget_input(args: &str) -> BudgetInput {
    let mut parts = args.rsplitn(2, char::is_whitespace);
    let amount = parts.next().unwrap_or("").to_string();
    let category = parts.next().unwrap_or("").to_string();
    BudgetInput { category, amount }
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _store: &mut Store) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_dashboard(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    app.screen = Screen::Dashboard;
    app.refresh(store);
    Ok(())
}

fn cmd_transactions(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    app.screen = Screen::Transactions;
    app.refresh(store);
    Ok(())
}

fn cmd_budgets(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    app.screen = Screen::Budgets;
    app.refresh(store);
    Ok(())
}

fn cmd_analytics(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    app.screen = Screen::Analytics;
    app.refresh(store);
    Ok(())
}

fn cmd_insights(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    app.screen = Screen::Insights;
    app.refresh(store);
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _store: &mut Store) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_add(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :add <date> <amount> <category> <description>");
        return Ok(());
    }

    let input = parse_txn_input(args);
    match store.add_transaction(&input) {
        Ok(id) => {
            app.refresh(store);
            app.set_status(format!("Added transaction #{id}"));
        }
        Err(errors) => app.set_status(format!("{errors}")),
    }
    Ok(())
}

fn cmd_edit(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    let Some(id) = app.selected_transaction().map(|t| t.id) else {
        app.set_status("No transaction selected");
        return Ok(());
    };
    if args.is_empty() {
        app.set_status("Usage: :edit <date> <amount> <category> <description>");
        return Ok(());
    }

    let input = parse_txn_input(args);
    match store.update_transaction(id, &input) {
        Ok(true) => {
            app.refresh(store);
            app.set_status(format!("Updated transaction #{id}"));
        }
        Ok(false) => app.set_status(format!("Transaction #{id} no longer exists")),
        Err(errors) => app.set_status(format!("{errors}")),
    }
    Ok(())
}

fn cmd_delete_txn(_args: &str, app: &mut App, _store: &mut Store) -> anyhow::Result<()> {
    let Some((id, description, amount)) = app
        .selected_transaction()
        .map(|t| (t.id, t.description.clone(), t.amount))
    else {
        app.set_status("No transaction selected");
        return Ok(());
    };

    app.confirm_message = format!("Delete '{description}' ({})?", format_amount(amount));
    app.pending_action = Some(PendingAction::DeleteTransaction { id, description });
    app.input_mode = InputMode::Confirm;
    Ok(())
}

fn cmd_budget(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :budget <category> <amount>");
        return Ok(());
    }

    let input = parse_budget_input(args);
    match store.set_budget(&input) {
        Ok(()) => {
            app.refresh(store);
            app.set_status(format!("Budget set: {}", args.trim()));
        }
        Err(errors) => app.set_status(format!("{errors}")),
    }
    Ok(())
}

fn cmd_delete_budget(_args: &str, app: &mut App, _store: &mut Store) -> anyhow::Result<()> {
    let Some(category) = app.selected_budget().map(|b| b.category) else {
        app.set_status("No budget selected");
        return Ok(());
    };
    app.confirm_message = format!("Delete budget for {category}?");
    app.pending_action = Some(PendingAction::DeleteBudget { category });
    app.input_mode = InputMode::Confirm;
    Ok(())
}

fn cmd_month(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    if args.is_empty() {
        // No args → back to the latest month with data
        app.reset_month(store);
        let month = app.month.clone();
        app.set_status(format!("Month reset to {month}"));
        return Ok(());
    }

    let Some(month) = normalize_month(args) else {
        app.set_status(format!("Invalid month: '{args}' (expected YYYY-MM)"));
        return Ok(());
    };

    app.month = month.clone();
    app.refresh(store);
    app.set_status(format!("Viewing {month}"));
    Ok(())
}

fn cmd_next_month(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    shift_month(app, store, 1)
}

fn cmd_prev_month(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    shift_month(app, store, -1)
}

fn cmd_search(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    app.search_input = args.to_string();
    app.screen = Screen::Transactions;
    app.refresh(store);
    Ok(())
}

fn cmd_categories(_args: &str, app: &mut App, _store: &mut Store) -> anyhow::Result<()> {
    let names: Vec<&str> = Category::all().iter().map(|c| c.as_str()).collect();
    app.set_status(names.join(", "));
    Ok(())
}

fn shift_month(app: &mut App, store: &mut Store, delta: i32) -> anyhow::Result<()> {
    let Some(date) = parse_month(&app.month) else {
        app.reset_month(store);
        return Ok(());
    };

    let shifted = if delta >= 0 {
        date.checked_add_months(Months::new(1))
    } else {
        date.checked_sub_months(Months::new(1))
    };

    if let Some(next) = shifted {
        app.month = next.format("%Y-%m").to_string();
        app.refresh(store);
        let month = app.month.clone();
        app.set_status(format!("Viewing {month}"));
    }
    Ok(())
}

fn parse_month(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d").ok()
}

/// Canonical zero-padded "YYYY-MM" form of a month argument. Chrono
/// accepts "2024-5", but the reference month is prefix-matched against
/// zero-padded dates, so the padded form must be what gets stored.
pub(crate) fn normalize_month(s: &str) -> Option<String> {
    parse_month(s).map(|d| d.format("%Y-%m").to_string())
}
