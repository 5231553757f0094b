use chrono::Local;

use crate::analytics::{
    self, BudgetComparison, CategoryTotal, HealthScore, Insights, MonthlyTotal,
};
use crate::models::{Budget, Category, Transaction};
use crate::store::Store;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    Transactions,
    Budgets,
    Analytics,
    Insights,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[
            Self::Dashboard,
            Self::Transactions,
            Self::Budgets,
            Self::Analytics,
            Self::Insights,
        ]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Transactions => write!(f, "Transactions"),
            Self::Budgets => write!(f, "Budgets"),
            Self::Analytics => write!(f, "Analytics"),
            Self::Insights => write!(f, "Insights"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Search,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Search => write!(f, "SEARCH"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone)]
pub(crate) enum PendingAction {
    DeleteTransaction { id: i64, description: String },
    DeleteBudget { category: Category },
}

/// All TUI state. Derived views are snapshots recomputed through
/// [`App::refresh`] after every store mutation or month change; they
/// are never updated incrementally.
pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) search_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    /// Reference month ("YYYY-MM") for budget comparison and insights.
    pub(crate) month: String,

    // Derived views (recomputed, never cached stale)
    pub(crate) monthly: Vec<MonthlyTotal>,
    pub(crate) category_breakdown: Vec<CategoryTotal>,
    pub(crate) comparison: Vec<BudgetComparison>,
    pub(crate) insights: Insights,
    pub(crate) score: HealthScore,

    // List snapshots
    pub(crate) transactions: Vec<Transaction>,
    pub(crate) transaction_count: usize,
    pub(crate) budgets: Vec<Budget>,

    // Cursors
    pub(crate) transaction_index: usize,
    pub(crate) transaction_scroll: usize,
    pub(crate) budget_index: usize,
    pub(crate) budget_scroll: usize,

    // Confirmation
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(store: &Store) -> Self {
        let mut app = Self {
            running: true,
            screen: Screen::Dashboard,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            search_input: String::new(),
            status_message: String::new(),
            show_help: false,
            month: default_month(store),

            monthly: Vec::new(),
            category_breakdown: Vec::new(),
            comparison: Vec::new(),
            insights: Insights::default(),
            score: analytics::health_score(&Insights::default(), 0, 0),

            transactions: Vec::new(),
            transaction_count: 0,
            budgets: Vec::new(),

            transaction_index: 0,
            transaction_scroll: 0,
            budget_index: 0,
            budget_scroll: 0,

            pending_action: None,
            confirm_message: String::new(),

            visible_rows: 20,
        };
        app.refresh(store);
        app
    }

    /// Recompute every derived view from the current store state.
    pub(crate) fn refresh(&mut self, store: &Store) {
        let txns = store.transactions();
        let budgets = store.budgets();

        self.monthly = analytics::monthly_totals(txns);
        self.category_breakdown = analytics::category_totals(txns);
        self.comparison = analytics::budget_comparison(txns, budgets, &self.month);
        self.insights = analytics::insights(txns, budgets, &self.month);
        self.score = analytics::health_score(&self.insights, budgets.len(), txns.len());

        self.transaction_count = txns.len();
        self.transactions = if self.search_input.is_empty() {
            txns.to_vec()
        } else {
            let needle = self.search_input.to_lowercase();
            txns.iter()
                .filter(|t| {
                    t.description.to_lowercase().contains(&needle)
                        || t.category.as_str().to_lowercase().contains(&needle)
                })
                .cloned()
                .collect()
        };
        self.budgets = budgets.to_vec();

        if self.transaction_index >= self.transactions.len() {
            self.transaction_index = self.transactions.len().saturating_sub(1);
        }
        if self.budget_index >= self.budgets.len() {
            self.budget_index = self.budgets.len().saturating_sub(1);
        }
    }

    /// Reset the reference month to the most recent month in the data
    /// (wall clock when the store is empty) and recompute.
    pub(crate) fn reset_month(&mut self, store: &Store) {
        self.month = default_month(store);
        self.refresh(store);
    }

    pub(crate) fn selected_transaction(&self) -> Option<&Transaction> {
        self.transactions.get(self.transaction_index)
    }

    pub(crate) fn selected_budget(&self) -> Option<&Budget> {
        self.budgets.get(self.budget_index)
    }

    /// The five most recent transactions by date, newest first.
    pub(crate) fn recent_transactions(&self) -> Vec<&Transaction> {
        let mut recent: Vec<&Transaction> = self.transactions.iter().collect();
        recent.sort_by(|a, b| b.date.cmp(&a.date));
        recent.truncate(5);
        recent
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}

/// The month the app opens on: the latest month with data, so the
/// seeded demo transactions line up with the budget screens instead of
/// comparing against an empty wall-clock month.
fn default_month(store: &Store) -> String {
    store
        .latest_month()
        .unwrap_or_else(|| Local::now().format("%Y-%m").to_string())
}
