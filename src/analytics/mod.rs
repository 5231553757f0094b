//! Pure aggregation over store snapshots. Every function takes the
//! transaction slice and/or budget slice by reference and returns a
//! fresh derived value; nothing in here mutates or caches. Callers
//! recompute after every store change, which is cheap at this scale.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{Budget, Category, Transaction};

#[cfg(test)]
mod tests;

/// Spending summed over one calendar month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyTotal {
    /// Sort key, "YYYY-MM".
    pub key: String,
    /// Display label, e.g. "Dec 2024".
    pub label: String,
    pub total: Decimal,
}

/// Spending summed over one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Decimal,
}

/// Budget-vs-actual for one budgeted category in the reference month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetComparison {
    pub category: Category,
    pub budget: Decimal,
    pub spent: Decimal,
    /// budget − spent; negative when over budget.
    pub remaining: Decimal,
}

/// Headline numbers for the insights screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Insights {
    pub total_expenses: Decimal,
    /// 0 when there are no transactions.
    pub avg_transaction: Decimal,
    pub top_category: Option<CategoryTotal>,
    pub current_month_spending: Decimal,
    /// Percentage of the summed budget limits spent this month;
    /// 0 when no budgets are set.
    pub budget_utilization: Decimal,
}

/// Group amounts by the `YYYY-MM` prefix of the date, ascending by
/// month. The zero-padded key makes a plain string sort correct.
pub fn monthly_totals(transactions: &[Transaction]) -> Vec<MonthlyTotal> {
    let mut months: Vec<(String, Decimal)> = Vec::new();
    for txn in transactions {
        let key = txn.month_key();
        match months.iter_mut().find(|(k, _)| k == key) {
            Some((_, total)) => *total += txn.amount,
            None => months.push((key.to_string(), txn.amount)),
        }
    }
    months.sort_by(|(a, _), (b, _)| a.cmp(b));

    months
        .into_iter()
        .map(|(key, total)| MonthlyTotal {
            label: month_label(&key),
            key,
            total,
        })
        .collect()
}

/// Group amounts by category, in first-seen order of the scan.
pub fn category_totals(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for txn in transactions {
        match totals.iter_mut().find(|c| c.category == txn.category) {
            Some(entry) => entry.total += txn.amount,
            None => totals.push(CategoryTotal {
                category: txn.category,
                total: txn.amount,
            }),
        }
    }
    totals
}

/// One row per budget entry, in budget insertion order, comparing the
/// limit against spending in `month` ("YYYY-MM"). Categories with
/// spending but no budget do not appear; budgeted categories with no
/// spending appear with spent = 0. `remaining` goes negative when over.
pub fn budget_comparison(
    transactions: &[Transaction],
    budgets: &[Budget],
    month: &str,
) -> Vec<BudgetComparison> {
    budgets
        .iter()
        .map(|b| {
            let spent = spent_in_month(transactions, month, Some(b.category));
            BudgetComparison {
                category: b.category,
                budget: b.limit,
                spent,
                remaining: b.limit - spent,
            }
        })
        .collect()
}

/// Summary metrics over the whole history plus the reference month.
/// Zero-transaction and zero-budget cases are guarded explicitly so no
/// undefined value ever reaches the display layer.
pub fn insights(transactions: &[Transaction], budgets: &[Budget], month: &str) -> Insights {
    let total_expenses: Decimal = transactions.iter().map(|t| t.amount).sum();

    let avg_transaction = if transactions.is_empty() {
        Decimal::ZERO
    } else {
        total_expenses / Decimal::from(transactions.len() as u64)
    };

    // Strict max keeps the first-seen entry on ties.
    let top_category = category_totals(transactions)
        .into_iter()
        .fold(None, |max: Option<CategoryTotal>, cat| match max {
            Some(m) if cat.total <= m.total => Some(m),
            _ => Some(cat),
        });

    let current_month_spending = spent_in_month(transactions, month, None);

    let total_budget: Decimal = budgets.iter().map(|b| b.limit).sum();
    let budget_utilization = if total_budget > Decimal::ZERO {
        current_month_spending / total_budget * Decimal::from(100)
    } else {
        Decimal::ZERO
    };

    Insights {
        total_expenses,
        avg_transaction,
        top_category,
        current_month_spending,
        budget_utilization,
    }
}

/// Heuristic 0-100 financial health score. This is the single
/// implementation; every screen that shows the score or its tier goes
/// through here.
pub fn health_score(insights: &Insights, budget_count: usize, txn_count: usize) -> HealthScore {
    let mut score: i32 = 100;

    let util = insights.budget_utilization;
    if util > Decimal::from(100) {
        score -= 30;
    } else if util > Decimal::from(90) {
        score -= 15;
    } else if util > Decimal::from(80) {
        score -= 10;
    }

    if budget_count < 3 {
        score -= 20;
    }
    if txn_count < 5 {
        score -= 15;
    }

    HealthScore {
        value: score.max(0) as u8,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthScore {
    pub value: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Excellent,
    Good,
    NeedsFocus,
}

impl HealthScore {
    pub fn tier(&self) -> ScoreTier {
        if self.value >= 80 {
            ScoreTier::Excellent
        } else if self.value >= 60 {
            ScoreTier::Good
        } else {
            ScoreTier::NeedsFocus
        }
    }
}

impl ScoreTier {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent financial management!",
            Self::Good => "Good progress, room for improvement",
            Self::NeedsFocus => "Focus on budgeting and expense tracking",
        }
    }
}

fn spent_in_month(transactions: &[Transaction], month: &str, category: Option<Category>) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.date.starts_with(month))
        .filter(|t| category.is_none_or(|c| t.category == c))
        .map(|t| t.amount)
        .sum()
}

/// Format a "YYYY-MM" key as "Dec 2024". Falls back to the raw key if
/// it does not parse, which cannot happen for store-validated dates.
fn month_label(key: &str) -> String {
    NaiveDate::parse_from_str(&format!("{key}-01"), "%Y-%m-%d")
        .map(|d| d.format("%b %Y").to_string())
        .unwrap_or_else(|_| key.to_string())
}
