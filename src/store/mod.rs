use rust_decimal::Decimal;

use crate::models::{Budget, BudgetInput, Category, Transaction, TransactionInput, ValidationErrors};

mod sample;

#[cfg(test)]
mod tests;

/// Owned in-memory state: the transaction list and the per-category
/// budget limits. All derived views are recomputed from this on
/// demand; nothing is persisted and nothing is cached here.
///
/// Budgets have map semantics (at most one entry per category, setting
/// an existing category overwrites) but are kept in a Vec so display
/// order is insertion order.
#[derive(Debug)]
pub struct Store {
    transactions: Vec<Transaction>,
    budgets: Vec<Budget>,
    next_id: i64,
}

impl Store {
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            budgets: Vec::new(),
            next_id: 1,
        }
    }

    /// A store seeded with the fixed sample data set. This is the
    /// startup state; it resets on every process restart.
    pub fn with_sample_data() -> Self {
        let mut store = Self::new();
        sample::seed(&mut store);
        store
    }

    // ── Read accessors ───────────────────────────────────────────

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    pub fn transaction(&self, id: i64) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn budget_limit(&self, category: Category) -> Option<Decimal> {
        self.budgets
            .iter()
            .find(|b| b.category == category)
            .map(|b| b.limit)
    }

    /// The most recent `YYYY-MM` present in the data, or None when
    /// there are no transactions. Zero-padded keys sort correctly as
    /// plain strings.
    pub fn latest_month(&self) -> Option<String> {
        self.transactions
            .iter()
            .map(|t| t.month_key())
            .max()
            .map(str::to_string)
    }

    // ── Mutators ─────────────────────────────────────────────────

    /// Validate and append a transaction, assigning the next id.
    /// Ids count up from the highest ever assigned and are never
    /// reused. On validation failure nothing is written.
    pub fn add_transaction(&mut self, input: &TransactionInput) -> Result<i64, ValidationErrors> {
        let txn = Transaction::from_input(self.next_id, input)?;
        let id = txn.id;
        self.transactions.push(txn);
        self.next_id += 1;
        Ok(id)
    }

    /// Replace every field of the transaction with this id, keeping
    /// the id itself. Returns Ok(false) when no such id exists.
    pub fn update_transaction(
        &mut self,
        id: i64,
        input: &TransactionInput,
    ) -> Result<bool, ValidationErrors> {
        let updated = Transaction::from_input(id, input)?;
        match self.transactions.iter_mut().find(|t| t.id == id) {
            Some(slot) => {
                *slot = updated;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove a transaction by id. Removing an unknown id is a no-op.
    pub fn remove_transaction(&mut self, id: i64) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        self.transactions.len() != before
    }

    /// Validate and set a budget limit. Setting a category that
    /// already has a limit overwrites it in place.
    pub fn set_budget(&mut self, input: &BudgetInput) -> Result<(), ValidationErrors> {
        let budget = Budget::from_input(input)?;
        match self
            .budgets
            .iter_mut()
            .find(|b| b.category == budget.category)
        {
            Some(slot) => slot.limit = budget.limit,
            None => self.budgets.push(budget),
        }
        Ok(())
    }

    /// Remove a budget entry by category. Unknown category is a no-op.
    pub fn remove_budget(&mut self, category: Category) -> bool {
        let before = self.budgets.len();
        self.budgets.retain(|b| b.category != category);
        self.budgets.len() != before
    }
}
