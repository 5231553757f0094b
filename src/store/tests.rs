#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;

fn txn_input(amount: &str, date: &str, description: &str, category: &str) -> TransactionInput {
    TransactionInput {
        amount: amount.into(),
        date: date.into(),
        description: description.into(),
        category: category.into(),
    }
}

fn budget_input(category: &str, amount: &str) -> BudgetInput {
    BudgetInput {
        category: category.into(),
        amount: amount.into(),
    }
}

// ── Sample data ───────────────────────────────────────────────

#[test]
fn test_sample_data_shape() {
    let store = Store::with_sample_data();
    assert_eq!(store.transactions().len(), 10);
    assert_eq!(store.budgets().len(), 6);

    let ids: Vec<i64> = store.transactions().iter().map(|t| t.id).collect();
    assert_eq!(ids, (1..=10).collect::<Vec<i64>>());

    assert_eq!(store.transactions()[0].description, "Grocery shopping");
    assert_eq!(store.transactions()[0].amount, dec!(50));
    assert_eq!(store.budget_limit(Category::FoodAndDining), Some(dec!(300)));
    assert_eq!(store.budget_limit(Category::Savings), None);
}

#[test]
fn test_latest_month() {
    let store = Store::with_sample_data();
    assert_eq!(store.latest_month().as_deref(), Some("2024-12"));
    assert_eq!(Store::new().latest_month(), None);
}

// ── Transactions ──────────────────────────────────────────────

#[test]
fn test_add_assigns_sequential_ids() {
    let mut store = Store::with_sample_data();
    let id = store
        .add_transaction(&txn_input("12", "2025-01-02", "Bus fare", "transport"))
        .unwrap();
    assert_eq!(id, 11);
    assert_eq!(store.transactions().len(), 11);
}

#[test]
fn test_ids_never_reused_after_delete() {
    let mut store = Store::with_sample_data();
    assert!(store.remove_transaction(10));
    let id = store
        .add_transaction(&txn_input("5", "2025-01-02", "Coffee", "food"))
        .unwrap();
    assert_eq!(id, 11);
}

#[test]
fn test_add_rejects_invalid_without_writing() {
    let mut store = Store::with_sample_data();
    let errors = store
        .add_transaction(&txn_input("-5", "2025-01-02", "", "food"))
        .unwrap_err();
    assert_eq!(errors.len(), 2);
    // No partial write
    assert_eq!(store.transactions().len(), 10);
}

#[test]
fn test_update_preserves_id_and_replaces_fields() {
    let mut store = Store::with_sample_data();
    let found = store
        .update_transaction(3, &txn_input("99.99", "2024-12-04", "Water bill", "bills"))
        .unwrap();
    assert!(found);

    let txn = store.transaction(3).unwrap();
    assert_eq!(txn.id, 3);
    assert_eq!(txn.amount, dec!(99.99));
    assert_eq!(txn.date, "2024-12-04");
    assert_eq!(txn.description, "Water bill");
    assert_eq!(txn.category, Category::BillsAndUtilities);
    // Position in the ordered list is unchanged
    assert_eq!(store.transactions()[2].id, 3);
}

#[test]
fn test_update_unknown_id() {
    let mut store = Store::with_sample_data();
    let found = store
        .update_transaction(999, &txn_input("1", "2024-12-04", "X", "other"))
        .unwrap();
    assert!(!found);
    assert_eq!(store.transactions().len(), 10);
}

#[test]
fn test_update_invalid_leaves_record_untouched() {
    let mut store = Store::with_sample_data();
    let before = store.transaction(3).unwrap().clone();
    assert!(store
        .update_transaction(3, &txn_input("0", "2024-12-04", "X", "bills"))
        .is_err());
    assert_eq!(store.transaction(3).unwrap(), &before);
}

#[test]
fn test_remove_unknown_id_is_noop() {
    let mut store = Store::with_sample_data();
    assert!(!store.remove_transaction(999));
    assert_eq!(store.transactions().len(), 10);
}

// ── Budgets ───────────────────────────────────────────────────

#[test]
fn test_set_budget_overwrites_existing() {
    let mut store = Store::with_sample_data();
    store.set_budget(&budget_input("food", "500")).unwrap();

    // Map semantics: overwritten, not duplicated or added to
    assert_eq!(store.budgets().len(), 6);
    assert_eq!(store.budget_limit(Category::FoodAndDining), Some(dec!(500)));
    // Insertion order preserved
    assert_eq!(store.budgets()[0].category, Category::FoodAndDining);
}

#[test]
fn test_set_budget_appends_new_category() {
    let mut store = Store::with_sample_data();
    store.set_budget(&budget_input("travel", "250")).unwrap();
    assert_eq!(store.budgets().len(), 7);
    assert_eq!(store.budgets()[6].category, Category::Travel);
    assert_eq!(store.budgets()[6].limit, dec!(250));
}

#[test]
fn test_set_budget_rejects_invalid() {
    let mut store = Store::with_sample_data();
    assert!(store.set_budget(&budget_input("food", "-1")).is_err());
    assert!(store.set_budget(&budget_input("", "100")).is_err());
    assert_eq!(store.budget_limit(Category::FoodAndDining), Some(dec!(300)));
}

#[test]
fn test_remove_budget() {
    let mut store = Store::with_sample_data();
    assert!(store.remove_budget(Category::Shopping));
    assert_eq!(store.budgets().len(), 5);
    assert_eq!(store.budget_limit(Category::Shopping), None);
    // Removing again is a no-op
    assert!(!store.remove_budget(Category::Shopping));
}
