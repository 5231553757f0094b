#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;

fn input(amount: &str, date: &str, description: &str, category: &str) -> TransactionInput {
    TransactionInput {
        amount: amount.into(),
        date: date.into(),
        description: description.into(),
        category: category.into(),
    }
}

// ── Category ──────────────────────────────────────────────────

#[test]
fn test_category_parse() {
    assert_eq!(Category::parse("Food & Dining"), Some(Category::FoodAndDining));
    assert_eq!(Category::parse("food"), Some(Category::FoodAndDining));
    assert_eq!(Category::parse("TRANSPORT"), Some(Category::Transportation));
    assert_eq!(Category::parse("bills"), Some(Category::BillsAndUtilities));
    assert_eq!(Category::parse("health"), Some(Category::Healthcare));
    assert_eq!(Category::parse("  savings  "), Some(Category::Savings));
    assert_eq!(Category::parse("groceries"), None);
    assert_eq!(Category::parse(""), None);
}

#[test]
fn test_category_all_count() {
    assert_eq!(Category::all().len(), 11);
}

#[test]
fn test_category_roundtrip() {
    // Every category should roundtrip through as_str -> parse
    for c in Category::all() {
        let s = c.as_str();
        assert_eq!(Category::parse(s), Some(*c), "Roundtrip failed for {s}");
    }
}

#[test]
fn test_category_display() {
    assert_eq!(format!("{}", Category::BillsAndUtilities), "Bills & Utilities");
}

// ── Transaction validation ────────────────────────────────────

#[test]
fn test_transaction_valid() {
    let txn = Transaction::from_input(7, &input("45.50", "2024-12-10", "Movie tickets", "entertainment"))
        .unwrap();
    assert_eq!(txn.id, 7);
    assert_eq!(txn.amount, dec!(45.50));
    assert_eq!(txn.date, "2024-12-10");
    assert_eq!(txn.description, "Movie tickets");
    assert_eq!(txn.category, Category::Entertainment);
}

#[test]
fn test_transaction_trims_description() {
    let txn = Transaction::from_input(1, &input("5", "2024-12-10", "  Coffee  ", "food")).unwrap();
    assert_eq!(txn.description, "Coffee");
}

#[test]
fn test_transaction_rejects_nonpositive_amount() {
    for bad in ["0", "-5", "abc", ""] {
        let errors = Transaction::from_input(1, &input(bad, "2024-12-10", "X", "food")).unwrap_err();
        assert_eq!(
            errors.message(Field::Amount),
            Some("Amount must be a positive number"),
            "amount {bad:?} should be rejected"
        );
    }
}

#[test]
fn test_transaction_rejects_missing_date() {
    let errors = Transaction::from_input(1, &input("5", "", "X", "food")).unwrap_err();
    assert_eq!(errors.message(Field::Date), Some("Date is required"));
}

#[test]
fn test_transaction_rejects_malformed_date() {
    let errors = Transaction::from_input(1, &input("5", "12/01/2024", "X", "food")).unwrap_err();
    assert_eq!(
        errors.message(Field::Date),
        Some("Date must be in YYYY-MM-DD format")
    );
}

#[test]
fn test_transaction_rejects_blank_description() {
    let errors = Transaction::from_input(1, &input("5", "2024-12-10", "   ", "food")).unwrap_err();
    assert_eq!(errors.message(Field::Description), Some("Description is required"));
}

#[test]
fn test_transaction_rejects_missing_category() {
    let errors = Transaction::from_input(1, &input("5", "2024-12-10", "X", "")).unwrap_err();
    assert_eq!(errors.message(Field::Category), Some("Category is required"));
}

#[test]
fn test_transaction_collects_all_errors() {
    let errors = Transaction::from_input(1, &input("", "", "", "")).unwrap_err();
    assert_eq!(errors.len(), 4);
    assert!(errors.message(Field::Amount).is_some());
    assert!(errors.message(Field::Date).is_some());
    assert!(errors.message(Field::Description).is_some());
    assert!(errors.message(Field::Category).is_some());
}

#[test]
fn test_validation_errors_display_is_per_field() {
    let errors = Transaction::from_input(1, &input("", "", "X", "food")).unwrap_err();
    let rendered = format!("{errors}");
    assert_eq!(
        rendered,
        "amount: Amount must be a positive number; date: Date is required"
    );
}

#[test]
fn test_month_key() {
    let txn = Transaction::from_input(1, &input("5", "2024-12-10", "X", "food")).unwrap();
    assert_eq!(txn.month_key(), "2024-12");
}

// ── Budget validation ─────────────────────────────────────────

#[test]
fn test_budget_valid() {
    let budget = Budget::from_input(&BudgetInput {
        category: "Food & Dining".into(),
        amount: "300".into(),
    })
    .unwrap();
    assert_eq!(budget.category, Category::FoodAndDining);
    assert_eq!(budget.limit, dec!(300));
}

#[test]
fn test_budget_rejects_nonpositive_amount() {
    for bad in ["0", "-10", "x", ""] {
        let errors = Budget::from_input(&BudgetInput {
            category: "food".into(),
            amount: bad.into(),
        })
        .unwrap_err();
        assert_eq!(
            errors.message(Field::Amount),
            Some("Budget amount must be a positive number")
        );
    }
}

#[test]
fn test_budget_rejects_missing_category() {
    let errors = Budget::from_input(&BudgetInput {
        category: "".into(),
        amount: "100".into(),
    })
    .unwrap_err();
    assert_eq!(errors.message(Field::Category), Some("Category is required"));
}
