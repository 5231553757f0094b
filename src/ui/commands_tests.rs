#![allow(clippy::unwrap_used)]

use super::commands::{normalize_month, parse_budget_input, parse_txn_input};

#[test]
fn test_parse_txn_input_single_word_category() {
    let input = parse_txn_input("2024-12-05 45.00 food Lunch out");
    assert_eq!(input.date, "2024-12-05");
    assert_eq!(input.amount, "45.00");
    assert_eq!(input.category, "food");
    assert_eq!(input.description, "Lunch out");
}

#[test]
fn test_parse_txn_input_multiword_category() {
    let input = parse_txn_input("2024-12-03 120 Bills & Utilities Electric bill");
    assert_eq!(input.category, "Bills & Utilities");
    assert_eq!(input.description, "Electric bill");
}

#[test]
fn test_parse_txn_input_unknown_category_passes_through() {
    // Validation reports the field; parsing must not swallow it
    let input = parse_txn_input("2024-12-05 45.00 groceries Weekly shop");
    assert_eq!(input.category, "groceries");
    assert_eq!(input.description, "Weekly shop");
}

#[test]
fn test_parse_txn_input_missing_fields_stay_empty() {
    let input = parse_txn_input("2024-12-05");
    assert_eq!(input.date, "2024-12-05");
    assert_eq!(input.amount, "");
    assert_eq!(input.category, "");
    assert_eq!(input.description, "");
}

#[test]
fn test_parse_budget_input() {
    let input = parse_budget_input("Food & Dining 500");
    assert_eq!(input.category, "Food & Dining");
    assert_eq!(input.amount, "500");
}

#[test]
fn test_parse_budget_input_single_token() {
    let input = parse_budget_input("500");
    assert_eq!(input.category, "");
    assert_eq!(input.amount, "500");
}

#[test]
fn test_normalize_month_pads_single_digit() {
    assert_eq!(normalize_month("2024-5").as_deref(), Some("2024-05"));
    assert_eq!(normalize_month("2024-12").as_deref(), Some("2024-12"));
    assert_eq!(normalize_month("  2024-01  ").as_deref(), Some("2024-01"));
}

#[test]
fn test_normalize_month_rejects_garbage() {
    assert_eq!(normalize_month("2024-13"), None);
    assert_eq!(normalize_month("December"), None);
    assert_eq!(normalize_month(""), None);
}
