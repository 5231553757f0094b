use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use super::{Category, Field, ValidationErrors};

/// A validated expense record. Constructed only through
/// [`Transaction::from_input`], so every instance upholds the field
/// invariants: amount > 0, date in `YYYY-MM-DD` form, non-empty
/// description, category from the closed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub id: i64,
    pub amount: Decimal,
    /// Format: "YYYY-MM-DD"
    pub date: String,
    pub description: String,
    pub category: Category,
}

/// Raw transaction form data as submitted by the presentation layer.
#[derive(Debug, Clone, Default)]
pub struct TransactionInput {
    pub amount: String,
    pub date: String,
    pub description: String,
    pub category: String,
}

impl Transaction {
    /// Validate `input` and build a transaction with the given id.
    /// Collects one message per failing field rather than stopping at
    /// the first, so the caller can surface all of them at once.
    pub fn from_input(id: i64, input: &TransactionInput) -> Result<Transaction, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let amount = match Decimal::from_str(input.amount.trim()) {
            Ok(a) if a > Decimal::ZERO => Some(a),
            _ => {
                errors.push(Field::Amount, "Amount must be a positive number");
                None
            }
        };

        let date = input.date.trim();
        if date.is_empty() {
            errors.push(Field::Date, "Date is required");
        } else if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
            errors.push(Field::Date, "Date must be in YYYY-MM-DD format");
        }

        let description = input.description.trim();
        if description.is_empty() {
            errors.push(Field::Description, "Description is required");
        }

        let category = if input.category.trim().is_empty() {
            errors.push(Field::Category, "Category is required");
            None
        } else {
            match Category::parse(&input.category) {
                Some(c) => Some(c),
                None => {
                    errors.push(Field::Category, "Category is not recognized");
                    None
                }
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        match (amount, category) {
            (Some(amount), Some(category)) => Ok(Transaction {
                id,
                amount,
                date: date.to_string(),
                description: description.to_string(),
                category,
            }),
            _ => Err(errors),
        }
    }

    /// The `YYYY-MM` prefix of the transaction date.
    pub fn month_key(&self) -> &str {
        &self.date[..7.min(self.date.len())]
    }
}
