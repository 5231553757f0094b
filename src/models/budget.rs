use rust_decimal::Decimal;
use std::str::FromStr;

use super::{Category, Field, ValidationErrors};

/// A spending limit for one category. A single limit applies to the
/// reference month; there is no per-month granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Budget {
    pub category: Category,
    pub limit: Decimal,
}

/// Raw budget form data as submitted by the presentation layer.
#[derive(Debug, Clone, Default)]
pub struct BudgetInput {
    pub category: String,
    pub amount: String,
}

impl Budget {
    pub fn new(category: Category, limit: Decimal) -> Self {
        Self { category, limit }
    }

    /// Validate `input` and build a budget entry.
    pub fn from_input(input: &BudgetInput) -> Result<Budget, ValidationErrors> {
        let mut errors = ValidationErrors::new();

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

        let limit = match Decimal::from_str(input.amount.trim()) {
            Ok(a) if a > Decimal::ZERO => Some(a),
            _ => {
                errors.push(Field::Amount, "Budget amount must be a positive number");
                None
            }
        };

        match (category, limit) {
            (Some(category), Some(limit)) => Ok(Budget { category, limit }),
            _ => Err(errors),
        }
    }
}
