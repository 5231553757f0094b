use rust_decimal::Decimal;

use super::Store;
use crate::models::{Budget, Category, Transaction};

/// Seed the fixed demo data set: ten December-2024 transactions and
/// six budget limits.
pub(super) fn seed(store: &mut Store) {
    let transactions = [
        (50, "2024-12-01", "Grocery shopping", Category::FoodAndDining),
        (25, "2024-12-02", "Gas station", Category::Transportation),
        (120, "2024-12-03", "Electric bill", Category::BillsAndUtilities),
        (80, "2024-12-05", "Restaurant dinner", Category::FoodAndDining),
        (200, "2024-12-07", "Online shopping", Category::Shopping),
        (45, "2024-12-10", "Movie tickets", Category::Entertainment),
        (75, "2024-12-15", "Grocery shopping", Category::FoodAndDining),
        (30, "2024-12-18", "Coffee shop", Category::FoodAndDining),
        (150, "2024-12-20", "Phone bill", Category::BillsAndUtilities),
        (90, "2024-12-22", "Gym membership", Category::Healthcare),
    ];

    for (amount, date, description, category) in transactions {
        let id = store.next_id;
        store.transactions.push(Transaction {
            id,
            amount: Decimal::from(amount),
            date: date.to_string(),
            description: description.to_string(),
            category,
        });
        store.next_id += 1;
    }

    let budgets = [
        (Category::FoodAndDining, 300),
        (Category::Transportation, 150),
        (Category::BillsAndUtilities, 400),
        (Category::Shopping, 200),
        (Category::Entertainment, 100),
        (Category::Healthcare, 150),
    ];

    for (category, limit) in budgets {
        store.budgets.push(Budget::new(category, Decimal::from(limit)));
    }
}
