mod budget;
mod category;
mod transaction;
mod validate;

pub use budget::{Budget, BudgetInput};
pub use category::Category;
pub use transaction::{Transaction, TransactionInput};
pub use validate::{Field, ValidationErrors};

#[cfg(test)]
mod tests;
