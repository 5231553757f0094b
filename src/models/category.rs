/// The closed set of spending categories. Both transactions and budgets
/// are keyed by one of these; there is no user-defined category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    FoodAndDining,
    Transportation,
    Shopping,
    Entertainment,
    BillsAndUtilities,
    Healthcare,
    Education,
    Travel,
    Insurance,
    Savings,
    Other,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[
            Self::FoodAndDining,
            Self::Transportation,
            Self::Shopping,
            Self::Entertainment,
            Self::BillsAndUtilities,
            Self::Healthcare,
            Self::Education,
            Self::Travel,
            Self::Insurance,
            Self::Savings,
            Self::Other,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FoodAndDining => "Food & Dining",
            Self::Transportation => "Transportation",
            Self::Shopping => "Shopping",
            Self::Entertainment => "Entertainment",
            Self::BillsAndUtilities => "Bills & Utilities",
            Self::Healthcare => "Healthcare",
            Self::Education => "Education",
            Self::Travel => "Travel",
            Self::Insurance => "Insurance",
            Self::Savings => "Savings",
            Self::Other => "Other",
        }
    }

    /// Parse a category name, case-insensitive. Accepts the display name
    /// plus a few short aliases for command entry.
    pub fn parse(s: &str) -> Option<Category> {
        match s.trim().to_lowercase().as_str() {
            "food & dining" | "food" | "dining" => Some(Self::FoodAndDining),
            "transportation" | "transport" => Some(Self::Transportation),
            "shopping" => Some(Self::Shopping),
            "entertainment" => Some(Self::Entertainment),
            "bills & utilities" | "bills" | "utilities" => Some(Self::BillsAndUtilities),
            "healthcare" | "health" => Some(Self::Healthcare),
            "education" => Some(Self::Education),
            "travel" => Some(Self::Travel),
            "insurance" => Some(Self::Insurance),
            "savings" => Some(Self::Savings),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
