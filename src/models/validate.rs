/// Form fields that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Amount,
    Date,
    Description,
    Category,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Amount => "amount",
            Self::Date => "date",
            Self::Description => "description",
            Self::Category => "category",
        }
    }
}

/// Per-field validation failures, in field order. Any entry blocks the
/// mutation that produced it; the stores are never partially written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: Vec<(Field, &'static str)>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: Field, message: &'static str) {
        self.entries.push((field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn message(&self, field: Field) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, m)| *m)
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in &self.entries {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {message}", field.as_str())?;
            first = false;
        }
        Ok(())
    }
}
