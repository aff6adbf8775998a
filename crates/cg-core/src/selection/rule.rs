use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Constraint naming which element category a selection workflow targets.
///
/// Rules compare by category value, so the handler manager can use them as
/// registry keys: two workflows for the same category are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionRule {
    category: String,
}

impl SelectionRule {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Header shown by presenters above the option list for this rule.
    pub fn header(&self) -> String {
        format!("Select a {}", self.category)
    }

    /// Predicate matching elements that satisfy this rule.
    pub fn matches(&self, category: &str) -> bool {
        self.category == category
    }
}

impl Display for SelectionRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.category)
    }
}
