//! Scenario definition domain model
//!
//! A scenario names the set of selections a character-building step asks
//! for, e.g. "pick a language, a skill and a trait". Definitions are plain
//! data and can be authored as TOML.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::selection::SelectionRule;

/// Authoring mistakes in a scenario definition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScenarioDefinitionError {
    #[error("scenario name must not be empty")]
    EmptyName,

    #[error("duplicate selection rule for category {0}")]
    DuplicateRule(String),
}

/// A named set of selection rules making up one building step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioDefinition {
    /// Human readable scenario name.
    pub name: String,
    /// Rules to open a selection workflow for, in presentation order.
    pub rules: Vec<SelectionRule>,
}

impl ScenarioDefinition {
    pub fn new(name: impl Into<String>, rules: Vec<SelectionRule>) -> Self {
        Self {
            name: name.into(),
            rules,
        }
    }

    /// Parse a definition from its TOML form and validate it.
    pub fn from_toml(input: &str) -> anyhow::Result<Self> {
        let definition: Self = toml::from_str(input)?;
        definition.validate()?;
        Ok(definition)
    }

    /// Check the definition for authoring mistakes.
    ///
    /// A scenario asking twice for the same category is almost certainly a
    /// data error; the handler manager would silently collapse the two into
    /// one workflow, so it is rejected here instead.
    pub fn validate(&self) -> Result<(), ScenarioDefinitionError> {
        if self.name.trim().is_empty() {
            return Err(ScenarioDefinitionError::EmptyName);
        }
        let mut seen = HashSet::new();
        for rule in &self.rules {
            if !seen.insert(rule.category()) {
                return Err(ScenarioDefinitionError::DuplicateRule(
                    rule.category().to_string(),
                ));
            }
        }
        Ok(())
    }
}
