// Deterministic rule layer
//
// Ordered list of plain keyword rules evaluated before any ML path. First
// match wins; declaration order is part of the contract, so ambiguous
// phrasings resolve to the earlier rule.

mod builtin;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Rule predicate over normalized text.
///
/// `One` is a single substring; `All` is a conjunction where every keyword
/// must be present ("overheat" AND "game").
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Keywords {
    One(String),
    All(Vec<String>),
}

impl Keywords {
    fn matches(&self, normalized: &str) -> bool {
        match self {
            Keywords::One(keyword) => normalized.contains(keyword.to_lowercase().as_str()),
            Keywords::All(keywords) => keywords
                .iter()
                .all(|keyword| normalized.contains(keyword.to_lowercase().as_str())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rule {
    pub keywords: Keywords,
    pub component: String,
    pub confidence: f64,
    pub rationale: String,
    #[serde(default)]
    pub related: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSet {
    pub rules: Vec<Rule>,
}

impl RuleSet {
    /// The compiled-in rule table, in priority order.
    pub fn builtin() -> Self {
        Self {
            rules: builtin::builtin_rules(),
        }
    }

    /// Load an override rule set from a JSON file. Order in the file is the
    /// evaluation order.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read rules file: {}", path.display()))?;
        let rules: Vec<Rule> =
            serde_json::from_str(&contents).context("Failed to parse rules JSON")?;
        Ok(Self { rules })
    }

    /// First rule whose predicate matches the normalized text.
    pub fn matches(&self, normalized: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.keywords.matches(normalized))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
