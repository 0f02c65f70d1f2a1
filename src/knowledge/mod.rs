// Component knowledge base
//
// Static catalog mapping each recommendable component to its category,
// user-facing copy, troubleshooting tips, and curated related components.
// Immutable at request time; only maintenance or retraining touches it.

mod catalog;

use anyhow::{bail, Context, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

/// Category used for components the catalog does not know.
pub const OTHER_CATEGORY: &str = "Other";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentEntry {
    pub label: String,
    pub category: String,
    pub definition: String,
    pub why_useful: String,
    #[serde(default)]
    pub fixing_tips: Vec<String>,
    #[serde(default)]
    pub related: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    components: Vec<ComponentEntry>,
    by_label: HashMap<String, usize>,
}

static BUILTIN: Lazy<KnowledgeBase> = Lazy::new(|| {
    KnowledgeBase::from_entries(catalog::builtin_entries())
        .expect("builtin component catalog is valid")
});

impl KnowledgeBase {
    /// The compiled-in catalog. Always valid; validated once at first use.
    pub fn builtin() -> &'static KnowledgeBase {
        &BUILTIN
    }

    pub fn from_entries(components: Vec<ComponentEntry>) -> Result<Self> {
        let mut by_label = HashMap::with_capacity(components.len());
        for (index, entry) in components.iter().enumerate() {
            if by_label.insert(entry.label.clone(), index).is_some() {
                bail!("duplicate component label: {}", entry.label);
            }
        }
        let kb = Self {
            components,
            by_label,
        };
        kb.validate()?;
        Ok(kb)
    }

    /// Load a catalog override from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read knowledge base file: {}", path.display()))?;
        let components: Vec<ComponentEntry> =
            serde_json::from_str(&contents).context("Failed to parse knowledge base JSON")?;
        Self::from_entries(components)
    }

    /// Check catalog invariants: every component has a non-empty category
    /// (the categories partition the component set by construction, since a
    /// component carries exactly one category field), and every related
    /// reference resolves to a cataloged component.
    pub fn validate(&self) -> Result<()> {
        if self.components.is_empty() {
            bail!("knowledge base has no components");
        }
        for entry in &self.components {
            if entry.label.trim().is_empty() {
                bail!("knowledge base has a component with an empty label");
            }
            if entry.category.trim().is_empty() {
                bail!("component {} has an empty category", entry.label);
            }
            for related in &entry.related {
                if !self.by_label.contains_key(related) {
                    bail!(
                        "component {} references unknown related component {}",
                        entry.label,
                        related
                    );
                }
            }
        }
        Ok(())
    }

    pub fn get(&self, label: &str) -> Option<&ComponentEntry> {
        self.by_label.get(label).map(|&index| &self.components[index])
    }

    /// Category for a component, or [`OTHER_CATEGORY`] if unknown.
    pub fn category_for(&self, label: &str) -> &str {
        self.get(label)
            .map(|entry| entry.category.as_str())
            .unwrap_or(OTHER_CATEGORY)
    }

    pub fn components(&self) -> &[ComponentEntry] {
        &self.components
    }

    pub fn labels(&self) -> Vec<&str> {
        self.components.iter().map(|c| c.label.as_str()).collect()
    }

    /// Category → sorted component labels, for diagnostics and training logs.
    pub fn category_mapping(&self) -> BTreeMap<String, Vec<String>> {
        let mut mapping: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for entry in &self.components {
            mapping
                .entry(entry.category.clone())
                .or_default()
                .push(entry.label.clone());
        }
        for labels in mapping.values_mut() {
            labels.sort();
        }
        mapping
    }
}
