//! Abbreviation lookup tables.
//!
//! A table is built once from an ordered list of `(abbreviation, expansion)`
//! pairs and is read-only afterwards, so it can be shared across threads.

mod tables;

pub use tables::{DIRECTION_ENTRIES, SUFFIX_ENTRIES};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One abbreviation as written in a YAML config file.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct LookupEntry {
    pub abbr: String,
    pub full: String,
}

#[derive(Debug, Clone, Default)]
pub struct LookupTable {
    name: &'static str,
    entries: HashMap<String, String>,
}

impl LookupTable {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            entries: HashMap::new(),
        }
    }

    /// Build a table from ordered pairs; a repeated key replaces the earlier value.
    pub fn from_entries<'a, I>(name: &'static str, entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut table = Self::new(name);
        for (abbr, full) in entries {
            table.insert(abbr, full);
        }
        table
    }

    /// Built-in road suffix table, with every expansion also known as itself.
    pub fn suffixes() -> Self {
        let mut table = Self::from_entries("suffix", SUFFIX_ENTRIES.iter().copied());
        table.add_identities();
        table
    }

    /// Built-in predirectional table.
    pub fn directions() -> Self {
        Self::from_entries("direction", DIRECTION_ENTRIES.iter().copied())
    }

    pub fn insert(&mut self, abbr: &str, full: &str) {
        if let Some(previous) = self.entries.insert(abbr.to_string(), full.to_string())
            && previous != full
        {
            tracing::debug!(
                "Lookup: {} table entry '{}' overridden ('{}' -> '{}')",
                self.name,
                abbr,
                previous,
                full
            );
        }
    }

    /// Append config entries after the existing ones.
    pub fn extend_from(&mut self, entries: &[LookupEntry]) {
        for entry in entries {
            self.insert(entry.abbr.trim(), entry.full.trim());
        }
    }

    /// Register each expansion as mapping to itself unless it is already a key.
    pub fn add_identities(&mut self) {
        let fulls: Vec<String> = self.entries.values().cloned().collect();
        for full in fulls {
            self.entries.entry(full.clone()).or_insert(full);
        }
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
