//! In-memory wordlist store.

use ahash::AHashMap;
use serde_json::{Value, json};

use crate::error::Result;
use crate::mapping::entry::SynonymEntry;
use crate::schema::FieldGroup;
use crate::store::{Scope, WordlistSource};

/// Wordlists held in memory, keyed by scope.
#[derive(Debug, Clone)]
pub struct InMemoryWordlistStore {
    schema: FieldGroup,
    wordlists: AHashMap<Scope, Vec<Value>>,
}

impl Default for InMemoryWordlistStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryWordlistStore {
    /// Create an empty store using the synonyms field group.
    pub fn new() -> Self {
        Self {
            schema: FieldGroup::synonyms(),
            wordlists: AHashMap::new(),
        }
    }

    /// Replace the stored rows of `scope`.
    pub fn set_rows(&mut self, scope: Scope, rows: Vec<Value>) {
        self.wordlists.insert(scope, rows);
    }

    /// Replace the wordlist of `scope` with `entries`.
    pub fn set_entries(&mut self, scope: Scope, entries: &[SynonymEntry]) {
        let rows = entries
            .iter()
            .map(|entry| json!({ "word": entry.word, "synonyms": entry.synonyms }))
            .collect();
        self.set_rows(scope, rows);
    }

    /// Builder-style variant of [`set_entries`](Self::set_entries).
    pub fn with_entries(mut self, scope: Scope, entries: &[SynonymEntry]) -> Self {
        self.set_entries(scope, entries);
        self
    }

    /// Remove the wordlist of `scope`.
    pub fn clear(&mut self, scope: &Scope) {
        self.wordlists.remove(scope);
    }
}

impl WordlistSource for InMemoryWordlistStore {
    fn rows(&self, scope: &Scope) -> Result<Vec<Value>> {
        Ok(self.wordlists.get(scope).cloned().unwrap_or_default())
    }

    fn schema(&self) -> &FieldGroup {
        &self.schema
    }
}
