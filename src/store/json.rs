//! JSON-file wordlist store.
//!
//! Two document shapes are accepted:
//!
//! ```json
//! [
//!   { "word": "car", "synonyms": "automobile, vehicle" }
//! ]
//! ```
//!
//! which holds the wordlist of the root scope, or an object of per-scope
//! option sets, each carrying its rows under `elasticpress_synonyms`:
//!
//! ```json
//! {
//!   "main":   { "elasticpress_synonyms": [ { "word": "car", "synonyms": "auto" } ] },
//!   "blog-2": { "elasticpress_synonyms": null }
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{Result, SynonymsError};
use crate::schema::FieldGroup;
use crate::store::{Scope, WordlistSource};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WordlistDocument {
    Empty,
    Rows(Vec<Value>),
    Scoped(BTreeMap<String, ScopeOptions>),
}

#[derive(Debug, Default, Deserialize)]
struct ScopeOptions {
    #[serde(default, deserialize_with = "lenient_rows")]
    elasticpress_synonyms: Vec<Value>,
}

// An emptied repeater is stored as `false` or `""` rather than `[]`.
fn lenient_rows<'de, D>(deserializer: D) -> std::result::Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(rows) => rows,
        Value::Null | Value::Bool(false) => Vec::new(),
        Value::String(text) if text.is_empty() => Vec::new(),
        other => {
            warn!("Ignoring wordlist that is not a list of rows: {other}");
            Vec::new()
        }
    })
}

/// Wordlists loaded from a JSON document.
#[derive(Debug, Clone)]
pub struct JsonWordlistStore {
    path: Option<PathBuf>,
    schema: FieldGroup,
    wordlists: BTreeMap<Scope, Vec<Value>>,
}

impl JsonWordlistStore {
    /// Load wordlists from a JSON file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SynonymsError::store(format!(
                "Failed to read wordlist file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let mut store = Self::from_json_str(&content)?;
        store.path = Some(path.to_path_buf());
        debug!(
            "Loaded wordlists for {} scopes from {}",
            store.wordlists.len(),
            path.display()
        );
        Ok(store)
    }

    /// Load wordlists from a JSON string.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let document: WordlistDocument = serde_json::from_str(content)?;

        let wordlists = match document {
            WordlistDocument::Empty => BTreeMap::new(),
            WordlistDocument::Rows(rows) => BTreeMap::from([(Scope::root(), rows)]),
            WordlistDocument::Scoped(scopes) => scopes
                .into_iter()
                .map(|(id, options)| (Scope::new(id), options.elasticpress_synonyms))
                .collect(),
        };

        Ok(Self {
            path: None,
            schema: FieldGroup::synonyms(),
            wordlists,
        })
    }

    /// File the store was loaded from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Scopes that have a stored wordlist.
    pub fn scopes(&self) -> impl Iterator<Item = &Scope> {
        self.wordlists.keys()
    }
}

impl WordlistSource for JsonWordlistStore {
    fn rows(&self, scope: &Scope) -> Result<Vec<Value>> {
        Ok(self.wordlists.get(scope).cloned().unwrap_or_default())
    }

    fn schema(&self) -> &FieldGroup {
        &self.schema
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::entry::SynonymEntry;

    #[test]
    fn test_bare_array_is_root_scope() {
        let store = JsonWordlistStore::from_json_str(
            r#"[{"word": "car", "synonyms": "automobile, vehicle"}]"#,
        )
        .unwrap();
        assert_eq!(
            store.entries(&Scope::root()).unwrap(),
            vec![SynonymEntry::new("car", "automobile, vehicle")]
        );
        assert!(store.path().is_none());
    }

    #[test]
    fn test_scoped_document() {
        let store = JsonWordlistStore::from_json_str(
            r#"{
                "main": {"elasticpress_synonyms": [{"word": "car", "synonyms": "auto"}]},
                "blog-2": {"elasticpress_synonyms": null},
                "blog-3": {"other_option": true}
            }"#,
        )
        .unwrap();

        let scopes: Vec<_> = store.scopes().map(Scope::as_str).collect();
        assert_eq!(scopes, vec!["blog-2", "blog-3", "main"]);
        assert_eq!(store.entries(&Scope::root()).unwrap().len(), 1);
        assert!(store.entries(&Scope::new("blog-2")).unwrap().is_empty());
        assert!(store.entries(&Scope::new("blog-3")).unwrap().is_empty());
        assert!(store.entries(&Scope::new("blog-9")).unwrap().is_empty());
    }

    #[test]
    fn test_emptied_wordlists_do_not_hide_other_scopes() {
        let store = JsonWordlistStore::from_json_str(
            r#"{
                "main": {"elasticpress_synonyms": false},
                "blog-2": {"elasticpress_synonyms": [{"word": "car", "synonyms": "auto"}]},
                "blog-3": {"elasticpress_synonyms": ""},
                "blog-4": {"elasticpress_synonyms": 7}
            }"#,
        )
        .unwrap();

        assert!(store.entries(&Scope::root()).unwrap().is_empty());
        assert_eq!(
            store.entries(&Scope::new("blog-2")).unwrap(),
            vec![SynonymEntry::new("car", "auto")]
        );
        assert!(store.entries(&Scope::new("blog-3")).unwrap().is_empty());
        assert!(store.entries(&Scope::new("blog-4")).unwrap().is_empty());
    }

    #[test]
    fn test_null_document_is_empty() {
        let store = JsonWordlistStore::from_json_str("null").unwrap();
        assert!(store.entries(&Scope::root()).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_document() {
        assert!(matches!(
            JsonWordlistStore::from_json_str("[{"),
            Err(SynonymsError::Json(_))
        ));
        assert!(JsonWordlistStore::from_json_str("42").is_err());
    }
}
