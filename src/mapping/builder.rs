//! Synonym mapping builder.
//!
//! A pure transform over an Elasticsearch index-settings document. Only two
//! subtrees are read or written:
//!
//! - `settings.analysis.filter`, the filter-name to filter-definition map
//! - `settings.analysis.analyzer.<analyzer>.filter`, the ordered filter chain
//!
//! Everything else in the document is moved through untouched. When the
//! document does not have the expected shape, or there is nothing to add,
//! the input comes back as [`BuildOutcome::Unchanged`].
//!
//! # Examples
//!
//! ```
//! use elasticpress_synonyms::mapping::{SynonymEntry, build_mapping};
//! use serde_json::json;
//!
//! let mapping = json!({
//!     "settings": {
//!         "analysis": {
//!             "filter": {},
//!             "analyzer": { "default": { "filter": ["lowercase"] } }
//!         }
//!     }
//! });
//! let entries = vec![SynonymEntry::new("car", "automobile, vehicle")];
//!
//! let outcome = build_mapping(mapping, &entries);
//! assert!(outcome.is_augmented());
//! assert_eq!(
//!     outcome.mapping()["settings"]["analysis"]["filter"]["elasticpress_synonyms_car"],
//!     json!({ "type": "synonym", "synonyms": ["automobile,vehicle"] })
//! );
//! ```

use std::fmt;

use ahash::AHashSet;
use log::{debug, info, warn};
use serde_json::{Map, Value, json};

use crate::mapping::config::{BuilderConfig, FilterLayout};
use crate::mapping::entry::SynonymEntry;

const FILTERS_POINTER: &str = "/settings/analysis/filter";
const ANALYZERS_POINTER: &str = "/settings/analysis/analyzer";

/// Result of a build.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildOutcome {
    /// The mapping is returned exactly as it was passed in.
    Unchanged(Value),
    /// The mapping carries the added synonym filters.
    Augmented(Value),
}

impl BuildOutcome {
    /// Whether the build added anything.
    pub fn is_augmented(&self) -> bool {
        matches!(self, BuildOutcome::Augmented(_))
    }

    /// Borrow the resulting mapping.
    pub fn mapping(&self) -> &Value {
        match self {
            BuildOutcome::Unchanged(mapping) | BuildOutcome::Augmented(mapping) => mapping,
        }
    }

    /// Take the resulting mapping.
    pub fn into_mapping(self) -> Value {
        match self {
            BuildOutcome::Unchanged(mapping) | BuildOutcome::Augmented(mapping) => mapping,
        }
    }
}

/// Guard clause that turned a build into a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Guard {
    MappingNotObject,
    FiltersNotObject,
    AnalyzerFiltersNotArray,
}

impl fmt::Display for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Guard::MappingNotObject => write!(f, "mapping is not an object"),
            Guard::FiltersNotObject => {
                write!(f, "settings.analysis.filter is missing or not an object")
            }
            Guard::AnalyzerFiltersNotArray => {
                write!(f, "analyzer filter list is missing or not an array")
            }
        }
    }
}

/// Merges wordlist entries into an index-settings document.
///
/// The builder holds no state besides its configuration, so a single
/// instance can be shared freely across threads.
///
/// Applying the builder twice to the same document with the same entries
/// appends every filter key to the analyzer chain a second time unless
/// [`BuilderConfig::dedupe_analyzer_filters`] is set. Callers apply it at
/// most once per mapping build.
#[derive(Debug, Clone, Default)]
pub struct SynonymMappingBuilder {
    config: BuilderConfig,
}

impl SynonymMappingBuilder {
    /// Create a builder with the given configuration.
    pub fn new(config: BuilderConfig) -> Self {
        Self { config }
    }

    /// Get the builder configuration.
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Merge `entries` into `mapping`.
    pub fn build(&self, mapping: Value, entries: &[SynonymEntry]) -> BuildOutcome {
        if let Some(guard) = self.failed_guard(&mapping) {
            debug!("Leaving mapping unchanged: {guard}");
            return BuildOutcome::Unchanged(mapping);
        }

        if entries.is_empty() {
            debug!("Leaving mapping unchanged: wordlist is empty");
            return BuildOutcome::Unchanged(mapping);
        }

        match self.config.layout {
            FilterLayout::PerEntry => self.apply_per_entry(mapping, entries),
            FilterLayout::Shared => self.apply_shared(mapping, entries),
        }
    }

    /// Like [`build`](Self::build), treating an absent wordlist as empty.
    pub fn build_optional(&self, mapping: Value, entries: Option<&[SynonymEntry]>) -> BuildOutcome {
        match entries {
            Some(entries) => self.build(mapping, entries),
            None => {
                debug!("Leaving mapping unchanged: no wordlist");
                BuildOutcome::Unchanged(mapping)
            }
        }
    }

    /// Filter keys with this builder's prefix that the analyzer chain
    /// references but `settings.analysis.filter` does not define.
    ///
    /// Built-in filters such as `lowercase` never carry the prefix and are
    /// not reported.
    pub fn unresolved_filter_references(&self, mapping: &Value) -> Vec<String> {
        let defined = mapping.pointer(FILTERS_POINTER).and_then(Value::as_object);
        let Some(chain) = mapping
            .pointer(&self.analyzer_filters_pointer())
            .and_then(Value::as_array)
        else {
            return Vec::new();
        };

        chain
            .iter()
            .filter_map(Value::as_str)
            .filter(|name| name.starts_with(&self.config.filter_prefix))
            .filter(|name| !defined.is_some_and(|filters| filters.contains_key(*name)))
            .map(str::to_string)
            .collect()
    }

    fn failed_guard(&self, mapping: &Value) -> Option<Guard> {
        if !mapping.is_object() {
            return Some(Guard::MappingNotObject);
        }
        if !mapping.pointer(FILTERS_POINTER).is_some_and(Value::is_object) {
            return Some(Guard::FiltersNotObject);
        }
        if !mapping
            .pointer(&self.analyzer_filters_pointer())
            .is_some_and(Value::is_array)
        {
            return Some(Guard::AnalyzerFiltersNotArray);
        }
        None
    }

    fn apply_per_entry(&self, mut mapping: Value, entries: &[SynonymEntry]) -> BuildOutcome {
        let additions: Vec<(String, Value)> = entries
            .iter()
            .map(|entry| {
                let definition = json!({
                    "type": "synonym",
                    "synonyms": [entry.normalized_synonyms()],
                });
                (entry.filter_key(&self.config.filter_prefix), definition)
            })
            .collect();

        if let Some(filters) = filters_mut(&mut mapping) {
            let mut seen = AHashSet::with_capacity(additions.len());
            for (key, definition) in &additions {
                if !seen.insert(key.as_str()) {
                    warn!("Synonym filter '{key}' derived from more than one word; last entry wins");
                } else if filters.contains_key(key) {
                    debug!("Replacing existing filter '{key}'");
                }
                filters.insert(key.clone(), definition.clone());
                debug!("Added synonym filter '{key}'");
            }
        }

        let pointer = self.analyzer_filters_pointer();
        if let Some(chain) = mapping.pointer_mut(&pointer).and_then(Value::as_array_mut) {
            let mut appended = 0;
            for (key, _) in additions {
                if self.config.dedupe_analyzer_filters
                    && chain.iter().any(|name| name.as_str() == Some(key.as_str()))
                {
                    continue;
                }
                chain.push(Value::String(key));
                appended += 1;
            }
            info!(
                "Added {} synonym filters to analyzer '{}'",
                appended, self.config.analyzer
            );
        }

        BuildOutcome::Augmented(mapping)
    }

    fn apply_shared(&self, mut mapping: Value, entries: &[SynonymEntry]) -> BuildOutcome {
        if self.config.shared_analyzer_name == self.config.analyzer {
            warn!(
                "Leaving mapping unchanged: shared analyzer '{}' would replace analyzer '{}'",
                self.config.shared_analyzer_name, self.config.analyzer
            );
            return BuildOutcome::Unchanged(mapping);
        }

        let rules: Vec<Value> = entries
            .iter()
            .map(|entry| Value::String(entry.equivalence_rule()))
            .collect();
        let rule_count = rules.len();
        let filter_name = self.config.shared_filter_name.clone();

        if let Some(filters) = filters_mut(&mut mapping) {
            filters.insert(
                filter_name.clone(),
                json!({
                    "type": "synonym",
                    "synonyms": rules,
                }),
            );
        }

        if let Some(analyzers) = mapping
            .pointer_mut(ANALYZERS_POINTER)
            .and_then(Value::as_object_mut)
        {
            analyzers.insert(
                self.config.shared_analyzer_name.clone(),
                json!({
                    "tokenizer": "standard",
                    "filter": ["lowercase", filter_name],
                }),
            );
        }

        info!(
            "Added shared synonym filter '{}' with {} rules to analyzer '{}'",
            self.config.shared_filter_name, rule_count, self.config.shared_analyzer_name
        );

        BuildOutcome::Augmented(mapping)
    }

    fn analyzer_filters_pointer(&self) -> String {
        format!(
            "{ANALYZERS_POINTER}/{}/filter",
            escape_pointer_token(&self.config.analyzer)
        )
    }
}

/// Merge `entries` into `mapping` with the default configuration.
pub fn build_mapping(mapping: Value, entries: &[SynonymEntry]) -> BuildOutcome {
    SynonymMappingBuilder::default().build(mapping, entries)
}

fn filters_mut(mapping: &mut Value) -> Option<&mut Map<String, Value>> {
    mapping
        .pointer_mut(FILTERS_POINTER)
        .and_then(Value::as_object_mut)
}

// RFC 6901 escaping for a single reference token.
fn escape_pointer_token(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}
