//! Configuration for the synonym mapping builder.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SynonymsError};

/// Default namespace for per-entry filter keys.
pub const DEFAULT_FILTER_PREFIX: &str = "elasticpress_synonyms_";

/// Default analyzer whose filter chain receives the synonym filters.
pub const DEFAULT_ANALYZER: &str = "default";

/// Default filter name used by the shared layout.
pub const DEFAULT_SHARED_FILTER_NAME: &str = "elasticpress_synonyms_filter";

/// Default analyzer name used by the shared layout.
pub const DEFAULT_SHARED_ANALYZER_NAME: &str = "elasticpress_synonyms";

/// How wordlist entries are turned into synonym filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterLayout {
    /// One filter per entry, each appended to the configured analyzer.
    #[default]
    PerEntry,

    /// All entries merged into a single filter, wired into a dedicated
    /// analyzer that leaves the configured analyzer untouched.
    Shared,
}

/// Configuration for [`SynonymMappingBuilder`](super::SynonymMappingBuilder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Namespace prefixed to the slug of each word.
    pub filter_prefix: String,

    /// Analyzer whose `filter` list receives per-entry filter keys.
    pub analyzer: String,

    /// Filter layout.
    pub layout: FilterLayout,

    /// Skip appending a filter key the analyzer already references.
    pub dedupe_analyzer_filters: bool,

    /// Filter name for the shared layout.
    pub shared_filter_name: String,

    /// Analyzer name for the shared layout.
    pub shared_analyzer_name: String,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            filter_prefix: DEFAULT_FILTER_PREFIX.to_string(),
            analyzer: DEFAULT_ANALYZER.to_string(),
            layout: FilterLayout::PerEntry,
            dedupe_analyzer_filters: false,
            shared_filter_name: DEFAULT_SHARED_FILTER_NAME.to_string(),
            shared_analyzer_name: DEFAULT_SHARED_ANALYZER_NAME.to_string(),
        }
    }
}

impl BuilderConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a JSON file. Missing fields take their
    /// default values.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: BuilderConfig = serde_json::from_str(&content).map_err(|e| {
            SynonymsError::config(format!(
                "Failed to parse builder configuration '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every name the builder writes into the mapping is non-empty.
    pub fn validate(&self) -> Result<()> {
        if self.filter_prefix.is_empty() {
            return Err(SynonymsError::config("filter_prefix must not be empty"));
        }
        if self.analyzer.is_empty() {
            return Err(SynonymsError::config("analyzer must not be empty"));
        }
        if self.layout == FilterLayout::Shared {
            if self.shared_filter_name.is_empty() {
                return Err(SynonymsError::config("shared_filter_name must not be empty"));
            }
            if self.shared_analyzer_name.is_empty() {
                return Err(SynonymsError::config(
                    "shared_analyzer_name must not be empty",
                ));
            }
            if self.shared_analyzer_name == self.analyzer {
                return Err(SynonymsError::config(format!(
                    "shared_analyzer_name '{}' would replace analyzer '{}'",
                    self.shared_analyzer_name, self.analyzer
                )));
            }
        }
        Ok(())
    }

    /// Set the filter key prefix.
    pub fn with_filter_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.filter_prefix = prefix.into();
        self
    }

    /// Set the target analyzer.
    pub fn with_analyzer(mut self, analyzer: impl Into<String>) -> Self {
        self.analyzer = analyzer.into();
        self
    }

    /// Set the filter layout.
    pub fn with_layout(mut self, layout: FilterLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Enable or disable analyzer filter deduplication.
    pub fn with_dedupe_analyzer_filters(mut self, dedupe: bool) -> Self {
        self.dedupe_analyzer_filters = dedupe;
        self
    }
}
