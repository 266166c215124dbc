//! Synonym filters merged into Elasticsearch index settings.
//!
//! The [`SynonymMappingBuilder`] takes a draft index-settings document and
//! the editor-maintained wordlist and returns the document with synonym
//! filters registered under `settings.analysis.filter` and referenced from
//! the configured analyzer.

pub mod builder;
pub mod config;
pub mod entry;

pub use builder::{BuildOutcome, SynonymMappingBuilder, build_mapping};
pub use config::{BuilderConfig, FilterLayout};
pub use entry::SynonymEntry;
