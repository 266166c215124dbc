//! # elasticpress-synonyms
//!
//! Editor-maintained synonym wordlists merged into Elasticsearch index
//! settings.
//!
//! ## Features
//!
//! - Pure, side-effect-free mapping transform
//! - Per-entry or shared synonym filter layouts
//! - Scoped wordlist stores with multisite resolution
//! - Declarative wordlist field-group schema and row validation
//! - `ep-synonyms` command line tool

pub mod cli;
pub mod error;
pub mod mapping;
pub mod schema;
pub mod store;
pub mod util;

pub mod prelude {
    pub use crate::error::{Result, SynonymsError};
    pub use crate::mapping::{
        BuildOutcome, BuilderConfig, FilterLayout, SynonymEntry, SynonymMappingBuilder,
        build_mapping,
    };
    pub use crate::schema::FieldGroup;
    pub use crate::store::{
        InMemoryWordlistStore, JsonWordlistStore, Scope, SiteContext, WordlistSource,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
