//! Wordlist stores.
//!
//! A store hands out the editor-maintained wordlist for an explicit scope.
//! On a multisite network every site shares the wordlist of the network
//! root; [`SiteContext::resolve`] picks the scope to read so that no
//! ambient "current site" state has to be switched and restored.

pub mod json;
pub mod memory;

use std::fmt;

use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::mapping::entry::SynonymEntry;
use crate::schema::FieldGroup;

pub use json::JsonWordlistStore;
pub use memory::InMemoryWordlistStore;

/// Identifier of the site (tenant) a wordlist belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scope(String);

impl Scope {
    /// Scope of the main site, and of a bare wordlist document.
    pub const ROOT: &'static str = "main";

    pub fn new(id: impl Into<String>) -> Self {
        Scope(id.into())
    }

    pub fn root() -> Self {
        Scope::new(Self::ROOT)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Scope {
    fn default() -> Self {
        Scope::root()
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Scope {
    fn from(id: &str) -> Self {
        Scope::new(id)
    }
}

/// The site a mapping is being built for.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SiteContext {
    pub multisite: bool,
    pub current_site: Scope,
    pub network_root: Scope,
}

impl SiteContext {
    /// A standalone site reading its own wordlist.
    pub fn single_site(scope: Scope) -> Self {
        SiteContext {
            multisite: false,
            current_site: scope,
            network_root: Scope::root(),
        }
    }

    /// A site on a network sharing the wordlist of `network_root`.
    pub fn multisite(current_site: Scope, network_root: Scope) -> Self {
        SiteContext {
            multisite: true,
            current_site,
            network_root,
        }
    }

    /// Scope whose wordlist applies to this site.
    pub fn resolve(&self) -> &Scope {
        if self.multisite {
            &self.network_root
        } else {
            &self.current_site
        }
    }
}

/// A stored row that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedRow {
    /// Position of the row in the stored wordlist.
    pub index: usize,
    pub reason: String,
}

/// Outcome of validating a stored wordlist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub accepted: Vec<SynonymEntry>,
    pub rejected: Vec<RejectedRow>,
}

/// Validate stored rows against `schema`, keeping their order.
pub fn validate_rows(schema: &FieldGroup, rows: &[Value]) -> ValidationReport {
    let mut report = ValidationReport::default();

    for (index, row) in rows.iter().enumerate() {
        let result = match row.as_object() {
            Some(fields) => schema.validate_row(fields).map_err(|e| e.to_string()),
            None => Err("row is not an object".to_string()),
        };
        match result {
            Ok(entry) => report.accepted.push(entry),
            Err(reason) => report.rejected.push(RejectedRow { index, reason }),
        }
    }

    report
}

/// Source of editor-maintained wordlists.
pub trait WordlistSource {
    /// Stored rows for `scope`, unvalidated. An unknown scope has no rows.
    fn rows(&self, scope: &Scope) -> Result<Vec<Value>>;

    /// Schema the stored rows follow.
    fn schema(&self) -> &FieldGroup;

    /// Validated entries for `scope`. Rows failing validation are skipped.
    fn entries(&self, scope: &Scope) -> Result<Vec<SynonymEntry>> {
        let rows = self.rows(scope)?;
        let report = validate_rows(self.schema(), &rows);
        for rejected in &report.rejected {
            warn!(
                "Skipping wordlist row {} in scope '{}': {}",
                rejected.index, scope, rejected.reason
            );
        }
        Ok(report.accepted)
    }

    /// Validated entries for the scope `site` resolves to.
    fn entries_for(&self, site: &SiteContext) -> Result<Vec<SynonymEntry>> {
        self.entries(site.resolve())
    }
}
