//! Wordlist entries.

use serde::{Deserialize, Serialize};

use crate::util::slug::slugify;

/// A single editor-entered wordlist row.
///
/// `synonyms` is the raw, human-typed comma separated list of alternate
/// terms for `word`. It is kept verbatim; normalization happens when the
/// entry is turned into a filter definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymEntry {
    /// The original word.
    pub word: String,
    /// Comma separated list of synonyms.
    pub synonyms: String,
}

impl SynonymEntry {
    /// Create a new entry.
    pub fn new(word: impl Into<String>, synonyms: impl Into<String>) -> Self {
        SynonymEntry {
            word: word.into(),
            synonyms: synonyms.into(),
        }
    }

    /// Slug of the word, the part of the filter key that identifies the entry.
    pub fn slug(&self) -> String {
        slugify(&self.word)
    }

    /// Filter key for this entry under the given namespace prefix.
    pub fn filter_key(&self, prefix: &str) -> String {
        format!("{prefix}{}", self.slug())
    }

    /// The synonym list with every literal `", "` collapsed to `","`.
    ///
    /// Nothing else is touched: a space before a comma, doubled spaces and
    /// duplicate terms all survive.
    pub fn normalized_synonyms(&self) -> String {
        self.synonyms.replace(", ", ",")
    }

    /// A single equivalence rule holding the word and all of its synonyms,
    /// each term trimmed, joined with `","`.
    pub fn equivalence_rule(&self) -> String {
        std::iter::once(self.word.as_str())
            .chain(self.synonyms.split(','))
            .map(str::trim)
            .collect::<Vec<_>>()
            .join(",")
    }
}
