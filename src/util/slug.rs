//! Slug derivation for filter keys.
//!
//! Turns arbitrary editor-entered text into an identifier-safe string:
//! accents are stripped, letters are lowercased, and every run of
//! non-alphanumeric characters collapses into a single separator. Leading
//! and trailing separators are dropped.
//!
//! # Examples
//!
//! ```
//! use elasticpress_synonyms::util::slug::slugify;
//!
//! assert_eq!(slugify("Car!"), "car");
//! assert_eq!(slugify("Crème Brûlée"), "creme-brulee");
//! ```

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Separator placed between alphanumeric runs.
pub const SEPARATOR: char = '-';

/// Derive a slug from `text`.
///
/// Deterministic: equal input always yields an equal slug, and inputs that
/// differ only in case, accents or punctuation map to the same slug. Text
/// without any alphanumeric character yields an empty string.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;

    for c in text.nfd().filter(|c| !is_combining_mark(*c)) {
        if c.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push(SEPARATOR);
            }
            pending_separator = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_separator = true;
        }
    }

    slug
}
