//! Wordlist field-group schema.
//!
//! The admin form that editors use to maintain the wordlist is described
//! declaratively by a [`FieldGroup`]. The wordlist store uses the same
//! definition to validate the rows it hands to the mapping builder.

pub mod field_group;

pub use field_group::{Field, FieldGroup, FieldType, LocationRule, RawRow};
pub use field_group::{OPTIONS_PAGE, WORDLIST_FIELD};
