//! Shared utility modules.

pub mod slug;

pub use slug::slugify;
