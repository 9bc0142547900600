//! Core domain entities.
//!
//! - [`AliasRecord`] - A short alias mapped to its destination URL

pub mod alias_record;

pub use alias_record::AliasRecord;
