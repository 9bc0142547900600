//! Pure helpers used across the application.
//!
//! - [`key_generator`] - Random alias generation
//! - [`url_validator`] - Destination URL validation and scheme defaulting
//! - [`client_identity`] - Rate-limit identity derivation from request metadata

pub mod client_identity;
pub mod key_generator;
pub mod url_validator;
