//! HTTP request handlers.
//!
//! Each handler module corresponds to one endpoint.

pub mod create_url;
pub mod health;
pub mod redirect;

pub use create_url::create_url_handler;
pub use health::{health_handler, root_handler};
pub use redirect::redirect_handler;
