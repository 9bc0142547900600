//! HTTP edge: handlers, request/response types and middleware.
//!
//! This layer translates HTTP requests into service calls and service
//! results into the plain-text responses the frontend expects.
//!
//! # Modules
//!
//! - [`dto`] - Request/response serialization types
//! - [`extract`] - Custom extractors
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Cross-origin policy and request tracing
//! - [`routes`] - API route configuration

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
