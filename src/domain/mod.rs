//! Domain layer containing the core data model and store contracts.
//!
//! The domain layer has no knowledge of Redis or HTTP. It defines what an
//! alias record is and which operations a backing store must offer; the
//! infrastructure layer provides the concrete stores.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Store trait definitions and their error type

pub mod entities;
pub mod repositories;
