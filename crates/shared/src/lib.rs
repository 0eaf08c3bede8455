//! Shared types and utilities for the vitrine marketplace client.
//!
//! Everything here is free of I/O: wire models for the listing backend,
//! the client-side error types, and the formatting and validation helpers
//! used by both the session layer and the views.

pub mod de;
pub mod error;
pub mod format;
pub mod models;
pub mod validation;

pub use error::*;
pub use format::*;
pub use models::*;
pub use validation::*;
