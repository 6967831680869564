//! Core domain types shared across the knowledge base backend.
//!
//! This crate is deliberately free of web and database dependencies so the
//! validation rules and error types can be reused from any layer.

pub mod error;
pub mod types;
pub mod validate;

pub use error::{CoreError, CoreResult};
pub use types::{DbId, Timestamp};
