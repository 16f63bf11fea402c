//! Core types shared across the assessor.

pub mod errors;

pub use errors::{MigrationError, Result};
