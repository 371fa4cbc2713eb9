//! Configuration loader and schema types.
//!
//! This module exposes the configuration schema used to drive catalog
//! scanning and helpers to load configuration from disk.

mod load;
mod schema;

pub use schema::*;
