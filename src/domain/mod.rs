//! Domain layer
//!
//! Core types, errors and ports. Nothing in here performs I/O.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{AttentionError, AttentionResult};
