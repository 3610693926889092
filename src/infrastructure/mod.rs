//! Infrastructure layer module
//!
//! Cross-cutting concerns that sit outside the core:
//! - Configuration management
//! - Logging infrastructure

pub mod config;
pub mod logging;
