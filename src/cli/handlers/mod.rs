//! CLI command handlers

pub mod analyze;
pub mod config;
pub mod serve;

pub use analyze::*;
pub use config::*;
pub use serve::*;
