//! Finance Reporting Gateway Client Library
//!
//! This library builds signed JSON report requests for the finance reporting
//! gateway, sends them over HTTP, and materializes the JSON responses.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use config::ClientConfig;
pub use core::{ClientError, Result};
pub use modules::reports;
