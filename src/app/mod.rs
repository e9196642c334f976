//! Application module
//!
//! This module contains application-level functionality including:
//! - Configuration handling
//! - Logging setup
//! - Runtime wiring

pub mod config;
pub mod logging;
pub mod runtime;

// Re-export main application functions
pub use config::{ApiConfig, AppConfig, StorageConfig};
pub use logging::init_logging;
pub use runtime::{build_app, initialize_app, App};
