//! Configuration loading and management
//!
//! This module provides utilities for loading application configuration
//! from files.

pub mod loader;

// Re-export commonly used items
pub use loader::{load, load_from_file, parse_config, probe_config_paths, CONFIG_PATH_ENV};
