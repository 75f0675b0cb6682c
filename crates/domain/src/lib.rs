//! # guildmeet Domain
//!
//! Business domain types for the Meetup.com integration.
//!
//! This crate contains:
//! - Identifier newtypes for the chat platform (groups, channels, users)
//! - OAuth token records and the decoded token-exchange outcome
//! - Scheduled-event notifications and their relay rendering
//! - Configuration structures
//! - Domain error types and Result definitions
//!
//! ## Architecture
//! - No dependencies on other guildmeet crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
