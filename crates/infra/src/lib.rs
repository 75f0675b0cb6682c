//! # guildmeet Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The Meetup.com OAuth HTTP client
//! - SQLite token storage (r2d2 pool)
//! - Configuration file loading
//! - Conversions from library errors into `GuildMeetError`
//!
//! ## Architecture
//! - Implements traits defined in `guildmeet-core`
//! - Contains all "impure" code (network and disk I/O)

pub mod config;
pub mod database;
pub mod errors;
pub mod integrations;

// Re-export commonly used items
pub use database::{DbManager, SqliteMeetupTokenRepository};
pub use errors::InfraError;
pub use integrations::meetup::MeetupOAuthClient;
