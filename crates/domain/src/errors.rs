//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for guildmeet
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum GuildMeetError {
    /// Configuration file or key missing or invalid. Fatal at startup.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network-level failure or an undecodable response from the OAuth server.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The OAuth server answered with an `error` body.
    #[error("Meetup API error: {0}")]
    Api(String),

    #[error("Database error: {0}")]
    Database(String),

    /// Failure reported by the chat platform (reply, modal, message send).
    #[error("Platform error: {0}")]
    Platform(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for guildmeet operations
pub type Result<T> = std::result::Result<T, GuildMeetError>;

impl GuildMeetError {
    /// Stable label for structured logging.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Transport(_) => "transport",
            Self::Api(_) => "api",
            Self::Database(_) => "database",
            Self::Platform(_) => "platform",
            Self::NotFound(_) => "not_found",
            Self::InvalidInput(_) => "invalid_input",
            Self::Internal(_) => "internal",
        }
    }
}
