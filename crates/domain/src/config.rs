//! Configuration structures
//!
//! Deserialized once at startup by the infra loader and then shared
//! read-only. Only the `meetup` credentials are mandatory.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DATABASE_PATH, DEFAULT_DATABASE_POOL_SIZE, DEFAULT_RELAY_CHANNEL_ID,
    DEFAULT_REQUEST_TIMEOUT_SECS,
};
use crate::types::ChannelId;

/// Top-level application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub meetup: MeetupConfig,

    #[serde(default)]
    pub relay: RelayConfig,

    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Meetup.com OAuth client credentials
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetupConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,

    /// Upper bound for a single token-exchange request.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl MeetupConfig {
    /// Credentials with the default request timeout.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

// Keep the client secret out of logs.
impl std::fmt::Debug for MeetupConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeetupConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("redirect_uri", &self.redirect_uri)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

/// Destination for scheduled-event relays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayConfig {
    #[serde(default = "default_relay_channel_id")]
    pub channel_id: ChannelId,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self { channel_id: default_relay_channel_id() }
    }
}

/// Token store location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_path")]
    pub path: String,

    #[serde(default = "default_database_pool_size")]
    pub pool_size: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { path: default_database_path(), pool_size: default_database_pool_size() }
    }
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_relay_channel_id() -> ChannelId {
    ChannelId::new(DEFAULT_RELAY_CHANNEL_ID)
}

fn default_database_path() -> String {
    DEFAULT_DATABASE_PATH.to_string()
}

fn default_database_pool_size() -> u32 {
    DEFAULT_DATABASE_POOL_SIZE
}
