//! Application constants
//!
//! Fixed Meetup.com endpoints and user-facing strings shared across crates.

// Meetup.com OAuth2 endpoints
pub const MEETUP_AUTHORIZE_URL: &str = "https://secure.meetup.com/oauth2/authorize";
pub const MEETUP_ACCESS_URL: &str = "https://secure.meetup.com/oauth2/access";

/// Token type stored with every persisted token record.
pub const BEARER_TOKEN_TYPE: &str = "bearer";

// Defaults for optional configuration keys
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_RELAY_CHANNEL_ID: u64 = 1_057_047_905_262_911_540;
pub const DEFAULT_DATABASE_PATH: &str = "guildmeet.db";
pub const DEFAULT_DATABASE_POOL_SIZE: u32 = 4;

// Slash commands
pub const AUTHENTICATE_COMMAND: &str = "authenticate";
pub const PASTE_TOKEN_COMMAND: &str = "paste_token";

// Token modal
pub const TOKEN_MODAL_ID: &str = "meetup_token";
pub const TOKEN_MODAL_TITLE: &str = "Meetup.com Token";
pub const TOKEN_FIELD_ID: &str = "token";
pub const TOKEN_FIELD_LABEL: &str = "Meetup.com Token";
pub const TOKEN_FIELD_PLACEHOLDER: &str = "Enter your Meetup.com token here...";

/// Fixed reply for failures inside the form framework itself.
pub const FORM_ERROR_REPLY: &str = "Oops! Something went wrong.";
