//! OAuth token types
//!
//! The Meetup token endpoint does not signal logical failures through the
//! HTTP status, so a response body is classified by the keys it carries:
//! `access_token` means a grant, `error` means a rejection. Anything else is
//! treated as a transport-level failure.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::BEARER_TOKEN_TYPE;
use crate::errors::{GuildMeetError, Result};
use crate::types::GroupId;

/// Successful token response.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenGrant {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
}

impl fmt::Debug for TokenGrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenGrant")
            .field("access_token", &"[REDACTED]")
            .field("refresh_token", &"[REDACTED]")
            .field("expires_in", &self.expires_in)
            .field("token_type", &self.token_type)
            .finish()
    }
}

/// Error body returned by the token endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthRejection {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,
}

/// Outcome of a code or refresh-token exchange, decoded once at the API
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenExchange {
    Granted(TokenGrant),
    Rejected(OAuthRejection),
}

impl TokenExchange {
    /// Classify a token endpoint body.
    ///
    /// # Errors
    /// Returns `GuildMeetError::Transport` when the body is not an object,
    /// carries neither `access_token` nor `error`, or has a malformed grant.
    pub fn from_json(body: Value) -> Result<Self> {
        let Some(fields) = body.as_object() else {
            return Err(GuildMeetError::Transport(
                "token response is not a JSON object".to_string(),
            ));
        };

        if fields.contains_key("access_token") {
            return serde_json::from_value::<TokenGrant>(body)
                .map(Self::Granted)
                .map_err(|e| GuildMeetError::Transport(format!("malformed token response: {e}")));
        }

        if let Some(error) = fields.get("error") {
            let error = match error {
                Value::String(code) => code.clone(),
                other => other.to_string(),
            };
            let error_description =
                fields.get("error_description").and_then(Value::as_str).map(str::to_string);
            return Ok(Self::Rejected(OAuthRejection { error, error_description }));
        }

        Err(GuildMeetError::Transport(
            "token response contains neither access_token nor error".to_string(),
        ))
    }

    /// Convert a rejection into `GuildMeetError::Api`.
    ///
    /// # Errors
    /// Returns `GuildMeetError::Api` carrying the server's `error` value
    /// verbatim. `error_description` is not part of the message.
    pub fn into_grant(self) -> Result<TokenGrant> {
        match self {
            Self::Granted(grant) => Ok(grant),
            Self::Rejected(rejection) => Err(GuildMeetError::Api(rejection.error)),
        }
    }
}

/// Token persisted per chat group. Last write wins.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    pub group_id: GroupId,
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
    pub token_type: String,
}

impl TokenRecord {
    /// Build the record stored for `group_id` after a successful exchange.
    #[must_use]
    pub fn from_grant(group_id: GroupId, grant: &TokenGrant) -> Self {
        Self {
            group_id,
            access_token: grant.access_token.clone(),
            refresh_token: grant.refresh_token.clone(),
            expires_in: grant.expires_in,
            token_type: BEARER_TOKEN_TYPE.to_string(),
        }
    }
}

impl fmt::Debug for TokenRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenRecord")
            .field("group_id", &self.group_id)
            .field("access_token", &"[REDACTED]")
            .field("refresh_token", &"[REDACTED]")
            .field("expires_in", &self.expires_in)
            .field("token_type", &self.token_type)
            .finish()
    }
}
