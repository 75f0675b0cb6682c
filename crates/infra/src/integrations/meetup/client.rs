//! Meetup.com OAuth client
//!
//! Builds the authorization URL and performs the code and refresh-token
//! exchanges against the token endpoint. The endpoint answers logical
//! failures with an `error` body, sometimes under a 2xx status, so the body
//! is decoded the same way whatever the status code.

use std::time::Duration;

use async_trait::async_trait;
use guildmeet_core::MeetupOAuthPort;
use guildmeet_domain::constants::{MEETUP_ACCESS_URL, MEETUP_AUTHORIZE_URL};
use guildmeet_domain::{GuildMeetError, MeetupConfig, Result, TokenExchange};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::InfraError;

/// HTTP client for the Meetup.com OAuth endpoints
#[derive(Debug, Clone)]
pub struct MeetupOAuthClient {
    http: Client,
    config: MeetupConfig,
    authorize_url: String,
    access_url: String,
}

impl MeetupOAuthClient {
    /// Create a client for the production endpoints.
    ///
    /// # Errors
    /// Returns `GuildMeetError::Transport` if the HTTP client cannot be built.
    pub fn new(config: MeetupConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| GuildMeetError::from(InfraError::from(e)))?;

        Ok(Self {
            http,
            config,
            authorize_url: MEETUP_AUTHORIZE_URL.to_string(),
            access_url: MEETUP_ACCESS_URL.to_string(),
        })
    }

    /// Point the client at different endpoints (mock servers in tests).
    #[must_use]
    pub fn with_endpoints(
        mut self,
        authorize_url: impl Into<String>,
        access_url: impl Into<String>,
    ) -> Self {
        self.authorize_url = authorize_url.into();
        self.access_url = access_url.into();
        self
    }

    pub fn config(&self) -> &MeetupConfig {
        &self.config
    }

    async fn request_token(&self, grant_type: &str, params: &[(&str, &str)]) -> Result<TokenExchange> {
        let mut form = vec![
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("grant_type", grant_type),
        ];
        form.extend_from_slice(params);

        let response = self
            .http
            .post(&self.access_url)
            .form(&form)
            .send()
            .await
            .map_err(|e| GuildMeetError::from(InfraError::from(e)))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| GuildMeetError::from(InfraError::from(e)))?;

        let json: Value = serde_json::from_str(&body).map_err(|e| {
            warn!(status = status.as_u16(), grant_type, "token endpoint returned non-JSON body");
            GuildMeetError::Transport(format!("HTTP {}: response is not JSON: {e}", status.as_u16()))
        })?;

        let exchange = TokenExchange::from_json(json)?;

        debug!(
            status = status.as_u16(),
            grant_type,
            granted = matches!(exchange, TokenExchange::Granted(_)),
            "token endpoint responded"
        );

        Ok(exchange)
    }
}

#[async_trait]
impl MeetupOAuthPort for MeetupOAuthClient {
    fn authorization_url(&self) -> String {
        format!(
            "{}?client_id={}&response_type=code&redirect_uri={}",
            self.authorize_url, self.config.client_id, self.config.redirect_uri
        )
    }

    async fn exchange_code(&self, code: &str) -> Result<TokenExchange> {
        self.request_token(
            "authorization_code",
            &[("redirect_uri", self.config.redirect_uri.as_str()), ("code", code)],
        )
        .await
    }

    async fn exchange_refresh_token(&self, refresh_token: &str) -> Result<TokenExchange> {
        self.request_token("refresh_token", &[("refresh_token", refresh_token)]).await
    }
}
