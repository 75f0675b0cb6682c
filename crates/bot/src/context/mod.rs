//! Bot context - dependency injection container

use std::path::PathBuf;
use std::sync::Arc;

use guildmeet_core::{
    AuthorizationService, ChannelGateway, EventRelay, MeetupOAuthPort, TokenRepository,
    TokenSubmissionService,
};
use guildmeet_domain::{Config, Result};
use guildmeet_infra::{config, DbManager, MeetupOAuthClient, SqliteMeetupTokenRepository};
use tracing::info;

/// Bot context - holds all services and dependencies
pub struct BotContext {
    pub config: Config,
    pub db: Arc<DbManager>,
    pub oauth: Arc<dyn MeetupOAuthPort>,
    pub tokens: Arc<dyn TokenRepository>,

    // Handlers
    pub authorization: AuthorizationService,
    pub submissions: TokenSubmissionService,
    pub relay: EventRelay,
}

impl BotContext {
    /// Wire the production OAuth client, token store and handlers.
    ///
    /// `channels` is the host platform's message gateway.
    pub fn new(config: Config, channels: Arc<dyn ChannelGateway>) -> Result<Self> {
        let oauth = Arc::new(MeetupOAuthClient::new(config.meetup.clone())?);
        Self::with_oauth(config, oauth, channels)
    }

    /// Wire the context around an already built OAuth port.
    pub fn with_oauth(
        config: Config,
        oauth: Arc<dyn MeetupOAuthPort>,
        channels: Arc<dyn ChannelGateway>,
    ) -> Result<Self> {
        let db = Arc::new(DbManager::from_config(&config.database)?);
        db.run_migrations()?;

        let tokens: Arc<dyn TokenRepository> =
            Arc::new(SqliteMeetupTokenRepository::new(Arc::clone(&db)));

        let authorization = AuthorizationService::new(Arc::clone(&oauth));
        let submissions = TokenSubmissionService::new(Arc::clone(&oauth), Arc::clone(&tokens));
        let relay = EventRelay::new(channels, config.relay.channel_id);

        info!(
            db_path = %db.path().display(),
            relay_channel = %config.relay.channel_id,
            "bot context initialised"
        );

        Ok(Self { config, db, oauth, tokens, authorization, submissions, relay })
    }

    /// Load configuration (explicit path, `GUILDMEET_CONFIG` or probed
    /// locations) and build the context.
    pub fn from_config_file(path: Option<PathBuf>, channels: Arc<dyn ChannelGateway>) -> Result<Self> {
        let config = match path {
            Some(path) => config::load_from_file(Some(path))?,
            None => config::load()?,
        };
        Self::new(config, channels)
    }

    /// Verify the token store is reachable.
    pub fn health_check(&self) -> Result<()> {
        self.db.health_check()
    }
}
