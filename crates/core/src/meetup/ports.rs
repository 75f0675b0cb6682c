//! Port interfaces for the Meetup.com integration

use async_trait::async_trait;
use guildmeet_domain::{
    ChannelId, GroupId, ModalForm, Result, TokenExchange, TokenRecord, UserId,
};

/// Trait for the Meetup.com OAuth2 server
#[async_trait]
pub trait MeetupOAuthPort: Send + Sync {
    /// URL the user opens to authorize the application. Pure and
    /// deterministic for a fixed configuration.
    fn authorization_url(&self) -> String;

    /// Exchange an authorization code for a token.
    async fn exchange_code(&self, code: &str) -> Result<TokenExchange>;

    /// Exchange a refresh token for a new token.
    async fn exchange_refresh_token(&self, refresh_token: &str) -> Result<TokenExchange>;
}

/// Trait for persisting Meetup tokens per chat group
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Insert or replace the token for `record.group_id`.
    async fn save_token(&self, record: &TokenRecord) -> Result<()>;

    /// Load the stored token for a group, if any.
    async fn find_token(&self, group_id: GroupId) -> Result<Option<TokenRecord>>;
}

/// A user interaction (slash command or modal submission) on the host
/// platform
#[async_trait]
pub trait Interaction: Send + Sync {
    /// User who triggered the interaction.
    fn user_id(&self) -> UserId;

    /// Chat group the interaction happened in; `None` for direct messages.
    fn group_id(&self) -> Option<GroupId>;

    /// Reply privately to the invoking user.
    async fn reply_ephemeral(&self, content: &str) -> Result<()>;

    /// Present a modal form to the invoking user.
    async fn present_modal(&self, form: &ModalForm) -> Result<()>;
}

/// Trait for posting into platform channels
#[async_trait]
pub trait ChannelGateway: Send + Sync {
    /// Post `content` to a channel. Unknown channels yield
    /// `GuildMeetError::NotFound`.
    async fn send_message(&self, channel_id: ChannelId, content: &str) -> Result<()>;
}
