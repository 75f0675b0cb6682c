//! Authorization entry point
//!
//! Stateless: every invocation recomputes the URL from the immutable client
//! configuration and replies privately to the invoking user.

use std::sync::Arc;

use guildmeet_domain::Result;
use tracing::info;

use super::ports::{Interaction, MeetupOAuthPort};

/// Handles the `authenticate` command
pub struct AuthorizationService {
    oauth: Arc<dyn MeetupOAuthPort>,
}

impl AuthorizationService {
    pub fn new(oauth: Arc<dyn MeetupOAuthPort>) -> Self {
        Self { oauth }
    }

    /// Private reply carrying the authorization URL.
    pub fn authorization_message(&self) -> String {
        format!("Authenticate with meetup.com:\n {}", self.oauth.authorization_url())
    }

    /// Send the authorization URL privately to the invoking user.
    pub async fn authenticate(&self, interaction: &dyn Interaction) -> Result<()> {
        info!(
            user_id = %interaction.user_id(),
            group_id = ?interaction.group_id().map(|id| id.get()),
            "sending Meetup authorization link"
        );
        interaction.reply_ephemeral(&self.authorization_message()).await
    }
}
