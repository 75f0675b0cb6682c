//! Token submission flow
//!
//! `paste_token` opens a one-field modal. The submitted value is the
//! authorization code from meetup.com, which is exchanged for a token and
//! stored for the submitter's chat group.
//!
//! Every submission gets exactly one private reply:
//! - grant: the token is stored, then the access token is echoed back
//! - `error` body: the server's error text
//! - transport or storage failure: the failure description
//!
//! The token is persisted before the confirmation is sent, so a storage
//! failure is reported instead of a success message.

use std::sync::Arc;

use guildmeet_domain::constants::FORM_ERROR_REPLY;
use guildmeet_domain::{
    GroupId, GuildMeetError, ModalForm, Result, TokenExchange, TokenGrant, TokenRecord,
};
use tracing::{error, info, warn};

use super::ports::{Interaction, MeetupOAuthPort, TokenRepository};

/// Reply for submissions made outside a chat group.
pub const MISSING_GROUP_REPLY: &str = "Meetup.com tokens can only be linked from inside a server.";

/// Terminal state of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Token stored and confirmed.
    Linked,
    /// The OAuth server returned an `error` body.
    Rejected,
    /// Transport, decoding or storage failure.
    Failed,
    /// Submitted outside a chat group; nothing was exchanged.
    MissingGroup,
}

/// Handles the `paste_token` command and the token modal
pub struct TokenSubmissionService {
    oauth: Arc<dyn MeetupOAuthPort>,
    tokens: Arc<dyn TokenRepository>,
}

impl TokenSubmissionService {
    pub fn new(oauth: Arc<dyn MeetupOAuthPort>, tokens: Arc<dyn TokenRepository>) -> Self {
        Self { oauth, tokens }
    }

    /// Present the token modal.
    pub async fn open_form(&self, interaction: &dyn Interaction) -> Result<()> {
        interaction.present_modal(&ModalForm::meetup_token()).await
    }

    /// Exchange the submitted authorization code and reply once.
    ///
    /// Only a failure to deliver the reply itself is returned as an error.
    pub async fn submit(
        &self,
        interaction: &dyn Interaction,
        code: &str,
    ) -> Result<SubmissionOutcome> {
        let Some(group_id) = interaction.group_id() else {
            warn!(user_id = %interaction.user_id(), "token submitted outside a server");
            interaction.reply_ephemeral(MISSING_GROUP_REPLY).await?;
            return Ok(SubmissionOutcome::MissingGroup);
        };

        let (reply, outcome) = match self.exchange_and_store(group_id, code).await {
            Ok(grant) => {
                info!(%group_id, expires_in = grant.expires_in, "Meetup token linked");
                (
                    format!("Success! Access Token: {}", grant.access_token),
                    SubmissionOutcome::Linked,
                )
            }
            Err(GuildMeetError::Api(reason)) => (
                format!("Failed to obtain access token. Error: {reason}"),
                SubmissionOutcome::Rejected,
            ),
            Err(err) => {
                error!(%group_id, error = %err, kind = err.label(), "Meetup authentication failed");
                (
                    format!("An error occurred during authentication: {err}"),
                    SubmissionOutcome::Failed,
                )
            }
        };

        interaction.reply_ephemeral(&reply).await?;
        Ok(outcome)
    }

    /// Report a failure of the form machinery itself.
    ///
    /// The user only sees a fixed message; the full error goes to the log.
    pub async fn on_form_error(&self, interaction: &dyn Interaction, failure: &GuildMeetError) {
        error!(
            user_id = %interaction.user_id(),
            kind = failure.label(),
            error = ?failure,
            "token modal failed"
        );

        if let Err(reply_err) = interaction.reply_ephemeral(FORM_ERROR_REPLY).await {
            error!(error = ?reply_err, "failed to deliver token modal error reply");
        }
    }

    async fn exchange_and_store(&self, group_id: GroupId, code: &str) -> Result<TokenGrant> {
        let grant = match self.oauth.exchange_code(code).await? {
            TokenExchange::Granted(grant) => grant,
            TokenExchange::Rejected(rejection) => {
                warn!(
                    %group_id,
                    error = %rejection.error,
                    description = ?rejection.error_description,
                    "Meetup rejected authorization code"
                );
                return Err(GuildMeetError::Api(rejection.error));
            }
        };
        let record = TokenRecord::from_grant(group_id, &grant);
        self.tokens.save_token(&record).await?;
        Ok(grant)
    }
}
