//! Meetup.com command, modal and scheduled-event dispatch
//!
//! The host platform adapter forwards raw callbacks here; each one is routed
//! to the matching core handler.

use std::sync::Arc;
use std::time::Instant;

use guildmeet_core::{Interaction, SubmissionOutcome};
use guildmeet_domain::constants::{
    AUTHENTICATE_COMMAND, PASTE_TOKEN_COMMAND, TOKEN_FIELD_ID, TOKEN_MODAL_ID,
};
use guildmeet_domain::{GuildMeetError, ModalSubmission, Result, ScheduledEventUpdate};
use tracing::warn;

use crate::context::BotContext;
use crate::utils::logging::log_command_execution;

/// Dispatcher for the Meetup.com integration
pub struct MeetupCommands {
    context: Arc<BotContext>,
}

impl MeetupCommands {
    pub fn new(context: Arc<BotContext>) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &Arc<BotContext> {
        &self.context
    }

    /// Route a slash command by name.
    ///
    /// # Errors
    /// `InvalidInput` for unknown commands; otherwise whatever the reply or
    /// modal delivery reports.
    pub async fn handle_command(&self, name: &str, interaction: &dyn Interaction) -> Result<()> {
        let start = Instant::now();

        let result = match name {
            AUTHENTICATE_COMMAND => self.context.authorization.authenticate(interaction).await,
            PASTE_TOKEN_COMMAND => self.context.submissions.open_form(interaction).await,
            other => {
                warn!(command = other, "unknown command");
                Err(GuildMeetError::InvalidInput(format!("unknown command: {other}")))
            }
        };

        log_command_execution(name, start.elapsed(), result.is_ok());
        result
    }

    /// Handle a submitted modal.
    ///
    /// Returns `None` when the submission could not be read or handled; the
    /// user then gets the generic form error reply.
    pub async fn handle_modal_submit(
        &self,
        submission: &ModalSubmission,
        interaction: &dyn Interaction,
    ) -> Option<SubmissionOutcome> {
        let start = Instant::now();
        let submissions = &self.context.submissions;

        let result = match read_token(submission) {
            Ok(code) => submissions.submit(interaction, code).await,
            Err(err) => Err(err),
        };

        log_command_execution(TOKEN_MODAL_ID, start.elapsed(), result.is_ok());

        match result {
            Ok(outcome) => Some(outcome),
            Err(err) => {
                submissions.on_form_error(interaction, &err).await;
                None
            }
        }
    }

    /// Relay a scheduled-event notification.
    pub async fn handle_scheduled_event(&self, update: &ScheduledEventUpdate) -> Result<()> {
        let start = Instant::now();
        let result = self.context.relay.relay(update).await;

        if let Err(err) = &result {
            warn!(
                lifecycle = update.lifecycle().as_str(),
                error = %err,
                "scheduled event relay failed"
            );
        }

        log_command_execution("scheduled_event", start.elapsed(), result.is_ok());
        result
    }
}

fn read_token(submission: &ModalSubmission) -> Result<&str> {
    if submission.custom_id != TOKEN_MODAL_ID {
        return Err(GuildMeetError::InvalidInput(format!(
            "unexpected modal: {}",
            submission.custom_id
        )));
    }
    submission.required_value(TOKEN_FIELD_ID)
}
