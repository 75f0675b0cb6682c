//! Scheduled-event relay
//!
//! Forwards create/update/delete notifications as plain text into a single
//! configured channel. Delivery is best effort: send failures are returned to
//! the caller and never retried here.

use std::sync::Arc;

use guildmeet_domain::{
    ChannelId, EventLifecycle, Result, ScheduledEventNotification, ScheduledEventUpdate,
};
use tracing::info;

use super::ports::ChannelGateway;

/// Relays scheduled-event lifecycle notifications to a fixed channel
pub struct EventRelay {
    channels: Arc<dyn ChannelGateway>,
    channel_id: ChannelId,
}

impl EventRelay {
    pub fn new(channels: Arc<dyn ChannelGateway>, channel_id: ChannelId) -> Self {
        Self { channels, channel_id }
    }

    /// Destination channel for every relay.
    pub fn channel_id(&self) -> ChannelId {
        self.channel_id
    }

    /// Route a platform notification to the matching handler.
    pub async fn relay(&self, update: &ScheduledEventUpdate) -> Result<()> {
        match update {
            ScheduledEventUpdate::Created(event) => self.on_event_created(event).await,
            ScheduledEventUpdate::Updated { before, after } => {
                self.on_event_updated(before, after).await
            }
            ScheduledEventUpdate::Deleted(event) => self.on_event_deleted(event).await,
        }
    }

    pub async fn on_event_created(&self, event: &ScheduledEventNotification) -> Result<()> {
        self.publish(EventLifecycle::Created, event).await
    }

    /// Only the `after` state is rendered.
    pub async fn on_event_updated(
        &self,
        _before: &ScheduledEventNotification,
        after: &ScheduledEventNotification,
    ) -> Result<()> {
        self.publish(EventLifecycle::Updated, after).await
    }

    pub async fn on_event_deleted(&self, event: &ScheduledEventNotification) -> Result<()> {
        self.publish(EventLifecycle::Deleted, event).await
    }

    async fn publish(
        &self,
        lifecycle: EventLifecycle,
        event: &ScheduledEventNotification,
    ) -> Result<()> {
        let message = event.render(lifecycle);

        info!(
            lifecycle = lifecycle.as_str(),
            channel_id = %self.channel_id,
            guild_id = %event.guild_id,
            "{message}"
        );

        self.channels.send_message(self.channel_id, &message).await
    }
}
