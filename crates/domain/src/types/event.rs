//! Scheduled-event notifications
//!
//! The chat platform reports lifecycle changes of its scheduled events. Each
//! notification is rendered into a fixed multi-line summary for the relay
//! channel.

use std::fmt::{self, Display};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{GroupId, UserId};

/// Snapshot of a scheduled event as delivered by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledEventNotification {
    pub guild_name: String,
    pub guild_id: GroupId,
    pub creator: Option<String>,
    pub creator_id: Option<UserId>,
    pub name: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub cover_image_url: Option<String>,
}

/// Lifecycle change being relayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventLifecycle {
    Created,
    Updated,
    Deleted,
}

impl EventLifecycle {
    #[must_use]
    pub const fn headline(self) -> &'static str {
        match self {
            Self::Created => "New event created",
            Self::Updated => "Event updated",
            Self::Deleted => "Event deleted",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
        }
    }
}

/// Platform callback payload routed to the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScheduledEventUpdate {
    Created(ScheduledEventNotification),
    Updated { before: ScheduledEventNotification, after: ScheduledEventNotification },
    Deleted(ScheduledEventNotification),
}

impl ScheduledEventUpdate {
    #[must_use]
    pub const fn lifecycle(&self) -> EventLifecycle {
        match self {
            Self::Created(_) => EventLifecycle::Created,
            Self::Updated { .. } => EventLifecycle::Updated,
            Self::Deleted(_) => EventLifecycle::Deleted,
        }
    }
}

impl ScheduledEventNotification {
    /// Render the relay summary for `lifecycle`.
    #[must_use]
    pub fn render(&self, lifecycle: EventLifecycle) -> String {
        format!(
            "{} in {} (ID: {}) by {} (ID: {})\n\
             Event name: {}\n\
             Event description: {}\n\
             Event start time: {}\n\
             Event end time: {}\n\
             Event image: {}",
            lifecycle.headline(),
            self.guild_name,
            self.guild_id,
            OrNone(self.creator.as_deref()),
            OrNone(self.creator_id),
            self.name,
            OrNone(self.description.as_deref()),
            format_time(self.start_time),
            OrNone(self.end_time.map(format_time)),
            OrNone(self.cover_image_url.as_deref()),
        )
    }
}

fn format_time(time: DateTime<Utc>) -> String {
    time.format("%Y-%m-%d %H:%M:%S%:z").to_string()
}

/// Displays absent optional fields as `None`.
struct OrNone<T>(Option<T>);

impl<T: Display> Display for OrNone<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str("None"),
        }
    }
}
