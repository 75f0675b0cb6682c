//! Chat-platform identifiers
//!
//! Platform ids are 64-bit snowflakes. Each kind gets its own newtype so a
//! channel id can never be passed where a group id is expected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::GuildMeetError;

macro_rules! snowflake_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            #[must_use]
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            #[must_use]
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = GuildMeetError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<u64>().map(Self).map_err(|e| {
                    GuildMeetError::InvalidInput(format!("invalid {} '{s}': {e}", $label))
                })
            }
        }
    };
}

snowflake_id!(
    /// Chat server (guild) a Meetup token is scoped to.
    GroupId,
    "group id"
);
snowflake_id!(
    /// Text channel receiving relayed notifications.
    ChannelId,
    "channel id"
);
snowflake_id!(
    /// Platform user.
    UserId,
    "user id"
);
