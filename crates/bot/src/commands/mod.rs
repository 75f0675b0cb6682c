//! Command registrations and dispatch

pub mod meetup;

use guildmeet_domain::constants::{AUTHENTICATE_COMMAND, PASTE_TOKEN_COMMAND};
use serde::Serialize;

pub use meetup::MeetupCommands;

/// Slash command registered with the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommandSpec {
    pub name: &'static str,
    pub description: &'static str,
}

/// Commands this bot registers.
pub fn command_specs() -> Vec<CommandSpec> {
    vec![
        CommandSpec { name: AUTHENTICATE_COMMAND, description: "Authenticate with Meetup.com" },
        CommandSpec { name: PASTE_TOKEN_COMMAND, description: "Paste your meetup.com token" },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_both_meetup_commands() {
        let names: Vec<&str> = command_specs().iter().map(|spec| spec.name).collect();
        assert_eq!(names, vec!["authenticate", "paste_token"]);
    }
}
