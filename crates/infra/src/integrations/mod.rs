//! External service integrations

pub mod meetup;
