//! Meetup.com OAuth integration

pub mod client;

pub use client::MeetupOAuthClient;
