//! # guildmeet Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits) for the OAuth server, the token store
//!   and the chat platform
//! - The Meetup.com handlers: authorization entry point, token submission
//!   flow and scheduled-event relay
//!
//! ## Architecture Principles
//! - Only depends on `guildmeet-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod meetup;

// Re-export specific items to avoid ambiguity
pub use meetup::ports::{ChannelGateway, Interaction, MeetupOAuthPort, TokenRepository};
pub use meetup::{AuthorizationService, EventRelay, SubmissionOutcome, TokenSubmissionService};
