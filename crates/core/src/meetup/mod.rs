//! Meetup.com integration handlers
//!
//! Control flow: `authenticate` hands the user the authorization URL, the user
//! approves the app on meetup.com, then pastes the resulting code through the
//! token modal. The submission is exchanged for a token which is stored per
//! chat group. Independently, scheduled-event notifications are relayed into
//! a fixed channel.

pub mod authorization;
pub mod event_relay;
pub mod ports;
pub mod token_submission;

pub use authorization::AuthorizationService;
pub use event_relay::EventRelay;
pub use token_submission::{SubmissionOutcome, TokenSubmissionService, MISSING_GROUP_REPLY};
