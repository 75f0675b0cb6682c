//! Domain types and models

pub mod event;
pub mod form;
pub mod ids;
pub mod token;

pub use event::{EventLifecycle, ScheduledEventNotification, ScheduledEventUpdate};
pub use form::{ModalForm, ModalSubmission, TextInputField};
pub use ids::{ChannelId, GroupId, UserId};
pub use token::{OAuthRejection, TokenExchange, TokenGrant, TokenRecord};
