//! Database implementations

pub mod manager;
pub mod meetup_token_repository;

pub use manager::*;
pub use meetup_token_repository::*;
