//! # guildmeet Bot
//!
//! Application layer - command dispatch and wiring.
//!
//! This crate contains:
//! - Command registrations and dispatch for the host chat platform
//! - Bot context (dependency injection)
//! - Logging setup
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - The host platform adapter implements the `Interaction` and
//!   `ChannelGateway` ports and forwards callbacks to [`MeetupCommands`]

pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::{command_specs, CommandSpec, MeetupCommands};
pub use context::BotContext;
pub use utils::logging::{init_tracing, LogFormat};
