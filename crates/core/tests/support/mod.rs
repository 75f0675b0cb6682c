//! Shared test helpers for `guildmeet-core` integration tests.
//!
//! In-memory doubles for every port so handler tests can focus on behaviour
//! instead of boilerplate.

#![allow(dead_code)]

pub mod meetup;
