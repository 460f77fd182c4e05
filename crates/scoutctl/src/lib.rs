//! SteamScout CLI library.
//!
//! The binary in `main.rs` is a thin clap wrapper; everything it does is
//! reachable from here so the integration tests can exercise it directly.

pub mod commands;
pub mod config;
pub mod display;
pub mod popular;
pub mod providers;
pub mod recommend;
