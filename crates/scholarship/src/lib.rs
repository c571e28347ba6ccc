//! Domain library for the scholarship priority scoring service.

pub mod config;
pub mod error;
pub mod roster;
pub mod scoring;
pub mod telemetry;
