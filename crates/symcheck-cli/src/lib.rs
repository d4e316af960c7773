//! symcheck-cli library root.
//!
//! The terminal front end for the symptom checker. Argument parsing,
//! catalogue source resolution and rendering live here so integration tests
//! can exercise them without spawning the binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod render;
