//! # CLI Layer
//!
//! This module is **one possible UI client** for devjournal. It is the only
//! place in the codebase that:
//! - Parses arguments and resolves configuration
//! - Installs the logging subscriber
//! - Writes to stdout/stderr
//! - Decides the process exit code (via `main.rs`)
//!
//! ## Structure
//!
//! - `setup`: clap definitions
//! - `commands`: `run()`, context setup, per-command handlers
//! - `render`: turning `CmdResult`s into terminal text

mod commands;
mod render;
mod setup;

pub use commands::run;
