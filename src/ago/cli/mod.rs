//! # CLI Layer
//!
//! The only part of ago that touches stdout, stderr and exit codes.
//!
//! - `setup.rs`: clap definitions
//! - `commands.rs`: context setup and per-command handlers
//! - `render.rs`: turns `CmdResult`s into terminal output
//! - `logging.rs`: `env_logger` with `[err]`/`[dbg]` style prefixes

mod commands;
mod logging;
mod render;
mod setup;

pub use commands::run;
