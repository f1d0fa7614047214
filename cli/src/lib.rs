//! Command-line front end for the polyglot locale resolver.
//!
//! The `polyglot` binary shows, changes, and lists the active language and
//! renders individual catalog messages. Everything except process set-up
//! lives in this library so it can be driven from tests.
//!
//! # Modules
//!
//! - [`cli`] - Command-line argument definitions
//! - [`commands`] - Subcommand dispatch against a resolver
//! - [`error`] - Error types and exit codes
//! - [`logging`] - `env_logger` set-up driven by verbosity flags
//! - [`output`] - Human-readable and JSON rendering

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod output;
