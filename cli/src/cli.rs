//! CLI argument definitions for `polyglot`.
//!
//! This module defines the command-line interface using clap. It is separated
//! from the main entrypoint to keep the binary small and focused on
//! orchestration.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use log::LevelFilter;

/// Inspect and change the language used by polyglot.
#[derive(Parser, Debug)]
#[command(name = "polyglot")]
#[command(version, about)]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Show the active language and where it came from:\n",
    "    $ polyglot show\n\n",
    "  Switch to Polish and remember the choice:\n",
    "    $ polyglot set pl\n\n",
    "  List supported languages as JSON:\n",
    "    $ polyglot list --json\n\n",
    "  Render a message with an argument:\n",
    "    $ polyglot translate greeting --arg name=Ada\n\n",
    "The POLYGLOT_LOCALE environment variable overrides the system locale\n",
    "when no language has been saved yet.",
))]
pub struct Cli {
    /// Configuration file [default: polyglot.toml in the config directory].
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<Utf8PathBuf>,

    /// Preference file, overriding the configured location.
    #[arg(long, value_name = "FILE", global = true)]
    pub preferences: Option<Utf8PathBuf>,

    /// Increase log verbosity (repeatable: -v, -vv, -vvv).
    #[arg(
        short,
        long = "verbose",
        action = clap::ArgAction::Count,
        conflicts_with = "quiet",
        global = true
    )]
    pub verbosity: u8,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbosity", global = true)]
    pub quiet: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Log level selected by `--quiet` and `--verbose`.
    ///
    /// Warnings are shown by default so that skipped preferences and missing
    /// messages are visible.
    #[must_use]
    pub const fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the active language and how it was chosen.
    Show,

    /// Change the active language and save it.
    Set(SetArgs),

    /// List supported languages.
    List(ListArgs),

    /// Render a catalog message in the active language.
    Translate(TranslateArgs),
}

/// Arguments for the set command.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct SetArgs {
    /// Language code, e.g. `de`.
    #[arg(value_name = "CODE")]
    pub code: String,
}

/// Arguments for the list command.
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
pub struct ListArgs {
    /// Output in JSON format for scripting.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the translate command.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct TranslateArgs {
    /// Message key, e.g. `greeting`.
    #[arg(value_name = "KEY")]
    pub key: String,

    /// Render the named attribute of the message instead of its value.
    #[arg(short, long, value_name = "NAME")]
    pub attribute: Option<String>,

    /// Message argument (can be repeated).
    #[arg(long = "arg", value_name = "NAME=VALUE", value_parser = parse_message_arg)]
    pub args: Vec<MessageArg>,
}

/// A `NAME=VALUE` pair passed to a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageArg {
    /// Variable name as referenced in the catalog (`$name`).
    pub name: String,
    /// Value substituted for the variable.
    pub value: String,
}

fn parse_message_arg(raw: &str) -> Result<MessageArg, String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got `{raw}`"))?;
    if name.is_empty() {
        return Err(format!("missing argument name in `{raw}`"));
    }
    Ok(MessageArg {
        name: name.to_owned(),
        value: value.to_owned(),
    })
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
