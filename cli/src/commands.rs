//! Subcommand dispatch.
//!
//! [`run`] loads configuration, opens a resolver, and executes the parsed
//! command, writing user-facing output to the supplied writer. Directories
//! and the environment locale are injected so tests can run without
//! touching the real home directory.

use std::borrow::Cow;
use std::io::Write;

use log::{debug, info};
use polyglot::{BaseDirs, PolyglotConfig, default_config_path, open_resolver_with};
use polyglot_common::i18n::{
    Arguments, EnvironmentLocale, FluentValue, I18nError, Language, LocaleResolver,
};

use crate::cli::{Cli, Command, ListArgs, SetArgs, TranslateArgs};
use crate::error::{CliError, Result};
use crate::output::{format_active, format_human, format_json, native_name};

/// Execute `cli` and write its output to `stdout`.
///
/// # Errors
///
/// Returns [`CliError`] when configuration cannot be loaded, the resolver
/// cannot be opened, a language code is rejected, or output cannot be
/// written.
pub fn run(
    cli: &Cli,
    dirs: &dyn BaseDirs,
    environment: &dyn EnvironmentLocale,
    stdout: &mut dyn Write,
) -> Result<()> {
    let config = load_config(cli, dirs)?;
    let mut resolver = open_resolver_with(&config, dirs, environment)?;

    match &cli.command {
        Command::Show => write_line(stdout, format_active(&resolver)),
        Command::Set(args) => set_language(&mut resolver, args, stdout),
        Command::List(args) => list_languages(&resolver, args, stdout),
        Command::Translate(args) => write_line(stdout, translate(&resolver, args)),
    }
}

/// Load the configuration named on the command line, or the default file in
/// the configuration directory, applying `--preferences` on top.
fn load_config(cli: &Cli, dirs: &dyn BaseDirs) -> Result<PolyglotConfig> {
    let path = cli.config.clone().or_else(|| default_config_path(dirs));
    let mut config = match path {
        Some(path) => {
            debug!(target: "cli", "loading configuration from {path}");
            PolyglotConfig::load_from(&path)?
        }
        None => PolyglotConfig::default(),
    };

    if let Some(preferences) = &cli.preferences {
        config.preferences.path = Some(preferences.clone());
    }

    Ok(config)
}

fn set_language(
    resolver: &mut LocaleResolver,
    args: &SetArgs,
    stdout: &mut dyn Write,
) -> Result<()> {
    if let Err(source) = resolver.set_language(&args.code) {
        return Err(rejected_language(resolver, &args.code, source));
    }
    info!(target: "cli", "language set to `{}`", resolver.active());

    let mut message_args: Arguments<'static> = Arguments::new();
    message_args.insert(
        Cow::Borrowed("language"),
        FluentValue::from(native_name(resolver.active())),
    );
    write_line(
        stdout,
        resolver.translate_with_args("language-changed", &message_args),
    )
}

/// Explain a rejected code in the language that is still active.
fn rejected_language(resolver: &LocaleResolver, code: &str, source: I18nError) -> CliError {
    let mut message_args: Arguments<'static> = Arguments::new();
    message_args.insert(Cow::Borrowed("code"), FluentValue::from(code.to_owned()));
    message_args.insert(
        Cow::Borrowed("supported"),
        FluentValue::from(Language::supported_codes()),
    );

    CliError::Language {
        message: resolver.translate_with_args("invalid-language", &message_args),
        source,
    }
}

fn list_languages(resolver: &LocaleResolver, args: &ListArgs, stdout: &mut dyn Write) -> Result<()> {
    if args.json {
        let json = format_json(resolver)?;
        return write_line(stdout, json);
    }

    write_raw(stdout, &format_human(resolver))
}

/// Render the requested message or attribute. Misses render the key.
fn translate(resolver: &LocaleResolver, args: &TranslateArgs) -> String {
    let message_args: Arguments<'static> = args
        .args
        .iter()
        .map(|arg| {
            (
                Cow::Owned(arg.name.clone()),
                FluentValue::from(arg.value.clone()),
            )
        })
        .collect();

    match &args.attribute {
        Some(attribute) => resolver.attribute(&args.key, attribute, Some(&message_args)),
        None => resolver.translate_with_args(&args.key, &message_args),
    }
}

fn write_line(stdout: &mut dyn Write, message: impl std::fmt::Display) -> Result<()> {
    writeln!(stdout, "{message}").map_err(|source| CliError::WriteFailed { source })
}

fn write_raw(stdout: &mut dyn Write, text: &str) -> Result<()> {
    stdout
        .write_all(text.as_bytes())
        .map_err(|source| CliError::WriteFailed { source })
}
