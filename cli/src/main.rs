//! `polyglot` CLI entrypoint.
//!
//! Parses arguments, installs the logger, and maps the outcome of
//! [`polyglot_cli::commands::run`] to a process exit code.

use std::io::Write;

use clap::Parser;
use polyglot::SystemBaseDirs;
use polyglot_cli::cli::Cli;
use polyglot_cli::commands::run;
use polyglot_cli::error::Result;
use polyglot_cli::logging::init_logging;
use polyglot_common::i18n::SystemEnvironment;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr();
    let run_result = run(&cli, &SystemBaseDirs, &SystemEnvironment, &mut stdout);
    let exit_code = exit_code_for_run_result(run_result, &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn exit_code_for_run_result(result: Result<()>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            write_stderr_line(stderr, &err);
            err.exit_code()
        }
    }
}

fn write_stderr_line(stderr: &mut dyn Write, message: impl std::fmt::Display) {
    if writeln!(stderr, "{message}").is_err() {
        // Best-effort reporting; ignore write failures.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyglot::ConfigError;
    use polyglot_cli::error::CliError;
    use polyglot_common::i18n::I18nError;
    use rstest::rstest;

    #[test]
    fn exit_code_for_run_result_returns_zero_on_success() {
        let mut stderr = Vec::new();
        let exit_code = exit_code_for_run_result(Ok(()), &mut stderr);
        assert_eq!(exit_code, 0);
        assert!(stderr.is_empty());
    }

    #[rstest]
    #[case(
        CliError::Language {
            message: String::from("Unsupported language `xx`."),
            source: I18nError::InvalidLanguage { code: String::from("xx") },
        },
        2,
        "Unsupported language `xx`."
    )]
    #[case(
        CliError::Config(ConfigError::NoConfigDirectory),
        1,
        "no configuration directory is available"
    )]
    fn exit_code_for_run_result_prints_the_error(
        #[case] error: CliError,
        #[case] expected_code: i32,
        #[case] expected_text: &str,
    ) {
        let mut stderr = Vec::new();
        let exit_code = exit_code_for_run_result(Err(error), &mut stderr);
        assert_eq!(exit_code, expected_code);

        let stderr_text = String::from_utf8(stderr).expect("stderr was not UTF-8");
        assert!(stderr_text.contains(expected_text), "{stderr_text}");
    }
}
