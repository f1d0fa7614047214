//! Logger installation for the binary.

use log::LevelFilter;

/// Install `env_logger` at `level`.
///
/// `RUST_LOG` directives, when set, are applied on top of `level` so a
/// single target can be raised without touching the flags.
pub fn init_logging(level: LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(true);

    if builder.try_init().is_err() {
        // A logger is already installed, e.g. by a test harness.
    }
}
