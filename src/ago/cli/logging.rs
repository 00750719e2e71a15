use env_logger::{Builder, Target};
use log::{Level, LevelFilter};
use std::io::Write;

fn tag(level: Level) -> &'static str {
    match level {
        Level::Error => "err",
        Level::Warn => "wrn",
        Level::Info => "inf",
        Level::Debug | Level::Trace => "dbg",
    }
}

/// Route `log` records to stderr as `[tag] message`.
///
/// The level comes from `--verbose` only; the environment is not consulted.
pub(super) fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let _ = Builder::new()
        .filter_level(level)
        .target(Target::Stderr)
        .format(|buf, record| writeln!(buf, "[{}] {}", tag(record.level()), record.args()))
        .try_init();
}
