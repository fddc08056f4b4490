use color_eyre::eyre::{eyre, Result};
use env_logger::{Builder, Logger, Target, WriteStyle};
use log::LevelFilter;
use std::fs;
use std::path::Path;
use tui_logger::{init_logger, set_default_level, TuiLoggerFile};

/// Capture log records for the preview's log pane and mirror them to
/// `log_file`.
///
/// Records reach the pane and the file from a background thread, so this is
/// only suitable for a long running session.
pub fn setup_tui_logger(level: LevelFilter, log_file: &Path) -> Result<()> {
    init_logger(LevelFilter::Trace).map_err(|e| eyre!("Could not set up logger: {}", e))?;
    set_default_level(level);
    for target in ["crossterm", "mio"] {
        tui_logger::set_level_for_target(target, LevelFilter::Info);
    }

    if let Some(parent) = log_file.parent() {
        fs::create_dir_all(parent)?;
    }
    tui_logger::set_log_file(TuiLoggerFile::new(&log_file.to_string_lossy()));
    Ok(())
}

/// Logger writing each record to `target` before the logging call returns.
pub fn cli_logger(level: LevelFilter, target: Target) -> Logger {
    Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .write_style(WriteStyle::Never)
        .target(target)
        .build()
}

/// Log to stderr, for commands that exit right after their work is done.
pub fn setup_cli_logger(level: LevelFilter) -> Result<()> {
    let logger = cli_logger(level, Target::Stderr);
    log::set_max_level(logger.filter());
    log::set_boxed_logger(Box::new(logger)).map_err(|e| eyre!("Could not set up logger: {}", e))
}
