//! Logging for the mealplan CLI.
//!
//! Records go to stderr with colors and to `mealplan.log` in plain text, so
//! command output on stdout stays machine-readable.

use crate::error::MealplanError;

use common::ErrorLocation;

use std::fs::File;
use std::io::stderr;
use std::panic::Location;
use std::path::Path;
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::Color::{Blue, Green, Magenta, Red, Yellow};
use fern::colors::ColoredLevelConfig;
use humantime::format_rfc3339;
use log::{LevelFilter, info, warn};

/// Thread-safe initialization guard.
static INIT_LOGGER_ONCE: Once = Once::new();

/// Tracks if logger initialization was already attempted.
static LOGGER_ALREADY_CALLED: AtomicBool = AtomicBool::new(false);

pub const LOG_FILE_NAME: &str = "mealplan.log";

const LOGGER_ALREADY_INITIALIZED_MESSAGE: &str = "Logger already initialized";

#[cfg(debug_assertions)]
const LOG_LEVEL: LevelFilter = LevelFilter::Debug;

#[cfg(not(debug_assertions))]
const LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Initialize the logger once; later calls warn and return Ok.
///
/// `verbose` raises the terminal level to the build's level. Without it only
/// warnings reach stderr while the file still gets everything.
///
/// # Errors
///
/// Returns an error if the log file cannot be created or a global logger is
/// already installed by someone else.
pub fn initialize(log_dir: &Path, verbose: bool) -> Result<(), MealplanError> {
    if LOGGER_ALREADY_CALLED.swap(true, Ordering::SeqCst) {
        warn!("{LOGGER_ALREADY_INITIALIZED_MESSAGE}");
        return Ok(());
    }

    let mut result = Ok(());

    INIT_LOGGER_ONCE.call_once(|| {
        result = initialize_internal(log_dir, verbose);
        if result.is_ok() {
            info!("Logger initialized with level: {LOG_LEVEL:?}");
        }
    });

    result
}

#[track_caller]
fn initialize_internal(log_dir: &Path, verbose: bool) -> Result<(), MealplanError> {
    let color_configuration = ColoredLevelConfig::new()
        .debug(Blue)
        .info(Green)
        .warn(Yellow)
        .error(Red)
        .trace(Magenta);

    let terminal_level = if verbose { LOG_LEVEL } else { LevelFilter::Warn };

    let stderr_dispatch = Dispatch::new()
        .level(terminal_level)
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = format_rfc3339(SystemTime::now()),
                level = color_configuration.color(record.level()),
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0),
            ))
        })
        .chain(stderr());

    let log_file = open_log_file(log_dir)?;

    let file_dispatch = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = format_rfc3339(SystemTime::now()),
                level = record.level(),
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0)
            ))
        })
        .chain(log_file);

    Dispatch::new()
        .level(LOG_LEVEL)
        .chain(stderr_dispatch)
        .chain(file_dispatch)
        .apply()
        .map_err(|e| MealplanError::Mealplan {
            message: format!("Failed to initialize logger: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(())
}

/// Open `mealplan.log` in `log_dir` for appending.
#[track_caller]
pub(crate) fn open_log_file(log_dir: &Path) -> Result<File, MealplanError> {
    fern::log_file(log_dir.join(LOG_FILE_NAME)).map_err(|e| MealplanError::Mealplan {
        message: format!("Failed to create log file: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })
}
