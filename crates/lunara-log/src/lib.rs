//! Structured logging for the lunar atlas.
//!
//! Console output with uptime timestamps and module paths, plus a JSON log
//! file in debug builds for post-mortem analysis. The level comes from
//! `RUST_LOG` when set, otherwise from the config's `debug.log_level`.

use std::fs::File;
use std::path::{Path, PathBuf};

use lunara_config::Config;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Name of the JSON log file written inside the log directory.
pub const LOG_FILE_NAME: &str = "lunara.log";

/// Filter used when neither `RUST_LOG` nor the config names a level.
pub const DEFAULT_DIRECTIVE: &str = "info";

/// Install the global tracing subscriber.
///
/// * `log_dir` - directory for the JSON log file; falls back to
///   `config.debug.log_dir` when `None`
/// * `debug_build` - file logging only happens in debug builds
/// * `config` - optional configuration supplying the log level
///
/// A log directory that cannot be created is reported on the console and
/// file logging is skipped. Fails only if a global subscriber is already set.
///
/// ```no_run
/// use lunara_config::Config;
/// use lunara_log::init_logging;
///
/// let config = Config::default();
/// init_logging(None, cfg!(debug_assertions), Some(&config)).ok();
/// ```
pub fn init_logging(
    log_dir: Option<&Path>,
    debug_build: bool,
    config: Option<&Config>,
) -> Result<(), TryInitError> {
    let directive = filter_directive(config);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&directive));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_names(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let file_dir = log_dir
        .map(Path::to_path_buf)
        .or_else(|| config.and_then(|c| c.debug.log_dir.clone()));
    let (file, file_error) = match file_dir.filter(|_| debug_build) {
        Some(dir) => match open_log_file(&dir) {
            Ok(file) => (Some(file), None),
            Err(e) => (None, Some((dir, e))),
        },
        None => (None, None),
    };

    let file_layer = file.map(|file| {
        fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json()
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    if let Some((dir, e)) = file_error {
        tracing::warn!("File logging disabled, cannot open {}: {e}", dir.display());
    }
    Ok(())
}

/// The filter directive for a config: its `debug.log_level`, or
/// [`DEFAULT_DIRECTIVE`] when absent or blank.
pub fn filter_directive(config: Option<&Config>) -> String {
    config
        .map(|c| c.debug.log_level.trim())
        .filter(|level| !level.is_empty())
        .unwrap_or(DEFAULT_DIRECTIVE)
        .to_string()
}

/// An `EnvFilter` built from [`DEFAULT_DIRECTIVE`].
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_DIRECTIVE)
}

/// Path of the JSON log file inside `log_dir`.
pub fn log_file_path(log_dir: &Path) -> PathBuf {
    log_dir.join(LOG_FILE_NAME)
}

fn open_log_file(log_dir: &Path) -> std::io::Result<File> {
    std::fs::create_dir_all(log_dir)?;
    File::create(log_file_path(log_dir))
}
