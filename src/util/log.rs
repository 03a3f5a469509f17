use std::{path::PathBuf, sync::Mutex};

use color_eyre::eyre::{Result, eyre};
use directories::ProjectDirs;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_ENV: &str = "SILENTTRACK_LOG";
const LOG_FILE: &str = "silenttrack.log";
const DEFAULT_FILTER: &str = "silenttrack=info";

/// Log file under the platform data directory, e.g.
/// `~/.local/share/silenttrack/silenttrack.log`.
pub fn log_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "silenttrack", "silenttrack")
        .ok_or_else(|| eyre!("no home directory to place the log file in"))?;
    Ok(dirs.data_local_dir().join(LOG_FILE))
}

/// Sends `tracing` output to the log file. The terminal belongs to the UI, so
/// nothing is written to stdout or stderr.
pub fn initialize_logging() -> Result<()> {
    let path = log_path()?;
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let file = std::fs::File::create(&path)?;

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(ErrorLayer::default())
        .try_init()?;

    tracing::info!(path = %path.display(), "logging_initialized");
    Ok(())
}
