use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use color_eyre::eyre::{Result, eyre};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "telemon=info";

pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join("telemon").join("telemon.log"))
}

/// Route tracing output to `path`. The dashboard owns the terminal, so logs
/// never go to stdout or stderr. `RUST_LOG` overrides the default filter.
pub fn init_file_logging(path: &Path, json: bool) -> Result<()> {
    ensure_parent_dir(path)?;
    let file = File::create(path)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_env_filter(filter)
        .with_writer(Mutex::new(file));

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| eyre!("failed to set tracing subscriber: {e}"))
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
