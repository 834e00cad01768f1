use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Level filter for `-v` repetitions; `base` is the configured level.
pub fn filter_for(verbose: u8, base: &str) -> String {
    match verbose {
        0 => format!("warn,folio={base}"),
        1 => "info,folio=debug".to_string(),
        _ => "debug,folio=trace".to_string(),
    }
}

/// The terminal belongs to the UI, so logs go to a file. `RUST_LOG` wins
/// over the computed filter.
pub fn init(path: &Path, filter: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .try_init()?;
    Ok(())
}
