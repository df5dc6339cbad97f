//! Logging: `log` records routed to a file through `env_logger`.
//!
//! The terminal belongs to the UI, so nothing is logged unless a file is
//! configured. `RUST_LOG` overrides the default `info` level.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;

/// Install the global logger. Returns `Ok(false)` when logging stays disabled.
pub fn init(log_file: Option<&Path>) -> io::Result<bool> {
    let Some(path) = log_file else {
        return Ok(false);
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .map_err(io::Error::other)?;

    log::info!("logging to {}", path.display());
    Ok(true)
}
