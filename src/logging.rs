//! Tracing subscriber setup for the binary.
//!
//! Logs go to a file so they never interleave with the prompts. The level
//! comes from `RUST_LOG` and defaults to `info`.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Install a global subscriber writing to `path`, truncating it first.
///
/// If a global subscriber is already installed the file is left untouched
/// and nothing happens.
pub fn init(path: &Path) -> io::Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}
