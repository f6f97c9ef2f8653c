//! Tracing setup
//!
//! The terminal UI owns stderr, so log output only goes to a file when one is
//! requested. Without a file no subscriber is installed and events are dropped.

use anyhow::{Context, Result, anyhow};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "info";

pub fn init(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!("Failed to install tracing subscriber: {err}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_file_is_a_noop() {
        assert!(init(None).is_ok());
    }

    #[test]
    fn test_writes_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snake.log");

        init(Some(&path)).unwrap();
        tracing::error!("hello from the log test");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("hello from the log test"));
    }

    #[test]
    fn test_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = init(Some(&dir.path().join("missing").join("snake.log"))).unwrap_err();
        assert!(err.to_string().contains("Failed to create log file"));
    }
}
