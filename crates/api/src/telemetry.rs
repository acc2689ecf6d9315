//! Tracing subscriber setup.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::{Layered, SubscriberExt};
use tracing_subscriber::{Layer, Registry};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::Config;

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Builds the log filter: `RUST_LOG` when set and valid, otherwise the
/// environment's default.
pub fn env_filter(config: &Config) -> EnvFilter {
    config
        .log_filter
        .as_deref()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(config.environment.default_log_filter()))
}

/// Opens `path` for appending, creating it if needed.
fn open_log_file(path: &Path) -> Result<File, TelemetryError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| TelemetryError::LogFile {
            path: path.to_path_buf(),
            source,
        })
}

/// A layer writing one JSON object per event to the file at `path`.
pub fn file_layer<S>(path: &Path) -> Result<impl Layer<S> + Send + Sync, TelemetryError>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    let file = open_log_file(path)?;
    Ok(tracing_subscriber::fmt::layer()
        .json()
        .with_ansi(false)
        .with_writer(Arc::new(file)))
}

/// Installs the global subscriber.
///
/// Stdout gets JSON lines in production and compact, human-readable output
/// elsewhere. When `log_file` is set, every event is also appended to that
/// file as JSON.
pub fn init(config: &Config) -> Result<(), TelemetryError> {
    let file = config
        .log_file
        .as_deref()
        .map(file_layer::<Layered<EnvFilter, Registry>>)
        .transpose()?;
    let registry = tracing_subscriber::registry()
        .with(env_filter(config))
        .with(file);

    if config.environment.is_production() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().compact())
            .init();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_default_filter_per_environment() {
        let mut config = Config::new("t");
        config.environment = Environment::Production;
        assert_eq!(env_filter(&config).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_rust_log_override() {
        let mut config = Config::new("t");
        config.log_filter = Some("warn".to_string());
        assert_eq!(env_filter(&config).max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_file_layer_writes_json_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("info.log");

        let subscriber = Registry::default().with(file_layer::<Registry>(&path).unwrap());
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(id = "b1", "bookmark created");
        });

        let contents = std::fs::read_to_string(&path).unwrap();
        let line = contents.lines().next().unwrap();
        let event: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(event["level"], "INFO");
        assert_eq!(event["fields"]["message"], "bookmark created");
        assert_eq!(event["fields"]["id"], "b1");
    }

    #[test]
    fn test_file_layer_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("info.log");
        std::fs::write(&path, "{\"existing\":true}\n").unwrap();

        let subscriber = Registry::default().with(file_layer::<Registry>(&path).unwrap());
        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!("second line");
        });

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
        assert!(contents.starts_with("{\"existing\":true}"));
    }

    #[test]
    fn test_unwritable_log_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("info.log");

        let result = file_layer::<Registry>(&path);
        assert!(matches!(result, Err(TelemetryError::LogFile { .. })));
    }
}
