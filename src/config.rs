//! Sink configuration for the JSON Lines callback.
//!
//! The callback has exactly one configuration surface: the filesystem path of
//! the named pipe the event stream is written to, resolved from the
//! [`PIPE_PATH_VAR`] environment variable. A missing variable is a
//! [`Error::Config`] raised before any I/O is attempted.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Environment variable naming the filesystem path of the event pipe.
pub const PIPE_PATH_VAR: &str = "JSON_LINES_PIPE";

/// Configuration for the event sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkConfig {
    /// Path of the named pipe the event stream is written to.
    pub pipe_path: PathBuf,
}

impl SinkConfig {
    /// Creates a configuration with an explicit pipe path.
    pub fn new(pipe_path: impl Into<PathBuf>) -> Self {
        Self {
            pipe_path: pipe_path.into(),
        }
    }

    /// Resolves the configuration from the environment.
    ///
    /// Fails with [`Error::Config`] if [`PIPE_PATH_VAR`] is unset or empty.
    /// No filesystem access happens here; opening the pipe is the sink's job.
    pub fn from_env() -> Result<Self> {
        match env::var_os(PIPE_PATH_VAR) {
            Some(value) if !value.is_empty() => Ok(Self::new(PathBuf::from(value))),
            Some(_) => Err(Error::config(format!(
                "environment variable '{PIPE_PATH_VAR}' is set but empty"
            ))),
            None => Err(Error::config(format!(
                "required environment variable '{PIPE_PATH_VAR}' is not set"
            ))),
        }
    }

    /// Returns the configured pipe path.
    pub fn pipe_path(&self) -> &Path {
        &self.pipe_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Phases run inside a single test because they mutate the same
    // process-wide environment variable.
    #[test]
    fn test_from_env_resolution() {
        env::remove_var(PIPE_PATH_VAR);
        let err = SinkConfig::from_env().unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains(PIPE_PATH_VAR));

        env::set_var(PIPE_PATH_VAR, "");
        let err = SinkConfig::from_env().unwrap_err();
        assert!(err.is_configuration());

        env::set_var(PIPE_PATH_VAR, "/run/events.pipe");
        let config = SinkConfig::from_env().unwrap();
        assert_eq!(config.pipe_path(), Path::new("/run/events.pipe"));

        env::remove_var(PIPE_PATH_VAR);
    }

    #[test]
    fn test_explicit_path() {
        let config = SinkConfig::new("/tmp/pipe");
        assert_eq!(config.pipe_path(), Path::new("/tmp/pipe"));
    }
}
