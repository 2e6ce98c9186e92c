//! Error types for configuration parsing.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or an unexpected field.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A trigger key was configured as an empty string.
	#[error("empty trigger key: keys.{0}")]
	EmptyKey(&'static str),

	/// A trigger key names a `<Plug>` action.
	#[error("reserved trigger key {0:?}: <Plug> names cannot be typed")]
	ReservedKey(String),

	/// Both directions were bound to the same trigger.
	#[error("forward and reverse share the trigger {0:?}")]
	DuplicateKey(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
