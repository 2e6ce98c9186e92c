//! Error types for verbatim pattern decoding.

use thiserror::Error;

/// Errors produced while interpreting a search pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
	/// The pattern does not start with the `\V` verbatim marker.
	#[error("not a verbatim pattern: {0:?}")]
	NotVerbatim(String),
}

/// Result type for pattern operations.
pub type Result<T> = std::result::Result<T, PatternError>;
