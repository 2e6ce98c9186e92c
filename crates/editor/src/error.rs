//! Error types for the reference editor.

use thiserror::Error;
use vstar_pattern::PatternError;
use vstar_star::KeymapError;

/// Failures reported by the verbatim search engine.
#[derive(Debug, Clone, Error)]
pub enum SearchError {
	/// The pattern could not be decoded as a verbatim pattern.
	#[error(transparent)]
	Pattern(#[from] PatternError),

	/// The decoded literal could not be compiled.
	#[error("invalid pattern: {0}")]
	InvalidPattern(#[from] regex::Error),

	/// The pattern decodes to no text.
	#[error("empty search pattern")]
	EmptyPattern,

	/// The pattern does not occur in the buffer.
	#[error("pattern not found: {0}")]
	PatternNotFound(String),
}

/// Failures surfaced by key and action dispatch.
#[derive(Debug, Clone, Error)]
pub enum EditorError {
	/// A dispatched search failed.
	#[error(transparent)]
	Search(#[from] SearchError),

	/// Binding registration or resolution failed.
	#[error(transparent)]
	Keymap(#[from] KeymapError),

	/// No action is registered under the given name.
	#[error("unknown action: {0}")]
	UnknownAction(String),

	/// No extension is known under the given name.
	#[error("unknown extension: {0}")]
	UnknownExtension(String),
}
