//! Editor options consulted by the search engine.

/// Global editor options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
	/// Highlight every match of the last search.
	pub hlsearch: bool,
}

impl Default for Options {
	fn default() -> Self {
		Self { hlsearch: true }
	}
}
