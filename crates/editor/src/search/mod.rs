//! Verbatim search engine state.
//!
//! Owns the last search and the match highlights. Patterns are `\V`
//! verbatim patterns: they are decoded to their literal text and matched
//! with an escaped regex, so no character in the selection has syntactic
//! meaning.

mod find;

pub use find::{Haystack, find_all_matches};
use regex::Regex;
use tracing::{debug, trace};
use vstar_pattern::decode_verbatim;
use vstar_primitives::{Direction, Range};

use crate::buffer::Buffer;
use crate::error::SearchError;

/// Last search and current match highlights.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
	last_search: Option<(String, Direction)>,
	highlights: Vec<Range>,
}

impl SearchState {
	/// Creates an empty search state.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the last searched pattern.
	pub fn last_pattern(&self) -> Option<&str> {
		self.last_search.as_ref().map(|(p, _)| p.as_str())
	}

	/// Returns the last search `(pattern, direction)` pair.
	pub fn last_search(&self) -> Option<(&str, Direction)> {
		self.last_search.as_ref().map(|(p, d)| (p.as_str(), *d))
	}

	/// Returns the highlighted matches of the last search, in document order.
	pub fn highlights(&self) -> &[Range] {
		&self.highlights
	}

	/// Searches `buffer` for `pattern`, repeated `count` times in `direction`.
	///
	/// The pattern becomes the last search before matching, so it is kept
	/// even when nothing matches. With `hlsearch`, every match is
	/// highlighted. With `move_cursor`, the cursor moves to the start of the
	/// final match. Returns that match.
	pub fn search(
		&mut self,
		buffer: &mut Buffer,
		pattern: &str,
		count: usize,
		direction: Direction,
		move_cursor: bool,
		hlsearch: bool,
	) -> Result<Range, SearchError> {
		self.last_search = Some((pattern.to_string(), direction));
		self.highlights.clear();

		let re = compile(pattern)?;
		let haystack = Haystack::new(buffer.text());
		if hlsearch {
			self.highlights = haystack.find_all(&re);
		}

		let target = haystack
			.find_nth(&re, buffer.cursor(), count, direction)
			.ok_or_else(|| SearchError::PatternNotFound(pattern.to_string()))?;
		trace!(pattern, count, ?direction, from = target.from(), "search matched");

		if move_cursor {
			buffer.collapse_to(target.from());
		}
		debug!(pattern, matches = self.highlights.len(), "search highlights updated");
		Ok(target)
	}

	/// Recomputes highlights for the last search against `buffer`.
	pub fn refresh_highlights(&mut self, buffer: &Buffer, hlsearch: bool) -> Result<(), SearchError> {
		self.highlights.clear();
		let re = match self.last_pattern() {
			Some(pattern) if hlsearch => compile(pattern)?,
			_ => return Ok(()),
		};
		self.highlights = find_all_matches(buffer.text(), &re);
		Ok(())
	}
}

/// Compiles a verbatim pattern into a regex matching its literal text.
fn compile(pattern: &str) -> Result<Regex, SearchError> {
	let literal = decode_verbatim(pattern)?;
	if literal.is_empty() {
		return Err(SearchError::EmptyPattern);
	}
	Ok(Regex::new(&regex::escape(&literal))?)
}
