//! Selection-to-pattern escaping.
//!
//! The selected text is folded through an ordered list of substitutions, one
//! list per [`Direction`], and prefixed with `\V` so every remaining character
//! is matched literally. Only the characters that would end or break a search
//! in that direction are rewritten:
//!
//! ```text
//! Forward  ("/" delimiter): "\n" -> "\\n", "/" -> "\\/"
//! Reverse ("?" delimiter): "\n" -> "\\n"
//! ```
//!
//! Escaping is single-pass. Feeding an already escaped pattern back through
//! [`build`] escapes it again.

use std::fmt;

use vstar_primitives::Direction;

/// Marker that switches the pattern language to verbatim (no magic) mode.
pub const VERBATIM_PREFIX: &str = "\\V";

/// A single literal substitution applied to selected text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscapeRule {
	/// Substring replaced wherever it occurs.
	pub literal: &'static str,
	/// Text written in its place.
	pub replacement: &'static str,
}

impl EscapeRule {
	const fn new(literal: &'static str, replacement: &'static str) -> Self {
		Self { literal, replacement }
	}

	/// Replaces every non-overlapping occurrence of the rule's literal in `text`.
	pub fn apply(&self, text: &str) -> String {
		text.replace(self.literal, self.replacement)
	}
}

// Newline must come first: later rules never emit a raw newline.
const FORWARD_RULES: &[EscapeRule] = &[EscapeRule::new("\n", "\\n"), EscapeRule::new("/", "\\/")];
const REVERSE_RULES: &[EscapeRule] = &[EscapeRule::new("\n", "\\n")];

/// Returns the ordered escape rules for a search direction.
pub fn escape_rules(direction: Direction) -> &'static [EscapeRule] {
	match direction {
		Direction::Forward => FORWARD_RULES,
		Direction::Reverse => REVERSE_RULES,
	}
}

/// A `\V`-prefixed search pattern built from raw selected text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EscapedPattern(String);

impl EscapedPattern {
	/// Returns the full pattern, including the `\V` prefix.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Returns the escaped body without the `\V` prefix.
	pub fn body(&self) -> &str {
		&self.0[VERBATIM_PREFIX.len()..]
	}

	/// Consumes the pattern and returns the owned string.
	pub fn into_string(self) -> String {
		self.0
	}
}

impl AsRef<str> for EscapedPattern {
	fn as_ref(&self) -> &str {
		self.as_str()
	}
}

impl fmt::Display for EscapedPattern {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<EscapedPattern> for String {
	fn from(pattern: EscapedPattern) -> Self {
		pattern.0
	}
}

/// Builds the verbatim search pattern for `selected` text searched in `direction`.
///
/// Total over any input string; an empty selection yields the bare `\V` marker.
pub fn build(selected: &str, direction: Direction) -> EscapedPattern {
	let escaped = escape_rules(direction)
		.iter()
		.fold(selected.to_owned(), |text, rule| rule.apply(&text));
	EscapedPattern(format!("{VERBATIM_PREFIX}{escaped}"))
}
