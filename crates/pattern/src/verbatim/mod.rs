//! Decoding of `\V` patterns back into the literal text they match.
//!
//! Only the escapes [`build`](crate::build) can emit, plus the reverse
//! delimiter and an escaped backslash, are understood:
//!
//! | escape | literal |
//! |--------|---------|
//! | `\n`   | newline |
//! | `\/`   | `/`     |
//! | `\?`   | `?`     |
//! | `\\`   | `\`     |
//!
//! Any other backslash sequence is kept as written.

use crate::escape::VERBATIM_PREFIX;
use crate::{PatternError, Result};

/// Returns the literal text matched by a verbatim `pattern`.
pub fn decode_verbatim(pattern: &str) -> Result<String> {
	let body = pattern
		.strip_prefix(VERBATIM_PREFIX)
		.ok_or_else(|| PatternError::NotVerbatim(pattern.to_string()))?;

	let mut literal = String::with_capacity(body.len());
	let mut chars = body.chars();
	while let Some(ch) = chars.next() {
		if ch != '\\' {
			literal.push(ch);
			continue;
		}
		match chars.next() {
			Some('n') => literal.push('\n'),
			Some(c @ ('/' | '?' | '\\')) => literal.push(c),
			Some(other) => {
				literal.push('\\');
				literal.push(other);
			}
			None => literal.push('\\'),
		}
	}
	Ok(literal)
}
