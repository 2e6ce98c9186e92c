//! Regex match location over buffer text, in character offsets.
//!
//! Matches are enumerated by start position, so occurrences that overlap
//! (`aa` in `aaaa`) are all visible to both search directions.

use std::iter;

use regex::Regex;
use vstar_primitives::{CharIdx, Direction, Range, RopeSlice};

/// Buffer text flattened once for repeated regex queries.
///
/// Byte offsets of the flattened string equal those of the rope, so match
/// offsets convert back to characters through the rope index.
pub struct Haystack<'a> {
	rope: RopeSlice<'a>,
	text: String,
}

impl<'a> Haystack<'a> {
	/// Collects `text` into a contiguous string.
	pub fn new(text: RopeSlice<'a>) -> Self {
		Self {
			rope: text,
			text: text.chars().collect(),
		}
	}

	/// Iterates every match in document order, one per start position.
	fn matches<'h>(&'h self, re: &'h Regex) -> impl Iterator<Item = Range> + 'h {
		let mut byte = 0;
		iter::from_fn(move || {
			if byte > self.text.len() {
				return None;
			}
			let m = re.find_at(&self.text, byte)?;
			byte = self.text[m.start()..]
				.chars()
				.next()
				.map_or(self.text.len() + 1, |ch| m.start() + ch.len_utf8());
			Some(self.char_range(m.start(), m.end()))
		})
	}

	/// Finds all regex matches in the text, overlapping ones included.
	pub fn find_all(&self, re: &Regex) -> Vec<Range> {
		self.matches(re).collect()
	}

	/// Finds the first match starting at or after `pos`, wrapping to the
	/// start of the text if none is found after `pos`.
	pub fn find_next(&self, re: &Regex, pos: CharIdx) -> Option<Range> {
		if pos < self.rope.len_chars()
			&& let Some(m) = re.find_at(&self.text, self.rope.char_to_byte(pos))
		{
			return Some(self.char_range(m.start(), m.end()));
		}

		self.matches(re).next().filter(|range| range.from() < pos)
	}

	/// Finds the last match starting before `pos`, wrapping to the last
	/// match in the text if none is found before `pos`.
	pub fn find_prev(&self, re: &Regex, pos: CharIdx) -> Option<Range> {
		let mut last_before = None;
		for range in self.matches(re) {
			if range.from() >= pos {
				break;
			}
			last_before = Some(range);
		}

		last_before.or_else(|| self.matches(re).last())
	}

	/// Repeats a directional search `count` times starting from the cursor.
	///
	/// Forward repetitions start just after the previous match start; reverse
	/// repetitions start before it. A count of zero searches once.
	pub fn find_nth(&self, re: &Regex, cursor: CharIdx, count: usize, direction: Direction) -> Option<Range> {
		let mut pos = cursor;
		let mut found = None;
		for _ in 0..count.max(1) {
			let range = match direction {
				Direction::Forward => self.find_next(re, pos + 1)?,
				Direction::Reverse => self.find_prev(re, pos)?,
			};
			pos = range.from();
			found = Some(range);
		}
		found
	}

	fn char_range(&self, start: usize, end: usize) -> Range {
		Range::new(self.rope.byte_to_char(start), self.rope.byte_to_char(end))
	}
}

/// Finds all regex matches in `text`.
pub fn find_all_matches(text: RopeSlice, re: &Regex) -> Vec<Range> {
	Haystack::new(text).find_all(re)
}
