use ropey::RopeSlice;

/// A position in the text, measured in characters (not bytes).
pub type CharIdx = usize;

/// A text range defined by anchor and head positions.
///
/// The anchor is the fixed end and the head is the cursor. As a span the
/// range is half-open (`min..max`); selection-mode extents that include the
/// character under the head use [`Range::inclusive_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
	/// The fixed end of the range.
	pub anchor: CharIdx,
	/// The moving end of the range (cursor position).
	pub head: CharIdx,
}

impl Range {
	/// Creates a new range from anchor to head.
	pub fn new(anchor: CharIdx, head: CharIdx) -> Self {
		Self { anchor, head }
	}

	/// Creates a zero-width range (cursor) at the given position.
	pub fn point(pos: CharIdx) -> Self {
		Self::new(pos, pos)
	}

	/// Returns the smaller of anchor and head.
	#[inline]
	pub fn min(&self) -> CharIdx {
		std::cmp::min(self.anchor, self.head)
	}

	/// Returns the larger of anchor and head.
	#[inline]
	pub fn max(&self) -> CharIdx {
		std::cmp::max(self.anchor, self.head)
	}

	/// Returns the start of the span (inclusive).
	#[inline]
	pub fn from(&self) -> CharIdx {
		self.min()
	}

	/// Returns the end of the span (exclusive).
	#[inline]
	pub fn to(&self) -> CharIdx {
		self.max()
	}

	/// Returns the exclusive end when both anchor and head characters are selected.
	#[inline]
	pub fn inclusive_to(&self) -> CharIdx {
		self.max() + 1
	}

	/// Clamps anchor and head to `[0, max_char]`.
	pub fn clamp(&self, max_char: CharIdx) -> Self {
		Self {
			anchor: self.anchor.min(max_char),
			head: self.head.min(max_char),
		}
	}

	/// Returns the text covered by the half-open span.
	pub fn slice<'a>(&self, text: RopeSlice<'a>) -> RopeSlice<'a> {
		let len = text.len_chars();
		text.slice(self.from().min(len)..self.to().min(len))
	}
}

impl Default for Range {
	fn default() -> Self {
		Self::point(0)
	}
}
