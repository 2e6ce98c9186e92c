//! Buffer - text, selection and mode for a single view.
//!
//! Selections follow selection-mode semantics: both the anchor and the head
//! character are selected, and the head is the cursor.

use ropey::Rope;
use vstar_primitives::{CharIdx, Mode, Range, RopeSlice};

/// A text buffer with a single selection.
#[derive(Debug, Clone, Default)]
pub struct Buffer {
	text: Rope,
	/// Selection anchor and head. Collapsed to a point in normal mode.
	pub selection: Range,
	mode: Mode,
}

impl Buffer {
	/// Creates a buffer in normal mode with the cursor at the start.
	pub fn new(text: &str) -> Self {
		Self {
			text: Rope::from_str(text),
			selection: Range::point(0),
			mode: Mode::Normal,
		}
	}

	/// Returns a read-only slice of the whole text.
	pub fn text(&self) -> RopeSlice<'_> {
		self.text.slice(..)
	}

	/// Returns the current mode.
	pub fn mode(&self) -> Mode {
		self.mode
	}

	/// Returns the cursor position.
	pub fn cursor(&self) -> CharIdx {
		self.selection.head
	}

	/// Returns the last position the cursor may occupy.
	pub fn max_cursor(&self) -> CharIdx {
		self.text.len_chars().saturating_sub(1)
	}

	/// Selects `anchor..=head` and enters selection mode.
	///
	/// Positions past the end of the text are clamped to the last character.
	pub fn select(&mut self, anchor: CharIdx, head: CharIdx) {
		self.selection = Range::new(anchor, head).clamp(self.max_cursor());
		self.mode = Mode::Visual;
	}

	/// Moves the cursor to `pos`, collapsing the selection onto it.
	pub fn collapse_to(&mut self, pos: CharIdx) {
		let pos = pos.min(self.max_cursor());
		self.selection = Range::point(pos);
	}

	/// Leaves selection mode, keeping the cursor where it is.
	pub fn enter_normal(&mut self) {
		self.collapse_to(self.cursor());
		self.mode = Mode::Normal;
	}

	/// Returns the selected span as a half-open range, if a selection is active.
	pub fn selection_span(&self) -> Option<Range> {
		if !self.mode.has_selection() {
			return None;
		}
		let to = self.selection.inclusive_to().min(self.text.len_chars());
		Some(Range::new(self.selection.from(), to))
	}

	/// Returns the selected characters, if a selection is active.
	pub fn selected_text(&self) -> Option<String> {
		self.selection_span().map(|span| span.slice(self.text()).to_string())
	}
}
