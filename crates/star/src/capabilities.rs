//! Capability traits the star search needs from its host editor.
//!
//! The search runs against three narrow seams instead of a concrete editor:
//!
//! - [`SelectionAccess`] - read the text under the active selection
//! - [`SearchAccess`] - run a pattern search and expose the last search
//! - [`ModeAccess`] - inspect the mode and leave selection mode
//!
//! [`StarSearchCaps`] is implemented for every type providing all three.

use vstar_primitives::{Direction, Mode};

/// Selection access.
pub trait SelectionAccess {
	/// Returns exactly the characters under the active selection, or `None`
	/// when no selection exists.
	fn selected_text(&self) -> Option<String>;
}

/// Search engine access.
///
/// The engine owns the "last search" state. A successful [`search`] must
/// record `pattern` as the last search and refresh match highlighting.
///
/// [`search`]: SearchAccess::search
pub trait SearchAccess {
	/// Failure reported by the engine, returned to callers unchanged.
	type Error;

	/// Searches for `pattern`, repeated `count` times in `direction`.
	///
	/// When `move_cursor` is true the cursor is relocated to the final match.
	fn search(&mut self, pattern: &str, count: usize, direction: Direction, move_cursor: bool) -> Result<(), Self::Error>;

	/// Returns the most recently searched pattern, if any.
	fn last_search(&self) -> Option<&str>;
}

/// Mode access.
pub trait ModeAccess {
	/// Returns the current editor mode.
	fn mode(&self) -> Mode;
	/// Leaves selection mode, returning to normal navigation.
	fn exit_selection_mode(&mut self);
}

/// Convenience trait combining the capabilities a star search runs against.
pub trait StarSearchCaps: SelectionAccess + SearchAccess + ModeAccess {}

impl<T: SelectionAccess + SearchAccess + ModeAccess + ?Sized> StarSearchCaps for T {}
