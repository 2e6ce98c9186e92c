//! Sole capability provider for the star search.
//!
//! # Invariants
//!
//! - The [`Editor`] struct does not implement any `vstar_star::*Access`
//!   trait. Every capability the invoker runs against is implemented on
//!   [`EditorCaps`], which borrows the editor for one dispatch.
//!
//! ```compile_fail
//! use vstar_editor::Editor;
//! use vstar_star::SelectionAccess;
//! fn _assert_is_not_selection_access(e: &mut Editor) {
//!     let _x: &mut dyn SelectionAccess = e;
//! }
//! ```

use crate::editor::Editor;

/// Capability provider wrapping a mutable borrow of an [`Editor`].
pub struct EditorCaps<'a> {
	pub(crate) ed: &'a mut Editor,
}

impl<'a> EditorCaps<'a> {
	/// Creates a new capability provider wrapping the given editor.
	pub fn new(ed: &'a mut Editor) -> Self {
		Self { ed }
	}
}

impl Editor {
	/// Returns a capability provider for this editor.
	pub fn caps(&mut self) -> EditorCaps<'_> {
		EditorCaps::new(self)
	}
}
