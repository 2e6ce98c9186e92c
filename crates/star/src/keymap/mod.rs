//! Per-mode key bindings for the star search actions.
//!
//! A binding either runs a search handler directly or maps its keys onto
//! another left-hand side. The default setup installs the handlers under
//! their `<Plug>` names and maps `*` and `#` onto those names:
//!
//! ```text
//! (Visual, "*") ──map──► (Visual, "<Plug>VisualStarSearchForward") ──► Handler(Forward)
//! (Visual, "#") ──map──► (Visual, "<Plug>VisualStarSearchReversed") ──► Handler(Reverse)
//! ```
//!
//! Users rebind a trigger by mapping any other key onto the `<Plug>` name.

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::trace;
use vstar_primitives::{Direction, Mode};

/// Maximum number of mappings followed before resolution gives up.
pub const MAX_MAP_DEPTH: usize = 1000;

/// Errors produced by binding registration and resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeymapError {
	/// A binding was registered with an empty left- or right-hand side.
	#[error("empty key in {mode:?} mode binding")]
	EmptyKey {
		/// Mode the binding was registered for.
		mode: Mode,
	},
	/// A trigger key names a `<Plug>` action instead of a typed key.
	#[error("reserved key used as trigger: {key:?}")]
	ReservedKey {
		/// The rejected trigger.
		key: String,
	},
	/// Both search directions were given the same trigger.
	#[error("trigger {key:?} bound to both search directions")]
	DuplicateTrigger {
		/// The shared trigger.
		key: String,
	},
	/// Mapping resolution exceeded [`MAX_MAP_DEPTH`].
	#[error("recursive mapping: {key:?} in {mode:?} mode")]
	RecursiveMapping {
		/// Key the resolution started from.
		key: String,
		/// Mode the resolution ran in.
		mode: Mode,
	},
}

/// Right-hand side of a key binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
	/// Runs the selection search in the given direction.
	Handler(Direction),
	/// Replays `target` as if it had been typed.
	Map {
		/// Keys fed back into resolution.
		target: String,
		/// Whether `target` is itself subject to mappings.
		recursive: bool,
	},
}

/// Result of resolving a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
	/// A search handler is bound to the key.
	Handler(Direction),
	/// The key maps non-recursively onto keys this keymap does not own.
	Keys(String),
}

/// Selection search bindings keyed by mode and left-hand side.
#[derive(Debug, Clone, Default)]
pub struct Keymap {
	bindings: FxHashMap<(Mode, String), Binding>,
}

impl Keymap {
	/// Creates an empty keymap.
	pub fn new() -> Self {
		Self::default()
	}

	/// Binds `lhs` in `mode` to a search handler, replacing any previous binding.
	pub fn put_handler(&mut self, mode: Mode, lhs: &str, direction: Direction) -> Result<Option<Binding>, KeymapError> {
		self.insert(mode, lhs, Binding::Handler(direction))
	}

	/// Maps `lhs` onto `rhs` in `mode`, replacing any previous binding.
	pub fn map(&mut self, mode: Mode, lhs: &str, rhs: &str, recursive: bool) -> Result<Option<Binding>, KeymapError> {
		if rhs.is_empty() {
			return Err(KeymapError::EmptyKey { mode });
		}
		self.insert(
			mode,
			lhs,
			Binding::Map {
				target: rhs.to_string(),
				recursive,
			},
		)
	}

	/// Removes the binding for `lhs` in `mode`.
	pub fn unmap(&mut self, mode: Mode, lhs: &str) -> Option<Binding> {
		self.bindings.remove(&(mode, lhs.to_string()))
	}

	/// Returns the binding registered for `lhs` in `mode`.
	pub fn get(&self, mode: Mode, lhs: &str) -> Option<&Binding> {
		self.bindings.get(&(mode, lhs.to_string()))
	}

	/// Returns the number of registered bindings.
	pub fn len(&self) -> usize {
		self.bindings.len()
	}

	/// Returns true if no bindings are registered.
	pub fn is_empty(&self) -> bool {
		self.bindings.is_empty()
	}

	/// Follows mappings from `key` in `mode` until a handler or unowned keys are reached.
	///
	/// Returns `Ok(None)` if `key` itself is unbound. A recursive mapping that
	/// lands on an unbound left-hand side resolves to those keys.
	pub fn resolve(&self, mode: Mode, key: &str) -> Result<Option<Resolved>, KeymapError> {
		let mut current = key;
		for depth in 0..MAX_MAP_DEPTH {
			let Some(binding) = self.get(mode, current) else {
				return Ok((depth > 0).then(|| Resolved::Keys(current.to_string())));
			};
			match binding {
				Binding::Handler(direction) => {
					trace!(key, ?mode, depth, ?direction, "resolved search handler");
					return Ok(Some(Resolved::Handler(*direction)));
				}
				Binding::Map { target, recursive: false } => return Ok(Some(Resolved::Keys(target.clone()))),
				Binding::Map { target, recursive: true } => current = target.as_str(),
			}
		}
		Err(KeymapError::RecursiveMapping {
			key: key.to_string(),
			mode,
		})
	}

	fn insert(&mut self, mode: Mode, lhs: &str, binding: Binding) -> Result<Option<Binding>, KeymapError> {
		if lhs.is_empty() {
			return Err(KeymapError::EmptyKey { mode });
		}
		Ok(self.bindings.insert((mode, lhs.to_string()), binding))
	}
}
