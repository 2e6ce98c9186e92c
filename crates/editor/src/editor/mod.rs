//! The reference editor: one buffer, its search state and the star search bindings.

use tracing::{debug, warn};
use vstar_primitives::{CharIdx, Direction, Mode, Range};
use vstar_star::{
	EXTENSION_NAME, Keymap, Resolved, SearchInvoker, StarDispatch, StarSearchConfig, plug_direction, register, unregister,
};

use crate::buffer::Buffer;
use crate::error::EditorError;
use crate::options::Options;
use crate::search::SearchState;

/// Key that leaves selection mode.
pub const ESCAPE_KEY: &str = "<Esc>";

/// Outcome of a key or action dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyResult {
	/// A star search was sent to the engine.
	Dispatched(StarDispatch),
	/// A star search ran without an active selection and did nothing.
	NoSelection,
	/// The mode changed.
	ModeChange(Mode),
	/// The key is not bound.
	Unhandled,
}

/// In-memory editor hosting the star search.
#[derive(Debug, Clone)]
pub struct Editor {
	pub(crate) buffer: Buffer,
	pub(crate) search: SearchState,
	pub(crate) options: Options,
	keymap: Keymap,
	config: StarSearchConfig,
	invoker: SearchInvoker,
	extension_enabled: bool,
}

impl Editor {
	/// Creates an editor over `text` with default configuration.
	///
	/// The star search bindings are installed by [`Editor::enable_extension`].
	pub fn new(text: &str) -> Self {
		Self::with_config(text, StarSearchConfig::default())
	}

	/// Creates an editor over `text` using `config` for the star search.
	pub fn with_config(text: &str, config: StarSearchConfig) -> Self {
		Self {
			buffer: Buffer::new(text),
			search: SearchState::new(),
			options: Options::default(),
			keymap: Keymap::new(),
			invoker: SearchInvoker::from_config(&config),
			config,
			extension_enabled: false,
		}
	}

	/// Enables an extension by name, installing its bindings.
	///
	/// Returns `Ok(false)` if the configuration keeps the extension disabled.
	pub fn enable_extension(&mut self, name: &str) -> Result<bool, EditorError> {
		if name != EXTENSION_NAME {
			return Err(EditorError::UnknownExtension(name.to_string()));
		}
		if self.extension_enabled {
			return Ok(true);
		}
		self.extension_enabled = register(&mut self.keymap, &self.config)?;
		Ok(self.extension_enabled)
	}

	/// Disables an extension by name, removing its bindings.
	pub fn disable_extension(&mut self, name: &str) -> Result<(), EditorError> {
		if name != EXTENSION_NAME {
			return Err(EditorError::UnknownExtension(name.to_string()));
		}
		unregister(&mut self.keymap, &self.config);
		self.extension_enabled = false;
		Ok(())
	}

	/// Returns true if the star search bindings are installed.
	pub fn extension_enabled(&self) -> bool {
		self.extension_enabled
	}

	/// Returns the buffer.
	pub fn buffer(&self) -> &Buffer {
		&self.buffer
	}

	/// Returns the current mode.
	pub fn mode(&self) -> Mode {
		self.buffer.mode()
	}

	/// Returns the cursor position.
	pub fn cursor(&self) -> CharIdx {
		self.buffer.cursor()
	}

	/// Returns the editor options.
	pub fn options(&self) -> Options {
		self.options
	}

	/// Turns match highlighting on or off, refreshing the current highlights.
	pub fn set_hlsearch(&mut self, enabled: bool) {
		self.options.hlsearch = enabled;
		if let Err(err) = self.search.refresh_highlights(&self.buffer, enabled) {
			warn!(%err, "failed to refresh search highlights");
		}
	}

	/// Returns the keymap for user rebinding.
	pub fn keymap_mut(&mut self) -> &mut Keymap {
		&mut self.keymap
	}

	/// Returns the search engine state.
	pub fn search_state(&self) -> &SearchState {
		&self.search
	}

	/// Returns the last searched pattern.
	pub fn last_search(&self) -> Option<&str> {
		self.search.last_pattern()
	}

	/// Returns the highlighted matches of the last search.
	pub fn highlights(&self) -> &[Range] {
		self.search.highlights()
	}

	/// Selects `anchor..=head` and enters selection mode.
	pub fn select(&mut self, anchor: CharIdx, head: CharIdx) {
		self.buffer.select(anchor, head);
	}

	/// Leaves selection mode.
	pub fn escape(&mut self) {
		self.buffer.enter_normal();
	}

	/// Dispatches a key in the current mode.
	pub fn handle_key(&mut self, key: &str) -> Result<KeyResult, EditorError> {
		if key == ESCAPE_KEY && self.mode() == Mode::Visual {
			self.escape();
			return Ok(KeyResult::ModeChange(Mode::Normal));
		}
		match self.keymap.resolve(self.mode(), key)? {
			Some(Resolved::Handler(direction)) => self.star_search(direction),
			Some(Resolved::Keys(keys)) => {
				debug!(key, keys = %keys, "mapping resolved to keys without a handler");
				Ok(KeyResult::Unhandled)
			}
			None => Ok(KeyResult::Unhandled),
		}
	}

	/// Runs an action by its symbolic name, regardless of mode.
	pub fn execute_action(&mut self, name: &str) -> Result<KeyResult, EditorError> {
		let direction = plug_direction(name).ok_or_else(|| EditorError::UnknownAction(name.to_string()))?;
		self.star_search(direction)
	}

	/// Searches for the selected text in `direction`.
	pub fn star_search(&mut self, direction: Direction) -> Result<KeyResult, EditorError> {
		let invoker = self.invoker;
		let mut caps = self.caps();
		let result = match invoker.invoke(&mut caps, direction)? {
			Some(dispatch) => KeyResult::Dispatched(dispatch),
			None => KeyResult::NoSelection,
		};
		Ok(result)
	}
}
