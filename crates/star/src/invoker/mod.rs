//! Selection search dispatch.
//!
//! One invocation reads the selection, builds the verbatim pattern, hands it
//! to the search engine and leaves selection mode:
//!
//! ```text
//! selected_text() ──None──► done (no search, no mode change)
//!       │Some
//!       ▼
//! build(text, dir) ──► search(pattern, count, dir, move_cursor) ──Err──► caller
//!                              │Ok
//!                              ▼
//!                     exit_selection_mode() ──► last_search() to log
//! ```
//!
//! Nothing is retained between invocations. Engine errors are returned as the
//! engine produced them, and mode is only touched after the search succeeded.

use tracing::{debug, trace};
use vstar_pattern::{EscapedPattern, build};
use vstar_primitives::Direction;

use crate::capabilities::StarSearchCaps;
use crate::config::StarSearchConfig;

/// Search request sent to the engine for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarDispatch {
	/// Verbatim pattern built from the selection.
	pub pattern: EscapedPattern,
	/// Match repetitions requested from the engine.
	pub count: usize,
	/// Search direction flag.
	pub direction: Direction,
}

impl StarDispatch {
	/// Plans the search for `selected` text without touching any editor state.
	pub fn plan(selected: &str, direction: Direction) -> Self {
		Self {
			pattern: build(selected, direction),
			count: direction.repeat_count(),
			direction,
		}
	}
}

/// Runs selection searches against a host's capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchInvoker {
	log_last_search: bool,
}

impl Default for SearchInvoker {
	fn default() -> Self {
		Self::new()
	}
}

impl SearchInvoker {
	/// Creates an invoker that logs the engine's last search after each dispatch.
	pub fn new() -> Self {
		Self { log_last_search: true }
	}

	/// Creates an invoker configured from `config`.
	pub fn from_config(config: &StarSearchConfig) -> Self {
		Self {
			log_last_search: config.log_last_search,
		}
	}

	/// Enables or disables the post-dispatch last-search event.
	pub fn with_last_search_logging(mut self, enabled: bool) -> Self {
		self.log_last_search = enabled;
		self
	}

	/// Searches for the selected text in `direction`.
	///
	/// Returns `Ok(None)` without calling anything else when there is no
	/// selection. Returns the engine's error untouched if the search fails,
	/// in which case the editor stays in selection mode.
	pub fn invoke<C>(&self, caps: &mut C, direction: Direction) -> Result<Option<StarDispatch>, C::Error>
	where
		C: StarSearchCaps + ?Sized,
	{
		let Some(selected) = caps.selected_text() else {
			trace!(?direction, "star search without selection");
			return Ok(None);
		};

		let dispatch = StarDispatch::plan(&selected, direction);
		caps.search(dispatch.pattern.as_str(), dispatch.count, dispatch.direction, true)?;
		caps.exit_selection_mode();

		if self.log_last_search {
			debug!(
				last_search = ?caps.last_search(),
				?direction,
				count = dispatch.count,
				"star search dispatched"
			);
		}
		Ok(Some(dispatch))
	}
}

/// Searches for the selected text with a default [`SearchInvoker`].
pub fn invoke<C>(caps: &mut C, direction: Direction) -> Result<Option<StarDispatch>, C::Error>
where
	C: StarSearchCaps + ?Sized,
{
	SearchInvoker::new().invoke(caps, direction)
}
