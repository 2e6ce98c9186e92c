//! Extension identity and default key registration.

use tracing::debug;
use vstar_primitives::{Direction, Mode};

use crate::config::StarSearchConfig;
use crate::keymap::{Keymap, KeymapError};

/// Name the extension is enabled under.
pub const EXTENSION_NAME: &str = "VisualStarSearch";
/// Prefix shared by symbolic action names. Never a valid trigger.
pub const PLUG_PREFIX: &str = "<Plug>";
/// Symbolic name of the forward search action.
pub const PLUG_FORWARD: &str = "<Plug>VisualStarSearchForward";
/// Symbolic name of the reverse search action.
pub const PLUG_REVERSE: &str = "<Plug>VisualStarSearchReversed";

/// Returns the symbolic action name for a direction.
pub fn plug_name(direction: Direction) -> &'static str {
	match direction {
		Direction::Forward => PLUG_FORWARD,
		Direction::Reverse => PLUG_REVERSE,
	}
}

/// Returns the direction bound to a symbolic action name.
pub fn plug_direction(name: &str) -> Option<Direction> {
	match name {
		PLUG_FORWARD => Some(Direction::Forward),
		PLUG_REVERSE => Some(Direction::Reverse),
		_ => None,
	}
}

/// Installs both search handlers and their selection-mode triggers.
///
/// Returns `Ok(false)` without touching `keymap` when the extension is disabled.
/// On error `keymap` is left as it was.
pub fn register(keymap: &mut Keymap, config: &StarSearchConfig) -> Result<bool, KeymapError> {
	if !config.enabled {
		debug!(extension = EXTENSION_NAME, "extension disabled, skipping registration");
		return Ok(false);
	}
	let (forward, reverse) = (config.keys.forward.as_str(), config.keys.reverse.as_str());
	for trigger in [forward, reverse] {
		if trigger.starts_with(PLUG_PREFIX) {
			return Err(KeymapError::ReservedKey { key: trigger.to_string() });
		}
	}
	if forward == reverse {
		return Err(KeymapError::DuplicateTrigger { key: forward.to_string() });
	}

	let mut staged = keymap.clone();
	for (direction, trigger) in [(Direction::Forward, forward), (Direction::Reverse, reverse)] {
		let plug = plug_name(direction);
		staged.put_handler(Mode::Visual, plug, direction)?;
		staged.map(Mode::Visual, trigger, plug, true)?;
		debug!(extension = EXTENSION_NAME, trigger, plug, "registered star search binding");
	}
	*keymap = staged;
	Ok(true)
}

/// Removes the handlers and the configured triggers installed by [`register`].
pub fn unregister(keymap: &mut Keymap, config: &StarSearchConfig) {
	for lhs in [PLUG_FORWARD, PLUG_REVERSE, config.keys.forward.as_str(), config.keys.reverse.as_str()] {
		keymap.unmap(Mode::Visual, lhs);
	}
}
