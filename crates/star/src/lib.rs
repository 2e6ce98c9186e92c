//! Visual star search.
//!
//! Searches for the text under the active selection, forward (`*`) or in
//! reverse (`#`), as a literal pattern, then drops back to normal mode.
//!
//! * [`capabilities`] - the editor seams the search runs against
//! * [`SearchInvoker`] - selection read, pattern build, search dispatch, mode exit
//! * [`extension`] - action names and default key registration
//! * [`Keymap`] - selection-mode bindings resolved to search handlers
//! * [`StarSearchConfig`] - TOML configuration

pub mod capabilities;
pub mod config;
pub mod extension;
pub mod invoker;
pub mod keymap;

pub use capabilities::{ModeAccess, SearchAccess, SelectionAccess, StarSearchCaps};
pub use config::{ConfigError, ConfigLayer, KeysConfig, StarSearchConfig};
pub use extension::{EXTENSION_NAME, PLUG_FORWARD, PLUG_REVERSE, plug_direction, plug_name, register, unregister};
pub use invoker::{SearchInvoker, StarDispatch, invoke};
pub use keymap::{Binding, Keymap, KeymapError, Resolved};
pub use vstar_pattern::EscapedPattern;
pub use vstar_primitives::{Direction, Mode};
