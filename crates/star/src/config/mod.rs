//! Configuration for the star search extension.
//!
//! Configuration is written in TOML. Every field is optional; unset fields
//! keep their defaults, and layers applied later override earlier ones:
//!
//! ```toml
//! enabled = true
//! log-last-search = true
//!
//! [keys]
//! forward = "*"
//! reverse = "#"
//! ```

pub mod error;

use std::path::Path;

pub use error::{ConfigError, Result};
use serde::Deserialize;

use crate::extension::PLUG_PREFIX;

/// Resolved star search configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarSearchConfig {
	/// Whether the extension registers its bindings.
	pub enabled: bool,
	/// Whether each dispatch emits the engine's last search as a debug event.
	pub log_last_search: bool,
	/// Selection-mode triggers.
	pub keys: KeysConfig,
}

/// Selection-mode trigger keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeysConfig {
	/// Trigger for the forward search (`*` by default).
	pub forward: String,
	/// Trigger for the reverse search (`#` by default).
	pub reverse: String,
}

impl Default for StarSearchConfig {
	fn default() -> Self {
		Self {
			enabled: true,
			log_last_search: true,
			keys: KeysConfig::default(),
		}
	}
}

impl Default for KeysConfig {
	fn default() -> Self {
		Self {
			forward: "*".to_string(),
			reverse: "#".to_string(),
		}
	}
}

/// One parsed configuration source. Unset fields leave the target untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ConfigLayer {
	/// Overrides [`StarSearchConfig::enabled`].
	pub enabled: Option<bool>,
	/// Overrides [`StarSearchConfig::log_last_search`].
	pub log_last_search: Option<bool>,
	/// Trigger overrides.
	pub keys: Option<KeysLayer>,
}

/// Trigger overrides within a [`ConfigLayer`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeysLayer {
	/// Overrides [`KeysConfig::forward`].
	pub forward: Option<String>,
	/// Overrides [`KeysConfig::reverse`].
	pub reverse: Option<String>,
}

impl ConfigLayer {
	/// Parses a TOML string into a layer.
	pub fn parse(input: &str) -> Result<Self> {
		Ok(toml::from_str(input)?)
	}

	/// Reads and parses a layer from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::parse(&content)
	}
}

impl StarSearchConfig {
	/// Parses a TOML string over the defaults.
	pub fn parse(input: &str) -> Result<Self> {
		let mut config = Self::default();
		config.apply(ConfigLayer::parse(input)?)?;
		Ok(config)
	}

	/// Loads configuration from a file over the defaults.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let mut config = Self::default();
		config.apply(ConfigLayer::load(path)?)?;
		Ok(config)
	}

	/// Overrides fields set in `layer`, then validates the result.
	///
	/// On error `self` keeps its previous values.
	pub fn apply(&mut self, layer: ConfigLayer) -> Result<()> {
		let mut next = self.clone();
		if let Some(enabled) = layer.enabled {
			next.enabled = enabled;
		}
		if let Some(log) = layer.log_last_search {
			next.log_last_search = log;
		}
		if let Some(keys) = layer.keys {
			if let Some(forward) = keys.forward {
				next.keys.forward = forward;
			}
			if let Some(reverse) = keys.reverse {
				next.keys.reverse = reverse;
			}
		}
		next.validate()?;
		*self = next;
		Ok(())
	}

	/// Checks the trigger keys.
	pub fn validate(&self) -> Result<()> {
		if self.keys.forward.is_empty() {
			return Err(ConfigError::EmptyKey("forward"));
		}
		if self.keys.reverse.is_empty() {
			return Err(ConfigError::EmptyKey("reverse"));
		}
		for key in [&self.keys.forward, &self.keys.reverse] {
			if key.starts_with(PLUG_PREFIX) {
				return Err(ConfigError::ReservedKey(key.clone()));
			}
		}
		if self.keys.forward == self.keys.reverse {
			return Err(ConfigError::DuplicateKey(self.keys.forward.clone()));
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests;
