//! Verbatim search patterns built from selected text.
//!
//! * [`build`] turns a selection into an [`EscapedPattern`] for one [`Direction`]
//! * [`decode_verbatim`] recovers the literal text a `\V` pattern matches

pub mod error;
pub mod escape;
pub mod verbatim;

pub use error::{PatternError, Result};
pub use escape::{EscapeRule, EscapedPattern, VERBATIM_PREFIX, build, escape_rules};
pub use verbatim::decode_verbatim;
pub use vstar_primitives::Direction;
