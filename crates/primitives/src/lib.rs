//! Core types shared by the star search crates: directions, modes and ranges.

/// Search direction and its dispatch parameters.
pub mod direction;
/// Editor mode definitions.
pub mod mode;
/// Text range types measured in characters.
pub mod range;

pub use direction::Direction;
pub use mode::Mode;
pub use range::{CharIdx, Range};
pub use ropey::{Rope, RopeSlice};
