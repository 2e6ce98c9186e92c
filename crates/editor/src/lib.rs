#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Reference editor hosting the visual star search.
//!
//! A single in-memory buffer with a selection-mode cursor model and a
//! verbatim search engine, enough to drive the star search end to end.
//!
//! # Main Types
//!
//! - [`Editor`] - buffer, search state, options and keymap
//! - [`Buffer`] - rope text, selection and mode
//! - [`SearchState`] - last search and match highlights
//! - [`EditorCaps`] - sole implementor of the star search capability traits
//!
//! ```text
//! Editor
//! ├── buffer: Buffer          // text, selection, mode
//! ├── search: SearchState     // last search, highlights
//! ├── options: Options        // hlsearch
//! └── keymap: Keymap          // "*" / "#" -> <Plug> handlers
//! ```

pub mod buffer;
pub mod capabilities;
pub mod editor;
pub mod error;
pub mod options;
pub mod search;

pub use buffer::Buffer;
pub use capabilities::EditorCaps;
pub use editor::{Editor, KeyResult};
pub use error::{EditorError, SearchError};
pub use options::Options;
pub use search::SearchState;
