//! Star search capabilities implemented for [`Editor`] through [`EditorCaps`].
//!
//! [`Editor`]: crate::Editor

mod mode;
pub mod provider;
mod search;
mod selection;

pub use provider::EditorCaps;
