/// Editor input mode.
///
/// Only the two modes a selection search moves between are modelled here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
	/// Navigation mode. No selection is active.
	#[default]
	Normal,
	/// Selection mode. A contiguous span of text is the subject of the next command.
	Visual,
}

impl Mode {
	/// Returns true if a selection is active in this mode.
	pub fn has_selection(self) -> bool {
		matches!(self, Self::Visual)
	}
}
