/// Direction of a selection search.
///
/// Besides the direction flag handed to the search engine, the direction
/// decides how many match repetitions are requested. The cursor sits on the
/// last character of the selection when a search starts, so a reverse search
/// first meets the selection itself and needs one extra repetition to reach
/// the previous occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
	/// Search towards the end of the document (`/`).
	Forward,
	/// Search towards the start of the document (`?`).
	Reverse,
}

impl Direction {
	/// Returns the repeat count dispatched to the search engine.
	#[inline]
	pub fn repeat_count(self) -> usize {
		match self {
			Self::Forward => 1,
			Self::Reverse => 2,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn repeat_counts_are_asymmetric() {
		assert_eq!(Direction::Forward.repeat_count(), 1);
		assert_eq!(Direction::Reverse.repeat_count(), 2);
	}
}
