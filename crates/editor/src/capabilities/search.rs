use vstar_primitives::Direction;
use vstar_star::SearchAccess;

use crate::capabilities::provider::EditorCaps;
use crate::error::SearchError;

impl SearchAccess for EditorCaps<'_> {
	type Error = SearchError;

	fn search(&mut self, pattern: &str, count: usize, direction: Direction, move_cursor: bool) -> Result<(), SearchError> {
		let ed = &mut *self.ed;
		ed.search
			.search(&mut ed.buffer, pattern, count, direction, move_cursor, ed.options.hlsearch)
			.map(|_| ())
	}

	fn last_search(&self) -> Option<&str> {
		self.ed.search.last_pattern()
	}
}
