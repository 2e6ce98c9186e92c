use vstar_star::SelectionAccess;

use crate::capabilities::provider::EditorCaps;

impl SelectionAccess for EditorCaps<'_> {
	fn selected_text(&self) -> Option<String> {
		self.ed.buffer.selected_text()
	}
}
