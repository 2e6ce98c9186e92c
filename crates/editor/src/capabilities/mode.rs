use vstar_primitives::Mode;
use vstar_star::ModeAccess;

use crate::capabilities::provider::EditorCaps;

impl ModeAccess for EditorCaps<'_> {
	fn mode(&self) -> Mode {
		self.ed.buffer.mode()
	}

	fn exit_selection_mode(&mut self) {
		self.ed.buffer.enter_normal();
	}
}
