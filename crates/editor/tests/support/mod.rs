//! Shared fixtures for reference editor integration tests.

use vstar_editor::Editor;
use vstar_star::EXTENSION_NAME;

/// Both default triggers; most scenarios must hold for either direction.
pub const TRIGGERS: [&str; 2] = ["*", "#"];

/// Creates an editor over `text` with the star search enabled.
pub fn editor(text: &str) -> Editor {
	let mut editor = Editor::new(text);
	assert!(editor.enable_extension(EXTENSION_NAME).unwrap());
	editor
}

/// Selects `anchor..=head` and presses `trigger`.
pub fn select_and_search(editor: &mut Editor, anchor: usize, head: usize, trigger: &str) {
	editor.select(anchor, head);
	editor
		.handle_key(trigger)
		.unwrap_or_else(|e| panic!("search via {trigger:?} failed: {e}"));
}

/// Renders the buffer with every highlighted match wrapped in `«` and `»`.
pub fn render_highlights(editor: &Editor) -> String {
	let text: Vec<char> = editor.buffer().text().chars().collect();
	let highlights = editor.highlights();
	let mut out = String::with_capacity(text.len() + highlights.len() * 2);
	for idx in 0..=text.len() {
		for _ in highlights.iter().filter(|r| r.to() == idx) {
			out.push('»');
		}
		for _ in highlights.iter().filter(|r| r.from() == idx) {
			out.push('«');
		}
		if let Some(ch) = text.get(idx) {
			out.push(*ch);
		}
	}
	out
}
