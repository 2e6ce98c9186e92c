//! End-to-end selection searches against the reference editor.

mod support;

use pretty_assertions::assert_eq;
use support::{TRIGGERS, editor, render_highlights, select_and_search};
use vstar_editor::{EditorError, KeyResult, SearchError};
use vstar_primitives::{Direction, Mode};
use vstar_star::{PLUG_FORWARD, PLUG_REVERSE, StarDispatch};

const USER_NAME: &str = "user.name = \"Jane Doe\"\nprintln(\"user name set to: ${user.name}\")";

#[test]
fn dots_are_matched_literally() {
	for trigger in TRIGGERS {
		let mut ed = editor(USER_NAME);
		select_and_search(&mut ed, 0, 8, trigger);

		assert_eq!(ed.last_search(), Some("\\Vuser.name"), "trigger {trigger}");
		assert_eq!(ed.highlights().len(), 2, "trigger {trigger}");
		assert_eq!(
			render_highlights(&ed),
			"«user.name» = \"Jane Doe\"\nprintln(\"user name set to: ${«user.name»}\")"
		);
		assert_eq!(ed.cursor(), 52, "trigger {trigger}");
		assert_eq!(ed.mode(), Mode::Normal);
	}
}

#[test]
fn forward_escapes_slash_reverse_does_not() {
	let text = "/testing\n/testing\n#testing\n";

	let mut ed = editor(text);
	select_and_search(&mut ed, 0, 7, "*");
	assert_eq!(ed.last_search(), Some("\\V\\/testing"));
	assert_eq!(render_highlights(&ed), "«/testing»\n«/testing»\n#testing\n");
	assert_eq!(ed.cursor(), 9);

	let mut ed = editor(text);
	select_and_search(&mut ed, 0, 7, "#");
	assert_eq!(ed.last_search(), Some("\\V/testing"));
	assert_eq!(ed.highlights().len(), 2);
	assert_eq!(ed.cursor(), 9);
}

#[test]
fn question_mark_in_reverse_search() {
	let mut ed = editor("?testing\n?testing\n?testing");
	select_and_search(&mut ed, 0, 7, "#");

	assert_eq!(ed.last_search(), Some("\\V?testing"));
	assert_eq!(ed.highlights().len(), 3);
	assert_eq!(ed.cursor(), 18);
}

#[test]
fn selection_spanning_lines() {
	for trigger in TRIGGERS {
		let mut ed = editor("test\ning\n\ntest\ning\n");
		select_and_search(&mut ed, 0, 7, trigger);

		assert_eq!(ed.last_search(), Some("\\Vtest\\ning"));
		assert_eq!(render_highlights(&ed), "«test\ning»\n\n«test\ning»\n");
		assert_eq!(ed.cursor(), 10, "trigger {trigger}");
	}
}

#[test]
fn metacharacters_are_matched_literally() {
	let cases = ["^test^testing", "*testing*", "test~ing", "[testing]", "a[bc]d", "g~re", "'don''t'", "\"amy's quote\""];
	for case in cases {
		for trigger in TRIGGERS {
			let text = format!("{case}\n{case}\n");
			let len = case.chars().count();
			let mut ed = editor(&text);
			select_and_search(&mut ed, 0, len - 1, trigger);

			assert_eq!(ed.last_search(), Some(format!("\\V{case}").as_str()));
			assert_eq!(ed.highlights().len(), 2, "case {case:?} via {trigger}");
			assert_eq!(ed.cursor(), len + 1, "case {case:?} via {trigger}");
		}
	}
}

#[test]
fn trailing_dot_does_not_match_any_character() {
	let mut ed = editor("hello.\nhelloo\nhello.\n");
	select_and_search(&mut ed, 0, 5, "*");

	assert_eq!(render_highlights(&ed), "«hello.»\nhelloo\n«hello.»\n");
	assert_eq!(ed.cursor(), 14);
}

#[test]
fn url_with_slashes_and_question_mark() {
	let url = "[http://vimcasts.org/search?q=visual-star]";
	let text = format!("Visual star: {url}[q]\n[q]: {url}\n");
	let start = "Visual star: ".chars().count();
	let end = start + url.chars().count() - 1;

	let mut ed = editor(&text);
	select_and_search(&mut ed, start, end, "*");
	assert_eq!(
		ed.last_search(),
		Some("\\V[http:\\/\\/vimcasts.org\\/search?q=visual-star]")
	);
	assert_eq!(ed.highlights().len(), 2);

	let mut ed = editor(&text);
	select_and_search(&mut ed, start, end, "#");
	assert_eq!(ed.last_search(), Some(format!("\\V{url}").as_str()));
	assert_eq!(ed.highlights().len(), 2);
}

#[test]
fn single_occurrence_wraps_onto_itself() {
	for trigger in TRIGGERS {
		let mut ed = editor("alpha beta");
		select_and_search(&mut ed, 6, 9, trigger);
		assert_eq!(ed.cursor(), 6, "trigger {trigger}");
		assert_eq!(ed.highlights().len(), 1);
	}
}

#[test]
fn dispatch_reports_count_and_direction() {
	let mut ed = editor("line1\nline2 line1\nline2");
	ed.select(0, 10);
	assert_eq!(
		ed.handle_key("*").unwrap(),
		KeyResult::Dispatched(StarDispatch {
			pattern: vstar_pattern::build("line1\nline2", Direction::Forward),
			count: 1,
			direction: Direction::Forward,
		})
	);
	assert_eq!(ed.last_search(), Some("\\Vline1\\nline2"));

	ed.select(0, 10);
	match ed.handle_key("#").unwrap() {
		KeyResult::Dispatched(dispatch) => {
			assert_eq!(dispatch.count, 2);
			assert_eq!(dispatch.direction, Direction::Reverse);
		}
		other => panic!("expected dispatch, got {other:?}"),
	}
}

#[test]
fn no_selection_leaves_last_search_alone() {
	let mut ed = editor("foo foo");
	select_and_search(&mut ed, 0, 2, "*");
	let cursor = ed.cursor();

	for action in [PLUG_FORWARD, PLUG_REVERSE] {
		assert_eq!(ed.execute_action(action).unwrap(), KeyResult::NoSelection);
	}
	assert_eq!(ed.last_search(), Some("\\Vfoo"));
	assert_eq!(ed.cursor(), cursor);
	assert_eq!(ed.mode(), Mode::Normal);
}

#[test]
fn without_hlsearch_cursor_still_moves() {
	let mut ed = editor("foo bar foo");
	ed.set_hlsearch(false);
	select_and_search(&mut ed, 0, 2, "*");

	assert!(ed.highlights().is_empty());
	assert_eq!(ed.cursor(), 8);
	assert_eq!(render_highlights(&ed), "foo bar foo");
}

#[test]
fn engine_failure_reaches_caller() {
	let mut ed = editor("");
	ed.select(0, 0);
	let err = ed.handle_key("*").unwrap_err();
	assert!(matches!(err, EditorError::Search(SearchError::EmptyPattern)), "got {err:?}");
	assert_eq!(ed.mode(), Mode::Visual);
}

#[test]
fn rebound_trigger_from_config() {
	let config = vstar_star::StarSearchConfig::parse("[keys]\nforward = \"gs\"").unwrap();
	let mut ed = vstar_editor::Editor::with_config("foo foo", config);
	ed.enable_extension(vstar_star::EXTENSION_NAME).unwrap();

	ed.select(0, 2);
	assert_eq!(ed.handle_key("*").unwrap(), KeyResult::Unhandled);
	select_and_search(&mut ed, 0, 2, "gs");
	assert_eq!(ed.cursor(), 4);
}

#[test]
fn searches_with_tracing_enabled() {
	let _ = tracing_subscriber::fmt()
		.with_max_level(tracing::Level::TRACE)
		.with_test_writer()
		.try_init();

	let mut ed = editor(USER_NAME);
	select_and_search(&mut ed, 0, 8, "#");
	assert_eq!(ed.last_search(), Some("\\Vuser.name"));
}

#[test]
fn overlapping_occurrences() {
	let mut ed = editor("aaaa");
	select_and_search(&mut ed, 2, 3, "#");
	assert_eq!(ed.cursor(), 1);
	assert_eq!(ed.highlights().len(), 3);

	let mut ed = editor("aaaa");
	select_and_search(&mut ed, 0, 1, "*");
	assert_eq!(ed.cursor(), 2);
}

#[test]
fn invalid_trigger_leaves_no_bindings() {
	let mut config = vstar_star::StarSearchConfig::default();
	config.keys.reverse = String::new();
	let mut ed = vstar_editor::Editor::with_config("foo foo", config);

	let err = ed.enable_extension(vstar_star::EXTENSION_NAME).unwrap_err();
	assert!(matches!(err, EditorError::Keymap(vstar_star::KeymapError::EmptyKey { .. })), "got {err:?}");
	assert!(!ed.extension_enabled());

	ed.select(0, 2);
	assert_eq!(ed.handle_key("*").unwrap(), KeyResult::Unhandled);
	assert_eq!(ed.mode(), Mode::Visual);
}
