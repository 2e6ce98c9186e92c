use std::io::Write;

use super::*;

#[test]
fn empty_input_keeps_defaults() {
	let config = StarSearchConfig::parse("").unwrap();
	assert_eq!(config, StarSearchConfig::default());
	assert!(config.enabled);
	assert_eq!(config.keys.forward, "*");
	assert_eq!(config.keys.reverse, "#");
}

#[test]
fn parses_all_fields() {
	let config = StarSearchConfig::parse(
		r#"
		enabled = false
		log-last-search = false

		[keys]
		forward = "gs"
		reverse = "gS"
		"#,
	)
	.unwrap();
	assert!(!config.enabled);
	assert!(!config.log_last_search);
	assert_eq!(config.keys.forward, "gs");
	assert_eq!(config.keys.reverse, "gS");
}

#[test]
fn partial_keys_keep_other_default() {
	let config = StarSearchConfig::parse("[keys]\nforward = \"<leader>*\"\n").unwrap();
	assert_eq!(config.keys.forward, "<leader>*");
	assert_eq!(config.keys.reverse, "#");
}

#[test]
fn unknown_fields_are_rejected() {
	let err = StarSearchConfig::parse("hlsearch = true").unwrap_err();
	assert!(matches!(err, ConfigError::Toml(_)), "got {err:?}");
}

#[test]
fn empty_and_duplicate_triggers_are_rejected() {
	let err = StarSearchConfig::parse("[keys]\nreverse = \"\"").unwrap_err();
	assert!(matches!(err, ConfigError::EmptyKey("reverse")), "got {err:?}");

	let err = StarSearchConfig::parse("[keys]\nreverse = \"*\"").unwrap_err();
	assert!(matches!(err, ConfigError::DuplicateKey(ref k) if k == "*"), "got {err:?}");
}

#[test]
fn later_layers_override_earlier() {
	let mut config = StarSearchConfig::default();
	config.apply(ConfigLayer::parse("enabled = false\n[keys]\nforward = \"a\"").unwrap()).unwrap();
	config.apply(ConfigLayer::parse("enabled = true").unwrap()).unwrap();
	assert!(config.enabled);
	assert_eq!(config.keys.forward, "a");
}

#[test]
fn failed_layer_leaves_config_untouched() {
	let mut config = StarSearchConfig::default();
	let layer = ConfigLayer::parse("enabled = false\n[keys]\nforward = \"#\"").unwrap();
	assert!(config.apply(layer).is_err());
	assert_eq!(config, StarSearchConfig::default());
}

#[test]
fn load_reads_file() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	writeln!(file, "log-last-search = false").unwrap();
	let config = StarSearchConfig::load(file.path()).unwrap();
	assert!(!config.log_last_search);
}

#[test]
fn load_reports_missing_file() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("missing.toml");
	let err = StarSearchConfig::load(&path).unwrap_err();
	match err {
		ConfigError::Io { path: p, .. } => assert_eq!(p, path),
		other => panic!("expected Io error, got {other:?}"),
	}
}

#[test]
fn plug_names_cannot_be_triggers() {
	let err = StarSearchConfig::parse("[keys]\nforward = \"<Plug>VisualStarSearchReversed\"").unwrap_err();
	assert!(
		matches!(err, ConfigError::ReservedKey(ref k) if k == "<Plug>VisualStarSearchReversed"),
		"got {err:?}"
	);
}
