use std::path::{Path, PathBuf};

use milsym_layers::ResolverConfig;
use milsym_primitives::SymbolSet;
use milsym_tables::{DataPaths, LEGACY_FILE, MODIFIERS_FILE};
use pretty_assertions::assert_eq;

use super::*;

const FULL: &str = r#"
images "/opt/2525d/svg"
data "/opt/2525d/data" {
	entities "entities-2017.csv"
	modifiers "All_Modifiers.csv"
}
folders {
	"Land Unit" "Land Units"
	"60" "Cyber"
}
frames {
	"cyberspace" "Land Unit"
}
"#;

#[test]
fn parse_full_config() {
	let config = Config::parse(FULL).unwrap();
	assert_eq!(config.images, Some(PathBuf::from("/opt/2525d/svg")));
	assert_eq!(config.data, Some(PathBuf::from("/opt/2525d/data")));
	assert_eq!(config.files.entities.as_deref(), Some("entities-2017.csv"));
	assert_eq!(config.files.legacy, None);
	assert_eq!(config.folders[&SymbolSet::LandUnit], "Land Units");
	assert_eq!(config.folders[&SymbolSet::Cyberspace], "Cyber");
	assert_eq!(config.frames[&SymbolSet::Cyberspace], SymbolSet::LandUnit);
	assert!(config.warnings.is_empty());
}

#[test]
fn data_paths_apply_file_overrides() {
	let config = Config::parse(FULL).unwrap();
	let dir = Path::new("/opt/2525d/data");
	assert_eq!(
		config.data_paths(),
		DataPaths {
			entities: dir.join("entities-2017.csv"),
			modifiers: dir.join(MODIFIERS_FILE),
			legacy: dir.join(LEGACY_FILE),
		}
	);
}

#[test]
fn resolver_config_layers_overrides_on_defaults() {
	let resolver = Config::parse(FULL).unwrap().resolver_config();
	let defaults = ResolverConfig::new("/opt/2525d/svg");

	assert_eq!(resolver.image_root, PathBuf::from("/opt/2525d/svg"));
	assert_eq!(resolver.folder_name(SymbolSet::LandUnit), "Land Units");
	assert_eq!(
		resolver.folder_name(SymbolSet::Air),
		defaults.folder_name(SymbolSet::Air)
	);
	assert_eq!(
		resolver.frame_category(SymbolSet::Cyberspace),
		Some(SymbolSet::LandUnit)
	);
	assert_eq!(
		resolver.frame_category(SymbolSet::SeaSurface),
		defaults.frame_category(SymbolSet::SeaSurface)
	);
}

#[test]
fn empty_config_uses_defaults() {
	let config = Config::parse("").unwrap();
	assert_eq!(config, Config::default());
	assert_eq!(config.image_root(), paths::default_image_root());
	assert_eq!(config.data_paths(), DataPaths::in_dir(paths::default_data_dir()));
}

#[test]
fn unknown_entries_warn() {
	let config = Config::parse(
		r#"
		theme "dark"
		data { cache "yes" }
		folders { "Land Units" "Land" }
		frames { "Air" "Round" }
		"#,
	)
	.unwrap();

	assert_eq!(
		config.warnings,
		[
			ConfigWarning::UnknownNode {
				name: "theme".into(),
				found_in: "top level",
			},
			ConfigWarning::UnknownNode {
				name: "cache".into(),
				found_in: "data block",
			},
			ConfigWarning::UnknownSymbolSet {
				section: "folders",
				name: "Land Units".into(),
			},
			ConfigWarning::UnknownSymbolSet {
				section: "frames",
				name: "Round".into(),
			},
		]
	);
	assert!(config.folders.is_empty());
	assert!(config.frames.is_empty());
}

#[test]
fn warning_display() {
	let warning = ConfigWarning::UnknownSymbolSet {
		section: "folders",
		name: "Land Units".into(),
	};
	assert_eq!(
		warning.to_string(),
		"'Land Units' in folders block is not a symbol set and will be ignored"
	);
}

#[test]
fn missing_value_is_an_error() {
	assert!(matches!(
		Config::parse("images"),
		Err(ConfigError::MissingField(field)) if field == "images"
	));
	assert!(matches!(
		Config::parse("folders { \"Air\" }"),
		Err(ConfigError::MissingField(field)) if field == "Air"
	));
}

#[test]
fn invalid_kdl_is_an_error() {
	assert!(matches!(
		Config::parse("images \"unterminated"),
		Err(ConfigError::Kdl(_))
	));
}

#[test]
fn merge_overrides() {
	let mut base = Config::parse(FULL).unwrap();
	let overlay = Config::parse(
		r#"
		images "/srv/svg"
		data { legacy "legacy.csv" }
		folders { "Land Unit" "Ground" }
		"#,
	)
	.unwrap();
	base.merge(overlay);

	assert_eq!(base.images, Some(PathBuf::from("/srv/svg")));
	assert_eq!(base.data, Some(PathBuf::from("/opt/2525d/data")));
	assert_eq!(base.files.entities.as_deref(), Some("entities-2017.csv"));
	assert_eq!(base.files.legacy.as_deref(), Some("legacy.csv"));
	assert_eq!(base.folders[&SymbolSet::LandUnit], "Ground");
	assert_eq!(base.folders[&SymbolSet::Cyberspace], "Cyber");
}

#[test]
fn load_resolves_relative_paths() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("milsym.kdl");
	std::fs::write(&path, "images \"svg\"\ndata \"/abs/data\"\n").unwrap();

	let config = Config::load(&path).unwrap();
	assert_eq!(config.images, Some(dir.path().join("svg")));
	assert_eq!(config.data, Some(PathBuf::from("/abs/data")));
}

#[test]
fn load_missing_file() {
	let dir = tempfile::tempdir().unwrap();
	let err = Config::load(dir.path().join("missing.kdl")).unwrap_err();
	assert!(matches!(err, ConfigError::Io { .. }));
}
