//! KDL parsing helpers shared by the configuration sections.

use kdl::{KdlDocument, KdlNode};
use milsym_primitives::SymbolSet;

use crate::error::{ConfigError, Result};

/// First string argument of a node.
pub fn string_arg(node: &KdlNode) -> Result<&str> {
	node.get(0)
		.and_then(|v| v.as_string())
		.ok_or_else(|| ConfigError::MissingField(node.name().value().to_string()))
}

/// String argument of the named child node, if the node exists.
pub fn optional_string(doc: &KdlDocument, name: &str) -> Result<Option<String>> {
	doc.get(name)
		.map(|node| string_arg(node).map(str::to_string))
		.transpose()
}

/// Looks up a symbol set by display name (any case) or two digit code.
pub fn symbol_set_named(name: &str) -> Option<SymbolSet> {
	let name = name.trim();
	if name.bytes().all(|b| b.is_ascii_digit()) {
		return SymbolSet::from_code(name).ok();
	}
	SymbolSet::all().find(|set| set.display_name().eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case("Land Unit", Some(SymbolSet::LandUnit))]
	#[case("land unit", Some(SymbolSet::LandUnit))]
	#[case(" Cyberspace ", Some(SymbolSet::Cyberspace))]
	#[case("10", Some(SymbolSet::LandUnit))]
	#[case("1", Some(SymbolSet::Air))]
	#[case("99", None)]
	#[case("LandUnit", None)]
	fn test_symbol_set_named(#[case] name: &str, #[case] expected: Option<SymbolSet>) {
		assert_eq!(symbol_set_named(name), expected);
	}

	#[test]
	fn test_string_arg() {
		let doc: KdlDocument = "images \"/img\"\ndata 3".parse().unwrap();
		assert_eq!(string_arg(doc.get("images").unwrap()).unwrap(), "/img");
		assert!(matches!(
			string_arg(doc.get("data").unwrap()),
			Err(ConfigError::MissingField(field)) if field == "data"
		));
	}
}
