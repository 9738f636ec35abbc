//! Configuration for symbol resolution.
//!
//! Configuration is written in KDL (v2) and tells the resolver where the
//! image assets and reference tables live, plus any overrides of the symbol
//! set folder and frame tables:
//!
//! ```kdl
//! // Root of Frames/, Appendices/ and Echelon/
//! images "/opt/2525d/svg"
//!
//! // Reference table directory, with optional file name overrides
//! data "/opt/2525d/data" {
//!     entities "All_Entities.csv"
//!     modifiers "All_Modifiers.csv"
//!     legacy "LegacyMappingTable.csv"
//! }
//!
//! // Appendix folder per symbol set
//! folders {
//!     "Land Unit" "Land"
//! }
//!
//! // Frame shape borrowed by a symbol set
//! frames {
//!     "Cyberspace" "Unknown"
//! }
//! ```
//!
//! Symbol sets are named by display name or two digit code. Unknown names
//! and unknown nodes are collected in [`Config::warnings`] instead of failing
//! the parse. Anything left out falls back to the defaults in [`paths`].

pub mod error;
pub mod kdl_util;
pub mod paths;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub use error::{ConfigError, ConfigWarning, Result};
use kdl::{KdlDocument, KdlNode};
use kdl_util::{optional_string, string_arg, symbol_set_named};
use milsym_layers::ResolverConfig;
use milsym_primitives::SymbolSet;
use milsym_tables::{DataPaths, ENTITIES_FILE, LEGACY_FILE, MODIFIERS_FILE};

/// Parsed configuration from a KDL file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
	/// Image root override.
	pub images: Option<PathBuf>,
	/// Data directory override.
	pub data: Option<PathBuf>,
	/// Reference table file name overrides.
	pub files: TableFiles,
	/// Appendix folder overrides.
	pub folders: HashMap<SymbolSet, String>,
	/// Frame shape overrides.
	pub frames: HashMap<SymbolSet, SymbolSet>,
	/// Non-fatal warnings encountered during parsing.
	pub warnings: Vec<ConfigWarning>,
}

/// Reference table file names, relative to the data directory unless
/// absolute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableFiles {
	pub entities: Option<String>,
	pub modifiers: Option<String>,
	pub legacy: Option<String>,
}

impl Config {
	/// Parse a KDL string into a [`Config`].
	///
	/// Non-fatal warnings are collected in `Config::warnings` rather than
	/// causing parse failure.
	pub fn parse(input: &str) -> Result<Self> {
		let doc: KdlDocument = input.parse()?;
		let mut config = Config::default();

		for node in doc.nodes() {
			match node.name().value() {
				"images" => config.images = Some(PathBuf::from(string_arg(node)?)),
				"data" => config.parse_data_node(node)?,
				"folders" => config.parse_folders_node(node)?,
				"frames" => config.parse_frames_node(node)?,
				name => config.warnings.push(ConfigWarning::UnknownNode {
					name: name.to_string(),
					found_in: "top level",
				}),
			}
		}

		for warning in &config.warnings {
			tracing::warn!(%warning, "configuration warning");
		}
		Ok(config)
	}

	/// Load configuration from a file.
	///
	/// Relative `images` and `data` paths are taken relative to the file's
	/// directory.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		let mut config = Self::parse(&content)?;

		if let Some(base) = path.parent() {
			for dir in [&mut config.images, &mut config.data].into_iter().flatten() {
				if dir.is_relative() {
					*dir = base.join(&*dir);
				}
			}
		}
		tracing::debug!(path = %path.display(), "loaded configuration");
		Ok(config)
	}

	/// Merge another config into this one.
	///
	/// Values from `other` override values in `self`.
	pub fn merge(&mut self, other: Config) {
		if other.images.is_some() {
			self.images = other.images;
		}
		if other.data.is_some() {
			self.data = other.data;
		}
		if other.files.entities.is_some() {
			self.files.entities = other.files.entities;
		}
		if other.files.modifiers.is_some() {
			self.files.modifiers = other.files.modifiers;
		}
		if other.files.legacy.is_some() {
			self.files.legacy = other.files.legacy;
		}
		self.folders.extend(other.folders);
		self.frames.extend(other.frames);
		self.warnings.extend(other.warnings);
	}

	/// Configured image root, or the default.
	pub fn image_root(&self) -> PathBuf {
		self.images.clone().unwrap_or_else(paths::default_image_root)
	}

	/// Configured data directory, or the default.
	pub fn data_dir(&self) -> PathBuf {
		self.data.clone().unwrap_or_else(paths::default_data_dir)
	}

	/// Locations of the three reference tables.
	pub fn data_paths(&self) -> DataPaths {
		let dir = self.data_dir();
		let file = |name: &Option<String>, default: &str| {
			dir.join(name.as_deref().unwrap_or(default))
		};
		DataPaths {
			entities: file(&self.files.entities, ENTITIES_FILE),
			modifiers: file(&self.files.modifiers, MODIFIERS_FILE),
			legacy: file(&self.files.legacy, LEGACY_FILE),
		}
	}

	/// Resolver configuration: default tables with this config's overrides
	/// applied.
	pub fn resolver_config(&self) -> ResolverConfig {
		let mut resolver = ResolverConfig::new(self.image_root());
		resolver
			.folder_names
			.extend(self.folders.iter().map(|(set, folder)| (*set, folder.clone())));
		resolver.frame_categories.extend(&self.frames);
		resolver
	}

	fn parse_data_node(&mut self, node: &KdlNode) -> Result<()> {
		if let Some(dir) = node.get(0).and_then(|v| v.as_string()) {
			self.data = Some(PathBuf::from(dir));
		}
		let Some(children) = node.children() else {
			return Ok(());
		};

		let files = &mut self.files;
		if let Some(name) = optional_string(children, "entities")? {
			files.entities = Some(name);
		}
		if let Some(name) = optional_string(children, "modifiers")? {
			files.modifiers = Some(name);
		}
		if let Some(name) = optional_string(children, "legacy")? {
			files.legacy = Some(name);
		}

		for child in children.nodes() {
			let name = child.name().value();
			if !matches!(name, "entities" | "modifiers" | "legacy") {
				self.warnings.push(ConfigWarning::UnknownNode {
					name: name.to_string(),
					found_in: "data block",
				});
			}
		}
		Ok(())
	}

	fn parse_folders_node(&mut self, node: &KdlNode) -> Result<()> {
		for (set, child) in self.symbol_set_children(node, "folders") {
			self.folders.insert(set, string_arg(child)?.to_string());
		}
		Ok(())
	}

	fn parse_frames_node(&mut self, node: &KdlNode) -> Result<()> {
		for (set, child) in self.symbol_set_children(node, "frames") {
			let frame_name = string_arg(child)?;
			match symbol_set_named(frame_name) {
				Some(frame) => {
					self.frames.insert(set, frame);
				}
				None => self.warnings.push(ConfigWarning::UnknownSymbolSet {
					section: "frames",
					name: frame_name.to_string(),
				}),
			}
		}
		Ok(())
	}

	// Children whose names are symbol sets; others become warnings.
	fn symbol_set_children<'a>(
		&mut self,
		node: &'a KdlNode,
		section: &'static str,
	) -> Vec<(SymbolSet, &'a KdlNode)> {
		let Some(children) = node.children() else {
			return Vec::new();
		};
		let mut found = Vec::new();
		for child in children.nodes() {
			let name = child.name().value();
			match symbol_set_named(name) {
				Some(set) => found.push((set, child)),
				None => self.warnings.push(ConfigWarning::UnknownSymbolSet {
					section,
					name: name.to_string(),
				}),
			}
		}
		found
	}
}

#[cfg(test)]
mod tests;
