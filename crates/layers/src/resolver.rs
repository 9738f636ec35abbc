use std::path::{Path, PathBuf};

use milsym_primitives::{
	Affiliation, Context, EchelonMobility, HqTfDummy, MilitarySymbol, SymbolIdCode, SymbolSet,
};

use crate::config::ResolverConfig;
use crate::error::{ResolveError, Result};
use crate::names::{
	APPENDICES_DIR, FALLBACK_SUFFIX, FRAMES_DIR, IMAGE_SUFFIX, echelon_icon_name_with_folder,
	main_icon_name, modifier_icon_name, symbol_modifier_icon_name,
};
use crate::oracle::{FsOracle, PathOracle};

/// Turns symbol identities into the ordered list of SVG layers that draw
/// them.
///
/// Layers are listed bottom first: frame, main icon, sector 1 and 2
/// modifiers, then the echelon amplifier. Paths are built from the
/// configuration alone; the oracle is only asked whether the image root and
/// individual assets exist.
#[derive(Debug, Clone)]
pub struct LayerResolver<O = FsOracle> {
	config: ResolverConfig,
	oracle: O,
}

impl LayerResolver {
	/// Creates a resolver that checks assets on the local filesystem.
	pub fn new(config: ResolverConfig) -> Self {
		Self::with_oracle(config, FsOracle)
	}
}

impl<O> LayerResolver<O> {
	/// Creates a resolver with a custom existence check.
	pub fn with_oracle(config: ResolverConfig, oracle: O) -> Self {
		Self { config, oracle }
	}

	pub fn config(&self) -> &ResolverConfig {
		&self.config
	}

	pub fn oracle(&self) -> &O {
		&self.oracle
	}

	fn under_root(&self, relative: &Path) -> PathBuf {
		self.config.image_root.join(relative)
	}

	/// Appendix folder of a symbol set, e.g. `Appendices/Land`.
	///
	/// Unmapped sets get an empty folder segment.
	pub fn icon_folder_name(&self, symbol_set: SymbolSet) -> PathBuf {
		let folder = self.config.folder_name(symbol_set);
		if folder.is_empty() {
			tracing::debug!(%symbol_set, "no appendix folder for symbol set");
		}
		Path::new(APPENDICES_DIR).join(folder)
	}

	/// Main icon path relative to the image root, e.g.
	/// `Appendices/Air/01110000.svg`.
	pub fn main_icon_name_with_folder(&self, id: &SymbolIdCode) -> Option<PathBuf> {
		let name = main_icon_name(id)?;
		let symbol_set = id.symbol_set?;
		Some(
			self.icon_folder_name(symbol_set)
				.join(format!("{name}{IMAGE_SUFFIX}")),
		)
	}

	/// Main icon path under the image root.
	pub fn main_icon_path(&self, id: &SymbolIdCode) -> Option<PathBuf> {
		self.main_icon_name_with_folder(id)
			.map(|relative| self.under_root(&relative))
	}

	/// Modifier icon path relative to the image root, e.g.
	/// `Appendices/Land/mod1/10071.svg`.
	///
	/// `None` for modifier numbers other than 1 or 2.
	pub fn modifier_icon_name_with_folder(
		&self,
		symbol_set: SymbolSet,
		modifier_number: u8,
		code: &str,
	) -> Option<PathBuf> {
		let name = modifier_icon_name(symbol_set, modifier_number, code)?;
		Some(self.modifier_folder(symbol_set, modifier_number).join(name + IMAGE_SUFFIX))
	}

	/// Modifier icon path under the image root.
	pub fn modifier_icon_path(
		&self,
		symbol_set: SymbolSet,
		modifier_number: u8,
		code: &str,
	) -> Option<PathBuf> {
		self.modifier_icon_name_with_folder(symbol_set, modifier_number, code)
			.map(|relative| self.under_root(&relative))
	}

	/// Relative path of one of an identity's sector modifiers, `None` when
	/// that modifier is not set.
	pub fn symbol_modifier_icon_name_with_folder(
		&self,
		id: &SymbolIdCode,
		modifier_number: u8,
	) -> Option<PathBuf> {
		let name = symbol_modifier_icon_name(id, modifier_number)?;
		let symbol_set = id.symbol_set?;
		Some(self.modifier_folder(symbol_set, modifier_number).join(name + IMAGE_SUFFIX))
	}

	/// Full path of one of an identity's sector modifiers.
	pub fn symbol_modifier_icon_path(&self, id: &SymbolIdCode, modifier_number: u8) -> Option<PathBuf> {
		self.symbol_modifier_icon_name_with_folder(id, modifier_number)
			.map(|relative| self.under_root(&relative))
	}

	fn modifier_folder(&self, symbol_set: SymbolSet, modifier_number: u8) -> PathBuf {
		self.icon_folder_name(symbol_set)
			.join(format!("mod{modifier_number}"))
	}

	/// Echelon or mobility amplifier path under the image root.
	pub fn echelon_icon_path(
		&self,
		affiliation: Affiliation,
		symbol_set: Option<SymbolSet>,
		hq_tf_dummy: HqTfDummy,
		echelon_mobility: EchelonMobility,
	) -> Option<PathBuf> {
		echelon_icon_name_with_folder(affiliation, symbol_set, hq_tf_dummy, echelon_mobility)
			.map(|relative| self.under_root(&relative))
	}

	/// Frame path relative to the image root, e.g. `Frames/0310.svg`.
	///
	/// The symbol set is first mapped to the frame shape it borrows. Exercise
	/// and simulation frames are not distinguished yet, so `context` does not
	/// change the result.
	pub fn frame_icon_name_with_folder(
		&self,
		_context: Context,
		affiliation: Affiliation,
		symbol_set: SymbolSet,
	) -> PathBuf {
		let frame = match self.config.frame_category(symbol_set) {
			Some(frame) => frame.code(),
			None => {
				tracing::debug!(%symbol_set, "no frame category for symbol set");
				""
			}
		};
		Path::new(FRAMES_DIR).join(format!("{}{frame}{IMAGE_SUFFIX}", affiliation.code()))
	}

	/// Frame path under the image root.
	pub fn frame_icon_path(
		&self,
		context: Context,
		affiliation: Affiliation,
		symbol_set: SymbolSet,
	) -> PathBuf {
		self.under_root(&self.frame_icon_name_with_folder(context, affiliation, symbol_set))
	}
}

impl<O: PathOracle> LayerResolver<O> {
	/// Resolves an identity to its ordered graphic layers.
	///
	/// Fails when the image root is missing or the identity is not valid.
	/// Assets missing under an existing root are logged and kept in the list
	/// so the caller sees what would have been drawn.
	pub fn graphic_layers(&self, id: &SymbolIdCode) -> Result<Vec<PathBuf>> {
		let root = &self.config.image_root;
		if !self.oracle.exists(root) {
			tracing::warn!(root = %root.display(), "image root does not exist");
			return Err(ResolveError::ImageRootMissing(root.clone()));
		}

		let symbol_set = match id.symbol_set {
			Some(symbol_set) if id.is_valid() => symbol_set,
			_ => {
				return Err(ResolveError::InvalidSymbol {
					symbol_set: id.symbol_set,
					entity_code: id.entity_code.clone(),
				});
			}
		};

		let mut layers = Vec::new();

		if symbol_set.has_frame() {
			layers.push(self.frame_icon_path(id.context, id.affiliation, symbol_set));
		}

		if let Some(main_icon) = self.main_icon_layer(id) {
			layers.push(main_icon);
		}

		let skip_amplifiers = id.shape.is_multipoint() || !symbol_set.has_frame();
		if !skip_amplifiers {
			layers.extend(self.symbol_modifier_icon_path(id, 1));
			layers.extend(self.symbol_modifier_icon_path(id, 2));
			layers.extend(self.echelon_icon_path(
				id.affiliation,
				id.symbol_set,
				id.hq_tf_dummy,
				id.echelon_mobility,
			));
		}

		for layer in &layers {
			if !self.oracle.exists(layer) {
				tracing::warn!(path = %layer.display(), "graphic layer not found");
			}
		}

		tracing::debug!(symbol = %id.name, count = layers.len(), "resolved graphic layers");
		if layers.is_empty() {
			return Err(ResolveError::NoLayers);
		}
		Ok(layers)
	}

	/// Replaces a symbol's graphic layers with the resolved list.
	///
	/// On failure the symbol keeps its previous layers and `false` is
	/// returned.
	pub fn set_graphic_layers(&self, symbol: &mut MilitarySymbol) -> bool {
		match self.graphic_layers(&symbol.id) {
			Ok(layers) => {
				symbol.replace_graphic_layers(layers);
				true
			}
			Err(error) => {
				tracing::warn!(%error, symbol = symbol.name(), "could not set graphic layers");
				false
			}
		}
	}

	// Some main icons only ship as numbered parts; the `_0` part stands in
	// when the canonical file is missing.
	fn main_icon_layer(&self, id: &SymbolIdCode) -> Option<PathBuf> {
		let name = main_icon_name(id)?;
		let folder = self.under_root(&self.icon_folder_name(id.symbol_set?));

		let canonical = folder.join(format!("{name}{IMAGE_SUFFIX}"));
		if self.oracle.exists(&canonical) {
			return Some(canonical);
		}
		let fallback = folder.join(format!("{name}{FALLBACK_SUFFIX}"));
		if self.oracle.exists(&fallback) {
			tracing::debug!(path = %fallback.display(), "using numbered main icon part");
			return Some(fallback);
		}
		Some(canonical)
	}
}

/// Lets a [`MilitarySymbol`] fill in its own graphic layers.
pub trait GraphicLayersExt {
	/// Resolves and stores the symbol's graphic layers, leaving them
	/// untouched on failure.
	fn set_graphic_layers<O: PathOracle>(&mut self, resolver: &LayerResolver<O>) -> bool;
}

impl GraphicLayersExt for MilitarySymbol {
	fn set_graphic_layers<O: PathOracle>(&mut self, resolver: &LayerResolver<O>) -> bool {
		resolver.set_graphic_layers(self)
	}
}
