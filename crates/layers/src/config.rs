//! Resolver configuration: image root plus the symbol set lookup tables
//! that decide folder names and frame shapes.

use std::collections::HashMap;
use std::path::PathBuf;

use milsym_primitives::SymbolSet;

/// Appendix folder for each symbol set's icons.
///
/// Sets without an entry resolve to an empty folder segment.
pub fn default_folder_names() -> HashMap<SymbolSet, String> {
	use SymbolSet::*;

	[
		(Unknown, "Unknown"),
		(Air, "Air"),
		(AirMissile, "Air"),
		(Space, "Space"),
		(SpaceMissile, "Space"),
		(LandUnit, "Land"),
		(LandCivilianUnitOrganization, "Land"),
		(LandEquipment, "Land"),
		(LandInstallation, "Land"),
		(ControlMeasure, "Control Measures"),
		(SeaSurface, "Sea Surface"),
		(SeaSubsurface, "Sea Subsurface"),
		(MineWarfare, "Mine Warfare"),
		(ActivityEvent, "Activities"),
		(Atmospheric, "METOC"),
		(Oceanographic, "METOC"),
		(MeteorologicalSpace, "METOC"),
		(SignalsIntelligenceSpace, "SigInt"),
		(SignalsIntelligenceAir, "SigInt"),
		(SignalsIntelligenceLand, "SigInt"),
		(SignalsIntelligenceSurface, "SigInt"),
		(SignalsIntelligenceSubsurface, "SigInt"),
		(Cyberspace, "Cyberspace"),
	]
	.into_iter()
	.map(|(set, folder)| (set, folder.to_string()))
	.collect()
}

/// Frame shape drawn for each framed symbol set.
///
/// Only a handful of frame shapes exist; every framed set borrows one of
/// them. Frameless sets have no entry.
pub fn default_frame_categories() -> HashMap<SymbolSet, SymbolSet> {
	use SymbolSet::*;

	HashMap::from([
		(Unknown, Unknown),
		(Air, Air),
		(AirMissile, Air),
		(SignalsIntelligenceAir, Air),
		(Space, Space),
		(SpaceMissile, Space),
		(SignalsIntelligenceSpace, Space),
		(LandUnit, LandUnit),
		(LandCivilianUnitOrganization, LandUnit),
		(SignalsIntelligenceLand, LandUnit),
		(LandEquipment, SeaSurface),
		(SeaSurface, SeaSurface),
		(SignalsIntelligenceSurface, SeaSurface),
		(LandInstallation, LandInstallation),
		(SeaSubsurface, SeaSubsurface),
		(MineWarfare, SeaSubsurface),
		(SignalsIntelligenceSubsurface, SeaSubsurface),
		(ActivityEvent, ActivityEvent),
		(Cyberspace, Unknown),
	])
}

/// Everything a [`LayerResolver`](crate::LayerResolver) needs besides its
/// path oracle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
	/// Directory holding `Frames/`, `Appendices/` and `Echelon/`.
	pub image_root: PathBuf,
	/// Appendix folder per symbol set.
	pub folder_names: HashMap<SymbolSet, String>,
	/// Frame shape per symbol set.
	pub frame_categories: HashMap<SymbolSet, SymbolSet>,
}

impl ResolverConfig {
	/// Creates a configuration with the default folder and frame tables.
	pub fn new(image_root: impl Into<PathBuf>) -> Self {
		Self {
			image_root: image_root.into(),
			folder_names: default_folder_names(),
			frame_categories: default_frame_categories(),
		}
	}

	/// Overrides the appendix folder of one symbol set.
	#[must_use]
	pub fn with_folder_name(mut self, set: SymbolSet, folder: impl Into<String>) -> Self {
		self.folder_names.insert(set, folder.into());
		self
	}

	/// Overrides the frame shape of one symbol set.
	#[must_use]
	pub fn with_frame_category(mut self, set: SymbolSet, frame: SymbolSet) -> Self {
		self.frame_categories.insert(set, frame);
		self
	}

	/// Appendix folder of a symbol set, empty when unmapped.
	pub fn folder_name(&self, set: SymbolSet) -> &str {
		self.folder_names.get(&set).map_or("", String::as_str)
	}

	/// Frame shape of a symbol set, if it has one.
	pub fn frame_category(&self, set: SymbolSet) -> Option<SymbolSet> {
		self.frame_categories.get(&set).copied()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_every_set_has_a_folder() {
		let folders = default_folder_names();
		assert!(SymbolSet::all().all(|set| folders.contains_key(&set)));
	}

	#[test]
	fn test_frame_categories_cover_framed_sets() {
		let frames = default_frame_categories();
		for set in SymbolSet::all() {
			assert_eq!(frames.contains_key(&set), set.has_frame(), "{set:?}");
		}
	}

	#[test]
	fn test_overrides() {
		let config = ResolverConfig::new("/img")
			.with_folder_name(SymbolSet::LandUnit, "Land Units")
			.with_frame_category(SymbolSet::Cyberspace, SymbolSet::LandUnit);
		assert_eq!(config.folder_name(SymbolSet::LandUnit), "Land Units");
		assert_eq!(
			config.frame_category(SymbolSet::Cyberspace),
			Some(SymbolSet::LandUnit)
		);
	}

	#[test]
	fn test_unmapped_folder_is_empty() {
		let mut config = ResolverConfig::new("/img");
		config.folder_names.remove(&SymbolSet::Cyberspace);
		assert_eq!(config.folder_name(SymbolSet::Cyberspace), "");
	}
}
