use crate::codes::coded_enum;

coded_enum! {
	/// Top level symbol category (SIDC positions 5-6).
	///
	/// Display names are the human-readable category names used when building
	/// well-formed symbol names, e.g. `"Land Unit"`.
	pub enum SymbolSet(2) {
		#[strum(to_string = "Unknown")]
		Unknown = "00",
		#[strum(to_string = "Air")]
		Air = "01",
		#[strum(to_string = "Air Missile")]
		AirMissile = "02",
		#[strum(to_string = "Space")]
		Space = "05",
		#[strum(to_string = "Space Missile")]
		SpaceMissile = "06",
		#[strum(to_string = "Land Unit")]
		LandUnit = "10",
		#[strum(to_string = "Land Civilian Unit Organization")]
		LandCivilianUnitOrganization = "11",
		#[strum(to_string = "Land Equipment")]
		LandEquipment = "15",
		#[strum(to_string = "Land Installation")]
		LandInstallation = "20",
		#[strum(to_string = "Control Measure")]
		ControlMeasure = "25",
		#[strum(to_string = "Sea Surface")]
		SeaSurface = "30",
		#[strum(to_string = "Sea Subsurface")]
		SeaSubsurface = "35",
		#[strum(to_string = "Mine Warfare")]
		MineWarfare = "36",
		#[strum(to_string = "Activity Event")]
		ActivityEvent = "40",
		#[strum(to_string = "Atmospheric")]
		Atmospheric = "45",
		#[strum(to_string = "Oceanographic")]
		Oceanographic = "46",
		#[strum(to_string = "Meteorological Space")]
		MeteorologicalSpace = "47",
		#[strum(to_string = "Signals Intelligence Space")]
		SignalsIntelligenceSpace = "50",
		#[strum(to_string = "Signals Intelligence Air")]
		SignalsIntelligenceAir = "51",
		#[strum(to_string = "Signals Intelligence Land")]
		SignalsIntelligenceLand = "52",
		#[strum(to_string = "Signals Intelligence Surface")]
		SignalsIntelligenceSurface = "53",
		#[strum(to_string = "Signals Intelligence Subsurface")]
		SignalsIntelligenceSubsurface = "54",
		#[strum(to_string = "Cyberspace")]
		Cyberspace = "60",
	}
}

impl SymbolSet {
	/// Returns whether symbols of this set are drawn inside a frame.
	///
	/// Control measures and METOC sets are frameless; they also never carry
	/// center icon modifiers or echelon amplifiers.
	pub const fn has_frame(self) -> bool {
		!matches!(
			self,
			Self::ControlMeasure
				| Self::Atmospheric
				| Self::Oceanographic
				| Self::MeteorologicalSpace
		)
	}

	/// Human-readable display name, e.g. `"Land Unit"`.
	pub fn display_name(self) -> &'static str {
		self.into()
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;
	use std::str::FromStr;

	use pretty_assertions::assert_eq;
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case(SymbolSet::Air, "01")]
	#[case(SymbolSet::LandUnit, "10")]
	#[case(SymbolSet::ControlMeasure, "25")]
	#[case(SymbolSet::Cyberspace, "60")]
	fn test_codes(#[case] set: SymbolSet, #[case] code: &str) {
		assert_eq!(set.code(), code);
		assert_eq!(SymbolSet::from_code(code), Ok(set));
	}

	#[test]
	fn test_from_code_pads_single_digit() {
		assert_eq!(SymbolSet::from_code("1"), Ok(SymbolSet::Air));
		assert_eq!(SymbolSet::from_code(" 10 "), Ok(SymbolSet::LandUnit));
	}

	#[test]
	fn test_from_code_rejects_unknown() {
		assert!(SymbolSet::from_code("99").is_err());
		assert!(SymbolSet::from_code("Air").is_err());
		assert!(SymbolSet::from_code("").is_err());
	}

	#[test]
	fn test_codes_are_unique_and_two_wide() {
		let codes: HashSet<_> = SymbolSet::all().map(SymbolSet::code).collect();
		assert_eq!(codes.len(), SymbolSet::all().count());
		assert!(codes.iter().all(|c| c.len() == SymbolSet::WIDTH));
	}

	#[test]
	fn test_display_name_round_trip() {
		assert_eq!(SymbolSet::LandUnit.to_string(), "Land Unit");
		assert_eq!(SymbolSet::LandUnit.display_name(), "Land Unit");
		assert_eq!(SymbolSet::from_str("Land Unit"), Ok(SymbolSet::LandUnit));
	}

	#[test]
	fn test_frameless_sets() {
		assert!(!SymbolSet::ControlMeasure.has_frame());
		assert!(!SymbolSet::Atmospheric.has_frame());
		assert!(SymbolSet::LandUnit.has_frame());
		assert!(SymbolSet::Cyberspace.has_frame());
	}
}
