use crate::codes::coded_enum;

coded_enum! {
	/// Headquarters, task force and feint/dummy amplifier (SIDC position 8).
	#[derive(Default)]
	pub enum HqTfDummy(1) {
		#[default]
		#[strum(to_string = "No HQ/TF/Dummy Modifier")]
		NoModifier = "0",
		#[strum(to_string = "Feint/Dummy")]
		FeintDummy = "1",
		Headquarters = "2",
		#[strum(to_string = "Feint/Dummy Headquarters")]
		FeintDummyHeadquarters = "3",
		#[strum(to_string = "Task Force")]
		TaskForce = "4",
		#[strum(to_string = "Feint/Dummy Task Force")]
		FeintDummyTaskForce = "5",
		#[strum(to_string = "Task Force Headquarters")]
		TaskForceHeadquarters = "6",
		#[strum(to_string = "Feint/Dummy Task Force Headquarters")]
		FeintDummyTaskForceHeadquarters = "7",
	}
}

coded_enum! {
	/// Echelon or mobility amplifier (SIDC positions 9-10).
	#[derive(Default)]
	pub enum EchelonMobility(2) {
		#[default]
		#[strum(to_string = "No Echelon/Mobility")]
		None = "00",
		#[strum(to_string = "Team/Crew")]
		TeamCrew = "11",
		Squad = "12",
		Section = "13",
		#[strum(to_string = "Platoon/Detachment")]
		PlatoonDetachment = "14",
		#[strum(to_string = "Company/Battery/Troop")]
		CompanyBatteryTroop = "15",
		#[strum(to_string = "Battalion/Squadron")]
		BattalionSquadron = "16",
		#[strum(to_string = "Regiment/Group")]
		RegimentGroup = "17",
		Brigade = "18",
		Division = "21",
		#[strum(to_string = "Corps/MEF")]
		CorpsMef = "22",
		Army = "23",
		#[strum(to_string = "Army Group/Front")]
		ArmyGroupFront = "24",
		#[strum(to_string = "Region/Theater")]
		RegionTheater = "25",
		Command = "26",
		#[strum(to_string = "Wheeled Limited Cross Country")]
		WheeledLimitedCrossCountry = "31",
		#[strum(to_string = "Wheeled Cross Country")]
		WheeledCrossCountry = "32",
		Tracked = "33",
		#[strum(to_string = "Wheeled and Tracked Combination")]
		WheeledAndTracked = "34",
		Towed = "35",
		Rail = "36",
		#[strum(to_string = "Pack Animals")]
		PackAnimals = "37",
		#[strum(to_string = "Over Snow")]
		OverSnow = "41",
		Sled = "42",
		Barge = "51",
		Amphibious = "52",
		#[strum(to_string = "Short Towed Array")]
		ShortTowedArray = "61",
		#[strum(to_string = "Long Towed Array")]
		LongTowedArray = "62",
	}
}

impl EchelonMobility {
	/// Returns whether an echelon or mobility amplifier is set.
	pub const fn is_set(self) -> bool {
		!matches!(self, Self::None)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_echelon_codes() {
		assert_eq!(EchelonMobility::TeamCrew.code(), "11");
		assert_eq!(EchelonMobility::from_code("0"), Ok(EchelonMobility::None));
		assert!(!EchelonMobility::None.is_set());
		assert!(EchelonMobility::Division.is_set());
	}

	#[test]
	fn test_hq_tf_dummy_codes() {
		assert_eq!(HqTfDummy::default().code(), "0");
		assert_eq!(HqTfDummy::from_code("6"), Ok(HqTfDummy::TaskForceHeadquarters));
		assert!(HqTfDummy::from_code("8").is_err());
	}
}
