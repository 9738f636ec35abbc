use crate::codes::coded_enum;

coded_enum! {
	/// Standard identity context (SIDC position 3).
	#[derive(Default)]
	pub enum Context(1) {
		#[default]
		Reality = "0",
		Exercise = "1",
		Simulation = "2",
	}
}

coded_enum! {
	/// Standard identity affiliation (SIDC position 4).
	///
	/// Codes are two characters wide because frame and echelon file names
	/// embed them that way; the SIDC itself carries only the last digit.
	#[derive(Default)]
	pub enum Affiliation(2) {
		Pending = "00",
		#[default]
		Unknown = "01",
		#[strum(to_string = "Assumed Friend")]
		AssumedFriend = "02",
		Friend = "03",
		Neutral = "04",
		#[strum(to_string = "Suspect Joker")]
		SuspectJoker = "05",
		#[strum(to_string = "Hostile Faker")]
		HostileFaker = "06",
	}
}

coded_enum! {
	/// Operational status (SIDC position 7).
	#[derive(Default)]
	pub enum Status(1) {
		#[default]
		Present = "0",
		Planned = "1",
		#[strum(to_string = "Present Fully Capable")]
		FullyCapable = "2",
		#[strum(to_string = "Present Damaged")]
		Damaged = "3",
		#[strum(to_string = "Present Destroyed")]
		Destroyed = "4",
		#[strum(to_string = "Present Full To Capacity")]
		FullToCapacity = "5",
	}
}
