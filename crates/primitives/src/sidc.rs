use serde::{Deserialize, Serialize};

use crate::amplifier::{EchelonMobility, HqTfDummy};
use crate::codes::{CodeError, Result, pad_code};
use crate::identity::{Affiliation, Context, Status};
use crate::shape::Shape;
use crate::symbol_set::SymbolSet;

/// Separator placed between the parts of a well-formed symbol name.
pub const NAME_SEPARATOR: &str = " : ";

/// Length of a full symbol identity code.
pub const SIDC_LEN: usize = 20;

/// Version digits of the supported SIDC revision.
pub const SIDC_VERSION: &str = "10";

/// Width of the entity + entity type + entity subtype code.
pub const ENTITY_CODE_WIDTH: usize = 6;

/// Width of a sector modifier code.
pub const MODIFIER_CODE_WIDTH: usize = 2;

/// Modifier code meaning "no modifier".
pub const NO_MODIFIER: &str = "00";

/// Builds a display name from a symbol set and the non-empty entity parts.
///
/// `well_formed_name(LandUnit, "Infantry", "", "")` yields
/// `"Land Unit : Infantry"`.
pub fn well_formed_name(
	symbol_set: Option<SymbolSet>,
	entity: &str,
	entity_type: &str,
	entity_subtype: &str,
) -> String {
	let mut parts: Vec<&str> = Vec::with_capacity(4);
	if let Some(set) = symbol_set {
		parts.push(set.display_name());
	}
	parts.extend(
		[entity, entity_type, entity_subtype]
			.into_iter()
			.filter(|part| !part.is_empty()),
	);
	parts.join(NAME_SEPARATOR)
}

/// The decoded fields of one symbol identity code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolIdCode {
	/// Top level category; `None` when not set.
	pub symbol_set: Option<SymbolSet>,
	/// Reality, exercise or simulation.
	pub context: Context,
	/// Friend, hostile, unknown and so on.
	pub affiliation: Affiliation,
	/// Operational status.
	pub status: Status,
	/// HQ, task force and dummy amplifier.
	pub hq_tf_dummy: HqTfDummy,
	/// Echelon or mobility amplifier.
	pub echelon_mobility: EchelonMobility,
	/// Entity, entity type and entity subtype codes concatenated.
	pub entity_code: String,
	/// Sector 1 modifier code; `"00"` or empty when not set.
	pub first_modifier: String,
	/// Sector 2 modifier code; `"00"` or empty when not set.
	pub second_modifier: String,
	/// Rendering geometry.
	pub shape: Shape,
	/// Human-readable display name.
	pub name: String,
}

impl Default for SymbolIdCode {
	fn default() -> Self {
		Self {
			symbol_set: None,
			context: Context::default(),
			affiliation: Affiliation::default(),
			status: Status::default(),
			hq_tf_dummy: HqTfDummy::default(),
			echelon_mobility: EchelonMobility::default(),
			entity_code: String::new(),
			first_modifier: NO_MODIFIER.to_string(),
			second_modifier: NO_MODIFIER.to_string(),
			shape: Shape::default(),
			name: String::new(),
		}
	}
}

impl SymbolIdCode {
	/// Creates an identity for the given symbol set and entity code.
	pub fn new(symbol_set: SymbolSet, entity_code: impl Into<String>) -> Self {
		Self {
			symbol_set: Some(symbol_set),
			entity_code: entity_code.into(),
			..Self::default()
		}
	}

	/// Sets the affiliation.
	#[must_use]
	pub fn with_affiliation(mut self, affiliation: Affiliation) -> Self {
		self.affiliation = affiliation;
		self
	}

	/// Sets the rendering geometry.
	#[must_use]
	pub fn with_shape(mut self, shape: Shape) -> Self {
		self.shape = shape;
		self
	}

	/// Sets both sector modifier codes.
	#[must_use]
	pub fn with_modifiers(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
		self.first_modifier = first.into();
		self.second_modifier = second.into();
		self
	}

	/// Sets the echelon or mobility amplifier.
	#[must_use]
	pub fn with_echelon_mobility(mut self, echelon_mobility: EchelonMobility) -> Self {
		self.echelon_mobility = echelon_mobility;
		self
	}

	/// Sets the HQ, task force and dummy amplifier.
	#[must_use]
	pub fn with_hq_tf_dummy(mut self, hq_tf_dummy: HqTfDummy) -> Self {
		self.hq_tf_dummy = hq_tf_dummy;
		self
	}

	/// Sets the symbol set from its two digit code.
	///
	/// Unknown codes clear the symbol set, which makes the identity invalid.
	pub fn set_symbol_set_code(&mut self, code: &str) {
		self.symbol_set = match SymbolSet::from_code(code) {
			Ok(set) => Some(set),
			Err(error) => {
				tracing::debug!(%error, "clearing symbol set");
				None
			}
		};
	}

	/// Returns true when both the symbol set and a numeric entity code are set.
	pub fn is_valid(&self) -> bool {
		self.symbol_set.is_some()
			&& !self.entity_code.is_empty()
			&& self.entity_code.bytes().all(|b| b.is_ascii_digit())
	}

	/// Returns the sector 1 modifier code if it is set.
	pub fn first_modifier(&self) -> Option<&str> {
		modifier_if_set(&self.first_modifier)
	}

	/// Returns the sector 2 modifier code if it is set.
	pub fn second_modifier(&self) -> Option<&str> {
		modifier_if_set(&self.second_modifier)
	}

	/// Parses a 20 digit 2525D symbol identity code.
	///
	/// The name and shape are not part of the code and are left at their
	/// defaults.
	pub fn from_sidc(sidc: &str) -> Result<Self> {
		let malformed = |reason| CodeError::MalformedSidc {
			sidc: sidc.to_string(),
			reason,
		};

		if sidc.len() != SIDC_LEN {
			return Err(malformed("expected 20 characters"));
		}
		if !sidc.bytes().all(|b| b.is_ascii_digit()) {
			return Err(malformed("expected only digits"));
		}
		if &sidc[0..2] != SIDC_VERSION {
			return Err(CodeError::UnsupportedVersion(sidc[0..2].to_string()));
		}

		Ok(Self {
			context: Context::from_code(&sidc[2..3])?,
			affiliation: Affiliation::from_code(&sidc[3..4])?,
			symbol_set: Some(SymbolSet::from_code(&sidc[4..6])?),
			status: Status::from_code(&sidc[6..7])?,
			hq_tf_dummy: HqTfDummy::from_code(&sidc[7..8])?,
			echelon_mobility: EchelonMobility::from_code(&sidc[8..10])?,
			entity_code: sidc[10..16].to_string(),
			first_modifier: sidc[16..18].to_string(),
			second_modifier: sidc[18..20].to_string(),
			..Self::default()
		})
	}

	/// Formats the identity as a 20 digit 2525D symbol identity code.
	///
	/// Returns `None` when the identity is not valid.
	pub fn to_sidc(&self) -> Option<String> {
		if !self.is_valid() {
			return None;
		}
		let symbol_set = self.symbol_set?;
		let affiliation = self.affiliation.code();

		let mut sidc = String::with_capacity(SIDC_LEN);
		sidc.push_str(SIDC_VERSION);
		sidc.push_str(self.context.code());
		sidc.push_str(&affiliation[affiliation.len() - 1..]);
		sidc.push_str(symbol_set.code());
		sidc.push_str(self.status.code());
		sidc.push_str(self.hq_tf_dummy.code());
		sidc.push_str(self.echelon_mobility.code());
		sidc.push_str(&pad_code(&self.entity_code, ENTITY_CODE_WIDTH));
		sidc.push_str(self.first_modifier().unwrap_or(NO_MODIFIER));
		sidc.push_str(self.second_modifier().unwrap_or(NO_MODIFIER));

		(sidc.len() == SIDC_LEN).then_some(sidc)
	}
}

fn modifier_if_set(code: &str) -> Option<&str> {
	(!code.is_empty() && code != NO_MODIFIER).then_some(code)
}
