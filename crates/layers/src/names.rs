//! File and folder names of the symbol image assets.
//!
//! ```text
//! Frames/<affiliation><frame set>.svg
//! Appendices/<folder>/<symbol set><entity code>.svg
//! Appendices/<folder>/mod<N>/<symbol set><modifier code><N>.svg
//! Echelon/03100<echelon>.svg
//! ```

use std::path::{Path, PathBuf};

use milsym_primitives::sidc::{ENTITY_CODE_WIDTH, MODIFIER_CODE_WIDTH};
use milsym_primitives::{Affiliation, EchelonMobility, HqTfDummy, SymbolIdCode, SymbolSet, pad_code};

/// Extension of every image asset.
pub const IMAGE_SUFFIX: &str = ".svg";
/// Suffix of the variant used when a main icon only exists in numbered parts.
pub const FALLBACK_SUFFIX: &str = "_0.svg";

pub const APPENDICES_DIR: &str = "Appendices";
pub const FRAMES_DIR: &str = "Frames";
pub const ECHELON_DIR: &str = "Echelon";

// Echelon assets only exist for friendly ground units without HQ/TF/dummy
// amplifiers, so those segments are fixed.
const ECHELON_AFFILIATION: &str = "03";
const ECHELON_SET_AND_HQ: &str = "100";

/// Main icon file stem: symbol set code followed by the entity code.
///
/// `None` when the symbol set is not set.
pub fn main_icon_name(id: &SymbolIdCode) -> Option<String> {
	let symbol_set = id.symbol_set?;
	Some(format!(
		"{}{}",
		symbol_set.code(),
		pad_code(&id.entity_code, ENTITY_CODE_WIDTH)
	))
}

/// Modifier icon file stem: symbol set code, two digit modifier code and
/// modifier number.
///
/// `None` for modifier numbers other than 1 or 2 and for codes that are not
/// one or two digits.
pub fn modifier_icon_name(symbol_set: SymbolSet, modifier_number: u8, code: &str) -> Option<String> {
	if !matches!(modifier_number, 1 | 2) {
		return None;
	}
	let code = pad_code(code.trim(), MODIFIER_CODE_WIDTH);
	if code.len() != MODIFIER_CODE_WIDTH || !code.bytes().all(|b| b.is_ascii_digit()) {
		tracing::debug!(%symbol_set, modifier_number, code = %code, "unusable modifier code");
		return None;
	}
	Some(format!("{}{code}{modifier_number}", symbol_set.code()))
}

/// Modifier icon file stem for one of an identity's two sector modifiers.
///
/// `None` when the modifier is not set.
pub fn symbol_modifier_icon_name(id: &SymbolIdCode, modifier_number: u8) -> Option<String> {
	let code = match modifier_number {
		1 => id.first_modifier()?,
		2 => id.second_modifier()?,
		_ => return None,
	};
	modifier_icon_name(id.symbol_set?, modifier_number, code)
}

/// Echelon or mobility amplifier path relative to the image root.
///
/// Only friendly ground assets exist, so the affiliation, symbol set and
/// HQ/TF/dummy arguments do not change the result yet. `None` when no
/// echelon or mobility is set.
pub fn echelon_icon_name_with_folder(
	_affiliation: Affiliation,
	_symbol_set: Option<SymbolSet>,
	_hq_tf_dummy: HqTfDummy,
	echelon_mobility: EchelonMobility,
) -> Option<PathBuf> {
	if !echelon_mobility.is_set() {
		return None;
	}
	let name = format!(
		"{ECHELON_AFFILIATION}{ECHELON_SET_AND_HQ}{}{IMAGE_SUFFIX}",
		echelon_mobility.code()
	);
	Some(Path::new(ECHELON_DIR).join(name))
}
