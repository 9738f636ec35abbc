//! Typed rows of the entity and modifier reference tables.

use milsym_primitives::sidc::{ENTITY_CODE_WIDTH, MODIFIER_CODE_WIDTH};
use milsym_primitives::{Shape, SymbolSet, pad_code};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TableWarning};
use crate::table::Table;

/// Columns every entity table must carry.
pub const ENTITY_COLUMNS: &[&str] = &[
	"SymbolSet",
	"Code",
	"GeometryType",
	"Entity",
	"EntityType",
	"EntitySubType",
];

/// Columns every modifier table must carry.
pub const MODIFIER_COLUMNS: &[&str] = &["SymbolSet", "ModifierNumber", "Name", "Code", "Category"];

/// One row of the entity table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRecord {
	/// Two digit symbol set code.
	#[serde(rename = "SymbolSet")]
	pub symbol_set: String,
	/// Six digit entity code.
	#[serde(rename = "Code")]
	pub code: String,
	/// Geometry text: point, line or area.
	#[serde(rename = "GeometryType", default)]
	pub geometry_type: String,
	/// Entity name.
	#[serde(rename = "Entity", default)]
	pub entity: String,
	/// Entity type name; may be blank.
	#[serde(rename = "EntityType", default)]
	pub entity_type: String,
	/// Entity subtype name; may be blank.
	#[serde(rename = "EntitySubType", default)]
	pub entity_subtype: String,
}

impl EntityRecord {
	/// Parsed symbol set, if the code is in the code table.
	pub fn symbol_set(&self) -> Option<SymbolSet> {
		SymbolSet::from_code(&self.symbol_set).ok()
	}

	/// Parsed geometry.
	pub fn shape(&self) -> Shape {
		Shape::from_geometry(&self.geometry_type)
	}

	fn normalize(&mut self) {
		self.symbol_set = pad_code(&self.symbol_set, SymbolSet::WIDTH).into_owned();
		self.code = pad_code(&self.code, ENTITY_CODE_WIDTH).into_owned();
	}
}

/// One row of the modifier table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierRecord {
	/// Two digit symbol set code.
	#[serde(rename = "SymbolSet")]
	pub symbol_set: String,
	/// Sector the modifier is drawn in, as written in the table.
	#[serde(rename = "ModifierNumber")]
	pub modifier_number: String,
	/// Modifier name.
	#[serde(rename = "Name")]
	pub name: String,
	/// Two digit modifier code.
	#[serde(rename = "Code")]
	pub code: String,
	/// Modifier category.
	#[serde(rename = "Category", default)]
	pub category: String,
}

impl ModifierRecord {
	/// Parsed symbol set, if the code is in the code table.
	pub fn symbol_set(&self) -> Option<SymbolSet> {
		SymbolSet::from_code(&self.symbol_set).ok()
	}

	/// Sector number, if the cell holds 1 or 2.
	pub fn sector(&self) -> Option<u8> {
		match self.modifier_number.trim().parse() {
			Ok(number @ (1 | 2)) => Some(number),
			_ => None,
		}
	}

	fn normalize(&mut self) {
		self.symbol_set = pad_code(&self.symbol_set, SymbolSet::WIDTH).into_owned();
		self.code = pad_code(&self.code, MODIFIER_CODE_WIDTH).into_owned();
	}
}

/// Decodes an entity table, padding codes to their fixed widths.
pub fn entity_records(table: &Table) -> Result<Vec<EntityRecord>> {
	table.require_columns("entities", ENTITY_COLUMNS)?;
	let mut records: Vec<EntityRecord> = table.records("entities")?;
	records.iter_mut().for_each(EntityRecord::normalize);
	Ok(records)
}

/// Decodes a modifier table, padding codes to their fixed widths.
pub fn modifier_records(table: &Table) -> Result<Vec<ModifierRecord>> {
	table.require_columns("modifiers", MODIFIER_COLUMNS)?;
	let mut records: Vec<ModifierRecord> = table.records("modifiers")?;
	records.iter_mut().for_each(ModifierRecord::normalize);
	Ok(records)
}

/// Checks entity rows against the symbol set and geometry code tables.
pub fn validate_entities(records: &[EntityRecord]) -> Vec<TableWarning> {
	let mut warnings = Vec::new();
	for (row, record) in records.iter().enumerate() {
		if record.symbol_set().is_none() {
			warnings.push(TableWarning::UnknownSymbolSet {
				table: "entities",
				row,
				code: record.symbol_set.clone(),
			});
		}
		if record.geometry_type.trim().parse::<Shape>().is_err() {
			warnings.push(TableWarning::UnknownGeometry {
				row,
				geometry: record.geometry_type.clone(),
			});
		}
	}
	warnings
}

/// Checks modifier rows against the symbol set code table and sector numbers.
pub fn validate_modifiers(records: &[ModifierRecord]) -> Vec<TableWarning> {
	let mut warnings = Vec::new();
	for (row, record) in records.iter().enumerate() {
		if record.symbol_set().is_none() {
			warnings.push(TableWarning::UnknownSymbolSet {
				table: "modifiers",
				row,
				code: record.symbol_set.clone(),
			});
		}
		if record.sector().is_none() {
			warnings.push(TableWarning::InvalidModifierNumber {
				row,
				number: record.modifier_number.clone(),
			});
		}
	}
	warnings
}
