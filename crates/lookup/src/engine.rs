use indexmap::IndexSet;
use milsym_primitives::{Affiliation, MilitarySymbol, SymbolIdCode, SymbolSet, well_formed_name};
use milsym_tables::records::{
	entity_records, modifier_records, validate_entities, validate_modifiers,
};
use milsym_tables::{
	DataPaths, EntityRecord, ModifierRecord, ReferenceTables, Table, TableWarning,
};

use crate::index::{EntityKeyRef, LookupIndex};
use crate::query::{SymbolQuery, cascade, given};

/// Symbol search over the entity, modifier and legacy mapping tables.
///
/// Starts empty; [`initialize`](Self::initialize) or [`load`](Self::load)
/// installs the tables exactly once. Installing takes `&mut self`, so every
/// query through a shared reference observes fully built tables. Once
/// loaded, the lookup can be shared across threads behind an `Arc` without
/// locking.
///
/// Misses never fail: they return `None` or an empty list and log a warning.
#[derive(Debug, Default)]
pub struct SymbolLookup {
	tables: ReferenceTables,
	pub(crate) entities: Vec<EntityRecord>,
	pub(crate) modifiers: Vec<ModifierRecord>,
	pub(crate) index: LookupIndex,
	warnings: Vec<TableWarning>,
}

impl SymbolLookup {
	/// Creates an uninitialized lookup; every query returns nothing.
	pub fn new() -> Self {
		Self::default()
	}

	/// Loads the reference tables from disk.
	pub fn load(paths: &DataPaths) -> milsym_tables::Result<Self> {
		let mut lookup = Self::new();
		lookup.initialize(paths)?;
		Ok(lookup)
	}

	/// Builds a lookup from already loaded tables.
	pub fn from_tables(tables: ReferenceTables) -> milsym_tables::Result<Self> {
		let entities = entity_records(&tables.entities)?;
		let modifiers = modifier_records(&tables.modifiers)?;

		let mut warnings = validate_entities(&entities);
		warnings.extend(validate_modifiers(&modifiers));
		for warning in &warnings {
			tracing::warn!(%warning, "reference table row ignored by typed queries");
		}

		let index = LookupIndex::build(&entities, &modifiers);
		Ok(Self {
			tables,
			entities,
			modifiers,
			index,
			warnings,
		})
	}

	/// Loads and installs the three reference tables.
	///
	/// Succeeds only when all three load as valid, non-empty tables; on
	/// failure the lookup keeps its previous contents.
	pub fn initialize(&mut self, paths: &DataPaths) -> milsym_tables::Result<()> {
		let tables = ReferenceTables::load(paths)?;
		*self = Self::from_tables(tables)?;
		Ok(())
	}

	/// Returns true when all three tables have at least one row and column.
	pub fn initialized(&self) -> bool {
		self.tables.is_valid()
	}

	/// Non-fatal problems found when the tables were installed.
	pub fn validate(&self) -> &[TableWarning] {
		&self.warnings
	}

	/// Decoded entity rows, in table order.
	pub fn entities(&self) -> &[EntityRecord] {
		&self.entities
	}

	/// Decoded modifier rows, in table order.
	pub fn modifiers(&self) -> &[ModifierRecord] {
		&self.modifiers
	}

	/// The untyped legacy code mapping table.
	pub fn legacy_mappings(&self) -> &Table {
		&self.tables.legacy
	}

	/// Returns whether any legacy mapping cell equals `code`.
	pub fn has_legacy_code(&self, code: &str) -> bool {
		let legacy = &self.tables.legacy;
		legacy.headers().any(|header| {
			legacy
				.column(header)
				.is_some_and(|mut values| values.any(|value| value == code))
		})
	}

	fn entity_rows(&self, set: SymbolSet) -> impl Iterator<Item = &EntityRecord> {
		self.index
			.entities_in(set)
			.iter()
			.map(|&row| &self.entities[row])
	}

	/// Finds every symbol of a symbol set matching the query's name filters.
	pub fn find_symbols(
		&self,
		symbol_set: SymbolSet,
		query: &SymbolQuery<'_>,
	) -> Vec<MilitarySymbol> {
		if self.index.entities_in(symbol_set).is_empty() {
			tracing::warn!(%symbol_set, "no entities in symbol set");
			return Vec::new();
		}

		let symbols: Vec<_> = self
			.entity_rows(symbol_set)
			.filter(|record| query.matches(record))
			.map(|record| Self::create_symbol_from_record(record, query.affiliation))
			.collect();

		if symbols.is_empty() {
			tracing::warn!(%symbol_set, ?query, "empty result of symbol search");
		}
		symbols
	}

	/// Distinct names one level below the given filters.
	///
	/// With no entity, lists entity names. With an entity, lists its
	/// non-blank entity types. With an entity and type, lists their non-blank
	/// subtypes. Order is first occurrence in the table.
	pub fn distinct_entries(
		&self,
		symbol_set: SymbolSet,
		entity: Option<&str>,
		entity_type: Option<&str>,
	) -> Vec<String> {
		let values: IndexSet<&str> = match (given(entity), given(entity_type)) {
			(None, _) => self
				.entity_rows(symbol_set)
				.map(|r| r.entity.as_str())
				.collect(),
			(Some(entity), None) => self
				.entity_rows(symbol_set)
				.filter(|r| r.entity == entity)
				.map(|r| r.entity_type.as_str())
				.filter(|v| !v.trim().is_empty())
				.collect(),
			(Some(entity), Some(entity_type)) => self
				.entity_rows(symbol_set)
				.filter(|r| r.entity == entity && r.entity_type == entity_type)
				.map(|r| r.entity_subtype.as_str())
				.filter(|v| !v.trim().is_empty())
				.collect(),
		};

		if values.is_empty() {
			tracing::warn!(
				%symbol_set,
				?entity,
				?entity_type,
				"empty result of distinct entry search"
			);
		}
		values.into_iter().map(str::to_string).collect()
	}

	/// Entity code of the first row matching the cascading name filters.
	pub fn entity_code(
		&self,
		symbol_set: SymbolSet,
		entity: &str,
		entity_type: Option<&str>,
		entity_subtype: Option<&str>,
	) -> Option<&str> {
		let found = match (given(entity_type), given(entity_subtype)) {
			(Some(entity_type), Some(entity_subtype)) if !entity.is_empty() => self
				.index
				.entity(&EntityKeyRef::new(symbol_set, entity, entity_type, entity_subtype))
				.map(|row| &self.entities[row]),
			_ => self
				.entity_rows(symbol_set)
				.find(|r| r.entity == entity && cascade(r, Some(entity), entity_type, entity_subtype)),
		};

		match found {
			Some(record) => Some(record.code.as_str()),
			None => {
				tracing::warn!(
					%symbol_set,
					entity,
					?entity_type,
					?entity_subtype,
					"entity name not found"
				);
				None
			}
		}
	}

	/// First symbol whose entity or subtype name contains `name`.
	///
	/// Matching is case sensitive. When `symbol_set` is given, only rows of
	/// that set are considered.
	pub fn create_symbol_by_entity_name(
		&self,
		name: &str,
		symbol_set: Option<SymbolSet>,
		affiliation: Affiliation,
	) -> Option<MilitarySymbol> {
		let mut matches = self
			.entities
			.iter()
			.filter(|r| r.entity.contains(name) || r.entity_subtype.contains(name))
			.peekable();

		if matches.peek().is_none() {
			tracing::warn!(name, "entity name not found");
			return None;
		}

		let found = match symbol_set {
			Some(set) => matches.find(|r| r.symbol_set() == Some(set)),
			None => matches.next(),
		};

		match found {
			Some(record) => Some(Self::create_symbol_from_record(record, affiliation)),
			None => {
				tracing::warn!(name, ?symbol_set, "entity name not found in symbol set");
				None
			}
		}
	}

	/// Builds a symbol from one entity row.
	///
	/// Symbol set and entity code come from the row, the shape from its
	/// geometry text and the affiliation from the caller.
	pub fn create_symbol_from_record(
		record: &EntityRecord,
		affiliation: Affiliation,
	) -> MilitarySymbol {
		let mut id = SymbolIdCode {
			affiliation,
			entity_code: record.code.clone(),
			shape: record.shape(),
			..SymbolIdCode::default()
		};
		id.set_symbol_set_code(&record.symbol_set);
		id.name = well_formed_name(
			id.symbol_set,
			&record.entity,
			&record.entity_type,
			&record.entity_subtype,
		);
		MilitarySymbol::new(id)
	}
}
