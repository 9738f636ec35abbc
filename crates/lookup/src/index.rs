//! Typed indexes over the decoded reference rows.
//!
//! Built once when tables are installed; every query starts from one of
//! these instead of scanning the whole table. Name keys are owned by the
//! index and probed with borrowed keys, so queries never allocate.

use std::collections::HashMap;

use indexmap::{Equivalent, IndexMap};
use milsym_primitives::SymbolSet;
use milsym_tables::{EntityRecord, ModifierRecord};

/// Exact identity of an entity row within its symbol set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct EntityKey {
	symbol_set: SymbolSet,
	entity: String,
	entity_type: String,
	entity_subtype: String,
}

/// Borrowed form of [`EntityKey`] used to query the index.
///
/// Field order and types hash identically to [`EntityKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct EntityKeyRef<'a> {
	symbol_set: SymbolSet,
	entity: &'a str,
	entity_type: &'a str,
	entity_subtype: &'a str,
}

impl<'a> EntityKeyRef<'a> {
	pub(crate) fn new(
		symbol_set: SymbolSet,
		entity: &'a str,
		entity_type: &'a str,
		entity_subtype: &'a str,
	) -> Self {
		Self {
			symbol_set,
			entity,
			entity_type,
			entity_subtype,
		}
	}

	fn to_owned_key(self) -> EntityKey {
		EntityKey {
			symbol_set: self.symbol_set,
			entity: self.entity.to_string(),
			entity_type: self.entity_type.to_string(),
			entity_subtype: self.entity_subtype.to_string(),
		}
	}
}

impl Equivalent<EntityKey> for EntityKeyRef<'_> {
	fn equivalent(&self, key: &EntityKey) -> bool {
		self.symbol_set == key.symbol_set
			&& self.entity == key.entity
			&& self.entity_type == key.entity_type
			&& self.entity_subtype == key.entity_subtype
	}
}

/// Modifier rows of one symbol set and sector.
#[derive(Debug, Default)]
struct Sector {
	rows: Vec<usize>,
	by_name: HashMap<String, usize>,
}

/// Row indexes keyed by the fields queries filter on first.
#[derive(Debug, Default)]
pub(crate) struct LookupIndex {
	entities_by_set: HashMap<SymbolSet, Vec<usize>>,
	entity_by_key: IndexMap<EntityKey, usize>,
	sectors: HashMap<(SymbolSet, u8), Sector>,
}

impl LookupIndex {
	pub(crate) fn build(entities: &[EntityRecord], modifiers: &[ModifierRecord]) -> Self {
		let mut index = Self::default();

		for (row, record) in entities.iter().enumerate() {
			let Some(set) = record.symbol_set() else {
				continue;
			};
			index.entities_by_set.entry(set).or_default().push(row);
			let key = EntityKeyRef::new(
				set,
				&record.entity,
				&record.entity_type,
				&record.entity_subtype,
			);
			// Duplicate names keep the first row.
			if !index.entity_by_key.contains_key(&key) {
				index.entity_by_key.insert(key.to_owned_key(), row);
			}
		}

		for (row, record) in modifiers.iter().enumerate() {
			let (Some(set), Some(number)) = (record.symbol_set(), record.sector()) else {
				continue;
			};
			let sector = index.sectors.entry((set, number)).or_default();
			sector.rows.push(row);
			if !sector.by_name.contains_key(record.name.as_str()) {
				sector.by_name.insert(record.name.clone(), row);
			}
		}

		index
	}

	/// Entity rows of a symbol set, in table order.
	pub(crate) fn entities_in(&self, set: SymbolSet) -> &[usize] {
		self.entities_by_set
			.get(&set)
			.map(Vec::as_slice)
			.unwrap_or_default()
	}

	/// First entity row with exactly these names.
	pub(crate) fn entity(&self, key: &EntityKeyRef<'_>) -> Option<usize> {
		self.entity_by_key.get(key).copied()
	}

	/// Modifier rows of a symbol set and sector, in table order.
	pub(crate) fn modifiers_in(&self, set: SymbolSet, number: u8) -> &[usize] {
		self.sectors
			.get(&(set, number))
			.map(|sector| sector.rows.as_slice())
			.unwrap_or_default()
	}

	/// First modifier row with this name.
	pub(crate) fn modifier(&self, set: SymbolSet, number: u8, name: &str) -> Option<usize> {
		self.sectors
			.get(&(set, number))
			.and_then(|sector| sector.by_name.get(name))
			.copied()
	}
}
