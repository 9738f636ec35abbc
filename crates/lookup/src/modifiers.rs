//! Sector 1 and 2 modifier queries.

use indexmap::IndexSet;
use milsym_primitives::SymbolSet;
use milsym_tables::ModifierRecord;

use crate::SymbolLookup;

impl SymbolLookup {
	fn modifier_record(
		&self,
		symbol_set: SymbolSet,
		modifier_number: u8,
		name: &str,
	) -> Option<&ModifierRecord> {
		let found = self
			.index
			.modifier(symbol_set, modifier_number, name)
			.map(|row| &self.modifiers[row]);
		if found.is_none() {
			tracing::warn!(%symbol_set, modifier_number, name, "modifier name not found");
		}
		found
	}

	/// Two digit code of the named modifier.
	///
	/// Names are assumed unique within a symbol set and sector; when they are
	/// not, the first row in table order wins.
	pub fn modifier_code(
		&self,
		symbol_set: SymbolSet,
		modifier_number: u8,
		name: &str,
	) -> Option<&str> {
		self.modifier_record(symbol_set, modifier_number, name)
			.map(|record| record.code.as_str())
	}

	/// Category of the named modifier, looked up like
	/// [`modifier_code`](Self::modifier_code).
	pub fn modifier_category(
		&self,
		symbol_set: SymbolSet,
		name: &str,
		modifier_number: u8,
	) -> Option<&str> {
		self.modifier_record(symbol_set, modifier_number, name)
			.map(|record| record.category.as_str())
	}

	/// Modifier names of one sector, without duplicates, in table order.
	pub fn distinct_modifier_names(&self, symbol_set: SymbolSet, modifier_number: u8) -> Vec<String> {
		let names: IndexSet<&str> = self
			.index
			.modifiers_in(symbol_set, modifier_number)
			.iter()
			.map(|&row| self.modifiers[row].name.as_str())
			.collect();

		if names.is_empty() {
			tracing::warn!(%symbol_set, modifier_number, "no modifiers in sector");
		}
		names.into_iter().map(str::to_string).collect()
	}
}
