use milsym_primitives::Affiliation;
use milsym_tables::EntityRecord;

/// Criteria for [`SymbolLookup::find_symbols`](crate::SymbolLookup::find_symbols).
///
/// Name filters cascade: the entity type only narrows the result when the
/// entity is also given, and the subtype only when both are given. Empty
/// strings count as not given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SymbolQuery<'a> {
	/// Affiliation copied onto every constructed symbol.
	pub affiliation: Affiliation,
	/// Entity name filter.
	pub entity: Option<&'a str>,
	/// Entity type name filter.
	pub entity_type: Option<&'a str>,
	/// Entity subtype name filter.
	pub entity_subtype: Option<&'a str>,
	/// Match the entity, type and subtype exactly, blanks included.
	pub exact_only: bool,
}

impl<'a> SymbolQuery<'a> {
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn affiliation(mut self, affiliation: Affiliation) -> Self {
		self.affiliation = affiliation;
		self
	}

	#[must_use]
	pub fn entity(mut self, name: &'a str) -> Self {
		self.entity = Some(name);
		self
	}

	#[must_use]
	pub fn entity_type(mut self, name: &'a str) -> Self {
		self.entity_type = Some(name);
		self
	}

	#[must_use]
	pub fn entity_subtype(mut self, name: &'a str) -> Self {
		self.entity_subtype = Some(name);
		self
	}

	#[must_use]
	pub fn exact_only(mut self) -> Self {
		self.exact_only = true;
		self
	}

	/// Returns whether a row survives the name filters.
	pub(crate) fn matches(&self, record: &EntityRecord) -> bool {
		if self.exact_only {
			return record.entity == self.entity.unwrap_or_default()
				&& record.entity_type == self.entity_type.unwrap_or_default()
				&& record.entity_subtype == self.entity_subtype.unwrap_or_default();
		}
		cascade(record, self.entity, self.entity_type, self.entity_subtype)
	}
}

/// Applies entity, then type, then subtype filters, stopping at the first
/// filter that is not given.
pub(crate) fn cascade(
	record: &EntityRecord,
	entity: Option<&str>,
	entity_type: Option<&str>,
	entity_subtype: Option<&str>,
) -> bool {
	let stages = [
		(given(entity), record.entity.as_str()),
		(given(entity_type), record.entity_type.as_str()),
		(given(entity_subtype), record.entity_subtype.as_str()),
	];
	for (wanted, actual) in stages {
		match wanted {
			Some(wanted) if wanted != actual => return false,
			Some(_) => {}
			None => break,
		}
	}
	true
}

/// Treats empty strings as absent.
pub(crate) fn given(value: Option<&str>) -> Option<&str> {
	value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn record(entity: &str, entity_type: &str, entity_subtype: &str) -> EntityRecord {
		EntityRecord {
			symbol_set: "10".into(),
			code: "121100".into(),
			geometry_type: "Point".into(),
			entity: entity.into(),
			entity_type: entity_type.into(),
			entity_subtype: entity_subtype.into(),
		}
	}

	#[test]
	fn test_cascade_stops_at_first_absent_stage() {
		let row = record("Infantry", "Mechanized", "");
		assert!(cascade(&row, None, Some("Other"), None));
		assert!(cascade(&row, Some("Infantry"), None, Some("Other")));
		assert!(cascade(&row, Some("Infantry"), Some(""), Some("Other")));
		assert!(!cascade(&row, Some("Infantry"), Some("Other"), None));
		assert!(!cascade(&row, Some("Armor"), None, None));
	}

	#[test]
	fn test_exact_matches_blanks() {
		let row = record("Infantry", "", "");
		assert!(SymbolQuery::new().entity("Infantry").exact_only().matches(&row));
		assert!(
			!SymbolQuery::new()
				.entity("Infantry")
				.entity_type("Mechanized")
				.exact_only()
				.matches(&row)
		);
	}
}
