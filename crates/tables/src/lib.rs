//! Reference table loading.
//!
//! Symbol lookup is driven by three delimited text tables:
//!
//! * entities (`All_Entities.csv`): one row per entity / type / subtype
//! * modifiers (`All_Modifiers.csv`): sector 1 and 2 modifiers per symbol set
//! * legacy mapping (`LegacyMappingTable.csv`): legacy to current codes,
//!   kept as an untyped [`Table`]
//!
//! [`Table`] is the row/column read interface; [`records`] decodes the entity
//! and modifier tables into typed rows with fixed-width codes.

pub mod error;
pub mod records;
pub mod table;

use std::path::{Path, PathBuf};

pub use error::{Result, TableError, TableWarning};
pub use records::{EntityRecord, ModifierRecord};
pub use table::Table;

/// Default file name of the entity table.
pub const ENTITIES_FILE: &str = "All_Entities.csv";
/// Default file name of the modifier table.
pub const MODIFIERS_FILE: &str = "All_Modifiers.csv";
/// Default file name of the legacy code mapping table.
pub const LEGACY_FILE: &str = "LegacyMappingTable.csv";

/// Locations of the three reference tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
	/// Entity table path.
	pub entities: PathBuf,
	/// Modifier table path.
	pub modifiers: PathBuf,
	/// Legacy mapping table path.
	pub legacy: PathBuf,
}

impl DataPaths {
	/// Default file names inside `dir`.
	pub fn in_dir(dir: impl AsRef<Path>) -> Self {
		let dir = dir.as_ref();
		Self {
			entities: dir.join(ENTITIES_FILE),
			modifiers: dir.join(MODIFIERS_FILE),
			legacy: dir.join(LEGACY_FILE),
		}
	}
}

/// The three raw reference tables.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTables {
	/// Entity table.
	pub entities: Table,
	/// Modifier table.
	pub modifiers: Table,
	/// Legacy mapping table.
	pub legacy: Table,
}

impl ReferenceTables {
	/// Loads all three tables, failing on the first one that is missing,
	/// malformed or empty.
	pub fn load(paths: &DataPaths) -> Result<Self> {
		let tables = Self {
			entities: load_non_empty(&paths.entities)?,
			modifiers: load_non_empty(&paths.modifiers)?,
			legacy: load_non_empty(&paths.legacy)?,
		};
		tracing::info!(
			entities = tables.entities.row_count(),
			modifiers = tables.modifiers.row_count(),
			legacy = tables.legacy.row_count(),
			"loaded reference tables"
		);
		Ok(tables)
	}

	/// Returns true when every table has at least one row and one column.
	pub fn is_valid(&self) -> bool {
		self.entities.is_valid() && self.modifiers.is_valid() && self.legacy.is_valid()
	}
}

fn load_non_empty(path: &Path) -> Result<Table> {
	let table = Table::load(path)?;
	if !table.is_valid() {
		return Err(TableError::Empty(path.to_path_buf()));
	}
	Ok(table)
}
