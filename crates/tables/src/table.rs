//! In-memory row/column table loaded from delimited text.

use std::io;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::de::DeserializeOwned;

use crate::error::{Result, TableError};

/// A header row plus data rows, all as text.
///
/// Cells are trimmed on load. Short rows are allowed; missing cells read as
/// absent rather than failing the whole load.
#[derive(Debug, Clone, Default)]
pub struct Table {
	headers: StringRecord,
	rows: Vec<StringRecord>,
}

impl Table {
	/// Parses comma separated text with a header row.
	pub fn from_reader<R: io::Read>(reader: R) -> Result<Self> {
		let mut reader = ReaderBuilder::new()
			.trim(Trim::All)
			.flexible(true)
			.from_reader(reader);

		let headers = reader.headers()?.clone();
		let rows = reader.records().collect::<std::result::Result<Vec<_>, _>>()?;

		Ok(Self { headers, rows })
	}

	/// Loads a table from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let file = std::fs::File::open(path).map_err(|error| TableError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let table = Self::from_reader(io::BufReader::new(file))?;
		tracing::debug!(
			path = %path.display(),
			rows = table.row_count(),
			columns = table.column_count(),
			"loaded table"
		);
		Ok(table)
	}

	/// Column names in header order.
	pub fn headers(&self) -> impl Iterator<Item = &str> {
		self.headers.iter()
	}

	/// Number of data rows.
	pub fn row_count(&self) -> usize {
		self.rows.len()
	}

	/// Number of header columns.
	pub fn column_count(&self) -> usize {
		self.headers.len()
	}

	/// Returns true when the table has at least one row and one column.
	pub fn is_valid(&self) -> bool {
		self.row_count() > 0 && self.column_count() > 0
	}

	/// Index of a column by exact header name.
	pub fn column_index(&self, name: &str) -> Option<usize> {
		self.headers.iter().position(|h| h == name)
	}

	/// Reads one cell by row index and column name.
	pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
		let col = self.column_index(column)?;
		self.rows.get(row)?.get(col)
	}

	/// Iterates the values of one column; short rows yield empty strings.
	pub fn column<'a>(&'a self, name: &str) -> Option<impl Iterator<Item = &'a str> + use<'a>> {
		let col = self.column_index(name)?;
		Some(self.rows.iter().map(move |row| row.get(col).unwrap_or("")))
	}

	/// Fails unless every listed column is present.
	pub fn require_columns(&self, table: &'static str, columns: &[&'static str]) -> Result<()> {
		match columns.iter().find(|c| self.column_index(c).is_none()) {
			Some(&column) => Err(TableError::MissingColumn { table, column }),
			None => Ok(()),
		}
	}

	/// Decodes every row into a record keyed by header name.
	pub fn records<T: DeserializeOwned>(&self, table: &'static str) -> Result<Vec<T>> {
		self.rows
			.iter()
			.enumerate()
			.map(|(row, record)| {
				record
					.deserialize(Some(&self.headers))
					.map_err(|source| TableError::Record { table, row, source })
			})
			.collect()
	}
}
