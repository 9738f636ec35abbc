//! Error types for reference table loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or decoding a table.
#[derive(Debug, Error)]
pub enum TableError {
	/// Error opening a table file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to open.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// The delimited text could not be parsed.
	#[error("CSV error: {0}")]
	Csv(#[from] csv::Error),

	/// A column the record type needs is not in the header row.
	#[error("table {table} is missing required column {column:?}")]
	MissingColumn {
		/// Name of the table being decoded.
		table: &'static str,
		/// The absent column.
		column: &'static str,
	},

	/// A row could not be decoded into a record.
	#[error("table {table} row {row}: {source}")]
	Record {
		/// Name of the table being decoded.
		table: &'static str,
		/// Zero based data row index.
		row: usize,
		/// The decoding error.
		source: csv::Error,
	},

	/// A table loaded without any rows or columns.
	#[error("table at {0} has no rows or no columns")]
	Empty(PathBuf),
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;

/// Non-fatal problem found while validating reference rows.
///
/// Warnings are collected at load time; the offending rows stay in the table
/// but are unreachable through typed queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableWarning {
	/// A row's symbol set code is not in the symbol set code table.
	UnknownSymbolSet {
		/// Name of the table holding the row.
		table: &'static str,
		/// Zero based data row index.
		row: usize,
		/// The unrecognized code.
		code: String,
	},
	/// A row's geometry text names none of the known shapes.
	UnknownGeometry {
		/// Zero based data row index.
		row: usize,
		/// The unrecognized text.
		geometry: String,
	},
	/// A modifier row uses a modifier number other than 1 or 2.
	InvalidModifierNumber {
		/// Zero based data row index.
		row: usize,
		/// The rejected cell text.
		number: String,
	},
}

impl std::fmt::Display for TableWarning {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			TableWarning::UnknownSymbolSet { table, row, code } => {
				write!(f, "{table} row {row}: unknown symbol set code {code:?}")
			}
			TableWarning::UnknownGeometry { row, geometry } => {
				write!(f, "entities row {row}: unknown geometry type {geometry:?}")
			}
			TableWarning::InvalidModifierNumber { row, number } => {
				write!(f, "modifiers row {row}: modifier number {number:?} is not 1 or 2")
			}
		}
	}
}
