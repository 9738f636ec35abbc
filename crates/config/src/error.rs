//! Error types for configuration parsing.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when parsing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing KDL syntax.
	#[error("KDL parse error: {0}")]
	Kdl(#[from] kdl::KdlError),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A node is present but lacks its string argument.
	#[error("missing string value for {0}")]
	MissingField(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Non-fatal issues encountered while parsing configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
	/// A folder or frame entry names no known symbol set.
	UnknownSymbolSet {
		/// The block holding the entry.
		section: &'static str,
		/// The unrecognized name.
		name: String,
	},
	/// A node this configuration does not understand.
	UnknownNode {
		/// The node name.
		name: String,
		/// Where the node was found.
		found_in: &'static str,
	},
}

impl std::fmt::Display for ConfigWarning {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ConfigWarning::UnknownSymbolSet { section, name } => {
				write!(f, "'{name}' in {section} block is not a symbol set and will be ignored")
			}
			ConfigWarning::UnknownNode { name, found_in } => {
				write!(f, "unknown node '{name}' in {found_in} will be ignored")
			}
		}
	}
}
