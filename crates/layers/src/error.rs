//! Error types for layer resolution.

use std::path::PathBuf;

use milsym_primitives::SymbolSet;
use thiserror::Error;

/// Reasons a symbol identity could not be resolved to image layers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
	/// The configured image root does not exist.
	#[error("image root does not exist: {}", .0.display())]
	ImageRootMissing(PathBuf),

	/// The identity has no symbol set or no numeric entity code.
	#[error("symbol identity is not valid: symbol set {symbol_set:?}, entity code {entity_code:?}")]
	InvalidSymbol {
		/// The identity's symbol set.
		symbol_set: Option<SymbolSet>,
		/// The identity's entity code.
		entity_code: String,
	},

	/// Resolution produced no layers at all.
	#[error("no graphic layers resolved")]
	NoLayers,
}

/// Result type for layer resolution.
pub type Result<T> = std::result::Result<T, ResolveError>;
