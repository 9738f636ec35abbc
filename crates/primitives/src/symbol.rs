use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::sidc::SymbolIdCode;

/// A military symbol: its identity plus the ordered image layers that
/// render it.
///
/// The layer list is only ever replaced wholesale with the output of a layer
/// resolver; the first entry is drawn first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilitarySymbol {
	/// The decoded identity.
	pub id: SymbolIdCode,
	graphic_layers: Vec<PathBuf>,
}

impl MilitarySymbol {
	/// Creates a symbol with no graphic layers.
	pub fn new(id: SymbolIdCode) -> Self {
		Self {
			id,
			graphic_layers: Vec::new(),
		}
	}

	/// Returns the ordered graphic layers.
	pub fn graphic_layers(&self) -> &[PathBuf] {
		&self.graphic_layers
	}

	/// Replaces the graphic layers, returning the previous list.
	pub fn replace_graphic_layers(&mut self, layers: Vec<PathBuf>) -> Vec<PathBuf> {
		std::mem::replace(&mut self.graphic_layers, layers)
	}

	/// Display name of the symbol.
	pub fn name(&self) -> &str {
		&self.id.name
	}
}

impl From<SymbolIdCode> for MilitarySymbol {
	fn from(id: SymbolIdCode) -> Self {
		Self::new(id)
	}
}
