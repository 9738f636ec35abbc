use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Rendering geometry of a symbol.
///
/// Line and area geometries are control-measure style graphics that never
/// carry center icon modifiers.
#[derive(
	Debug, Default, Display, EnumString, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Shape {
	/// A single anchor point with a framed or frameless icon.
	#[default]
	Point,
	/// A multipoint line.
	Line,
	/// A closed multipoint area.
	Area,
}

impl Shape {
	/// Parses a reference table geometry column.
	///
	/// Text that names none of the known geometries resolves to
	/// [`Shape::Point`].
	pub fn from_geometry(text: &str) -> Self {
		match text.trim().parse() {
			Ok(shape) => shape,
			Err(_) => {
				tracing::debug!(geometry = text, "unmapped geometry type, using point");
				Self::Point
			}
		}
	}

	/// Returns whether the shape is a line or area graphic.
	pub const fn is_multipoint(self) -> bool {
		matches!(self, Self::Line | Self::Area)
	}
}
