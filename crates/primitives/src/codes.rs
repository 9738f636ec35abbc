use std::borrow::Cow;

use thiserror::Error;

/// Errors raised while formatting or parsing fixed-width codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
	/// A code does not appear in the code table of its enumeration.
	#[error("unknown {kind} code: {code:?}")]
	UnknownCode {
		/// Name of the enumeration being parsed.
		kind: &'static str,
		/// The rejected input.
		code: String,
	},

	/// A symbol identity code string has the wrong shape.
	#[error("malformed SIDC {sidc:?}: {reason}")]
	MalformedSidc {
		/// The rejected input.
		sidc: String,
		/// What was wrong with it.
		reason: &'static str,
	},

	/// The SIDC version digits are not a supported revision.
	#[error("unsupported SIDC version: {0}")]
	UnsupportedVersion(String),
}

/// Result type for code operations.
pub type Result<T> = std::result::Result<T, CodeError>;

/// Left-pads a numeric code with zeros up to `width` characters.
///
/// Non-numeric, empty, or already wide enough input is returned unchanged.
pub fn pad_code(code: &str, width: usize) -> Cow<'_, str> {
	if !code.is_empty() && code.len() < width && code.bytes().all(|b| b.is_ascii_digit()) {
		Cow::Owned(format!("{code:0>width$}"))
	} else {
		Cow::Borrowed(code)
	}
}

/// Declares an enumeration together with its fixed-width code table.
///
/// Generates `code`, `from_code` and `all`, plus the strum derives used for
/// display names and iteration.
macro_rules! coded_enum {
	(
		$(#[$meta:meta])*
		$vis:vis enum $name:ident ($width:literal) {
			$(
				$(#[$vmeta:meta])*
				$variant:ident = $code:literal
			),+ $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(
			Debug,
			Clone,
			Copy,
			PartialEq,
			Eq,
			Hash,
			PartialOrd,
			Ord,
			::strum::Display,
			::strum::EnumString,
			::strum::EnumIter,
			::strum::IntoStaticStr,
			::serde::Serialize,
			::serde::Deserialize,
		)]
		$vis enum $name {
			$(
				$(#[$vmeta])*
				$variant,
			)+
		}

		impl $name {
			/// Width of the formatted code in characters.
			pub const WIDTH: usize = $width;

			/// Returns the fixed-width code for this value.
			pub const fn code(self) -> &'static str {
				match self {
					$( Self::$variant => $code, )+
				}
			}

			/// Parses a code, left-padding short numeric input with zeros.
			pub fn from_code(code: &str) -> $crate::codes::Result<Self> {
				let padded = $crate::codes::pad_code(code.trim(), Self::WIDTH);
				match padded.as_ref() {
					$( $code => Ok(Self::$variant), )+
					_ => Err($crate::codes::CodeError::UnknownCode {
						kind: stringify!($name),
						code: code.to_string(),
					}),
				}
			}

			/// Iterates every value in declaration order.
			pub fn all() -> impl Iterator<Item = Self> {
				<Self as ::strum::IntoEnumIterator>::iter()
			}
		}
	};
}

pub(crate) use coded_enum;
