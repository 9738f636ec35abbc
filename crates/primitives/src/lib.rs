//! Core types for military symbol identity codes.
//!
//! A symbol identity code (SIDC) is decomposed into typed fields: symbol set,
//! standard identity (context + affiliation), status, amplifiers
//! (HQ/task force/dummy, echelon/mobility), a six digit entity code and two
//! sector modifier codes. Every enumerated field carries an explicit
//! bidirectional code table so that values can be formatted to, and parsed
//! from, the fixed-width numeric strings used in file names and reference
//! tables.

/// Fixed-width code tables and code errors.
pub mod codes;
/// Amplifier enumerations: HQ/task force/dummy and echelon/mobility.
pub mod amplifier;
/// Standard identity enumerations: context, affiliation and status.
pub mod identity;
/// Rendering geometry of a symbol.
pub mod shape;
/// Decoded symbol identity code.
pub mod sidc;
/// Symbol set (top level category) enumeration.
pub mod symbol_set;
/// The military symbol value type.
pub mod symbol;

pub use amplifier::{EchelonMobility, HqTfDummy};
pub use codes::{CodeError, Result, pad_code};
pub use identity::{Affiliation, Context, Status};
pub use shape::Shape;
pub use sidc::{NAME_SEPARATOR, SymbolIdCode, well_formed_name};
pub use symbol::MilitarySymbol;
pub use symbol_set::SymbolSet;
