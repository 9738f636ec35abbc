//! Symbol identity to image layer resolution.
//!
//! A rendered symbol is a stack of SVG files under one image root:
//!
//! ```text
//! <root>/Frames/<affiliation><frame set>.svg
//! <root>/Appendices/<folder>/<symbol set><entity code>[.svg | _0.svg]
//! <root>/Appendices/<folder>/mod1/<symbol set><modifier code>1.svg
//! <root>/Appendices/<folder>/mod2/<symbol set><modifier code>2.svg
//! <root>/Echelon/03100<echelon>.svg
//! ```
//!
//! [`LayerResolver`] builds that stack from a [`SymbolIdCode`] using the
//! folder and frame tables in [`ResolverConfig`], asking a [`PathOracle`]
//! which files exist.
//!
//! [`SymbolIdCode`]: milsym_primitives::SymbolIdCode

pub mod config;
pub mod error;
pub mod names;
pub mod oracle;
mod resolver;

#[cfg(test)]
mod tests;

pub use config::ResolverConfig;
pub use error::{ResolveError, Result};
pub use oracle::{FnOracle, FsOracle, PathOracle};
pub use resolver::{GraphicLayersExt, LayerResolver};
