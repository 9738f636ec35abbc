//! Reference lookup engine.
//!
//! [`SymbolLookup`] answers name and code queries over the entity, modifier
//! and legacy mapping tables loaded by `milsym-tables`:
//!
//! * symbol search with cascading entity / type / subtype filters
//!   ([`SymbolQuery`])
//! * distinct name listings for building pickers level by level
//! * entity and modifier code lookup by name
//! * best-effort symbol construction from a partial name
//!
//! Tables are installed once and then only read; queries never fail, they
//! return `None` or an empty list and log a warning.

mod engine;
mod index;
mod modifiers;
pub mod query;


pub use engine::SymbolLookup;
pub use query::SymbolQuery;
