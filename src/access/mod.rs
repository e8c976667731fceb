//! Lookup and typed coercion over a parsed [`Document`](crate::document::Document).
//!
//! Lookups take a single string: `"section::key"`, or a bare key that lives
//! in the default section. Getters are implemented directly on `Document`.

pub mod coerce;
mod getters;
pub mod path;

pub use coerce::LIST_SEPARATOR;
pub use path::{KeyPath, PATH_SEPARATOR};
