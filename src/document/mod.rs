//! INI document model and parsing.
//!
//! This module handles:
//! - Line classification (blank, comment, header, key = value)
//! - Building the section -> key -> raw value table
//! - Layering several files into one document

pub mod parser;
pub mod types;

pub use parser::{parse_file, parse_str};
pub use types::{DEFAULT_SECTION, Document, Section};
