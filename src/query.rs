use crate::access::KeyPath;
use crate::document::Document;
use crate::error::{IniError, Result};
use regex::Regex;

/// A key found by [`find_keys`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMatch<'a> {
	pub section: &'a str,
	pub key: &'a str,
	pub value: &'a str,
}

impl KeyMatch<'_> {
	/// The `section::key` path this match was tested against.
	pub fn path(&self) -> String {
		KeyPath {
			section: self.section,
			key: self.key,
		}
		.to_string()
	}
}

/// Compile a regex pattern string.
pub fn compile_pattern(pattern: &str) -> Result<Regex> {
	Regex::new(pattern).map_err(|source| IniError::InvalidPattern {
		pattern: pattern.to_string(),
		source,
	})
}

/// Every entry whose `section::key` path matches `pattern`, in section then
/// key order.
pub fn find_keys<'a>(doc: &'a Document, pattern: &Regex) -> Vec<KeyMatch<'a>> {
	all_keys(doc)
		.into_iter()
		.filter(|m| pattern.is_match(&m.path()))
		.collect()
}

/// Every entry in the document, in section then key order.
pub fn all_keys(doc: &Document) -> Vec<KeyMatch<'_>> {
	doc.iter()
		.flat_map(|(section, entries)| {
			entries.iter().map(move |(key, value)| KeyMatch {
				section,
				key,
				value,
			})
		})
		.collect()
}
