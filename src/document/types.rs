use crate::document::parser::parse_file;
use crate::error::Result;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Section that collects keys appearing before any `[section]` header.
pub const DEFAULT_SECTION: &str = "default";

/// A named group of key/value pairs. Values are stored raw, as read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Section {
	entries: BTreeMap<String, String>,
}

impl Section {
	/// Raw value for `key`, if present.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.entries.get(key).map(String::as_str)
	}

	/// Whether `key` is present, even with an empty value.
	pub fn contains(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	/// Key names in sorted order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}

	/// `(key, raw value)` pairs in key order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Number of keys in this section.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// True for a header with no keys under it.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Store a value, returning the one it replaced.
	pub(crate) fn insert(&mut self, key: String, value: String) -> Option<String> {
		self.entries.insert(key, value)
	}

	fn extend(&mut self, other: Section) {
		self.entries.extend(other.entries);
	}
}

/// A parsed INI file: section name -> key -> raw value.
///
/// Once built, a document is only read through its accessors, so sharing a
/// `&Document` across threads needs no locking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
	sections: BTreeMap<String, Section>,

	/// Files parsed into this document, in load order.
	sources: Vec<PathBuf>,
}

impl Document {
	/// Create an empty document with no sections.
	pub fn new() -> Self {
		Self::default()
	}

	/// Parse the file at `path` into a new document.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		parse_file(path.as_ref())
	}

	/// Parse the file at `path` and layer its entries over this document.
	///
	/// Later values win for keys defined in both. On error `self` is left
	/// exactly as it was.
	pub fn parse(&mut self, path: impl AsRef<Path>) -> Result<()> {
		let parsed = parse_file(path.as_ref())?;
		self.merge(parsed);
		Ok(())
	}

	/// Look up a section by its exact name.
	pub fn section(&self, name: &str) -> Option<&Section> {
		self.sections.get(name)
	}

	/// Section names in sorted order.
	pub fn sections(&self) -> impl Iterator<Item = &str> {
		self.sections.keys().map(String::as_str)
	}

	/// `(name, section)` pairs in name order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Section)> {
		self.sections.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Number of sections, including the default one when used.
	pub fn section_count(&self) -> usize {
		self.sections.len()
	}

	/// Total number of keys across all sections.
	pub fn entry_count(&self) -> usize {
		self.sections.values().map(Section::len).sum()
	}

	/// True when no section has been created.
	pub fn is_empty(&self) -> bool {
		self.sections.is_empty()
	}

	/// Paths this document was parsed from.
	pub fn sources(&self) -> &[PathBuf] {
		&self.sources
	}

	/// Get or create the named section.
	pub(crate) fn section_mut(&mut self, name: &str) -> &mut Section {
		self.sections.entry(name.to_string()).or_default()
	}

	pub(crate) fn push_source(&mut self, path: PathBuf) {
		self.sources.push(path);
	}

	fn merge(&mut self, other: Document) {
		for (name, section) in other.sections {
			self.sections.entry(name).or_default().extend(section);
		}
		self.sources.extend(other.sources);
	}
}

impl Serialize for Document {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		self.sections.serialize(serializer)
	}
}
