use crate::document::DEFAULT_SECTION;
use std::fmt;

/// Separator between section and key in a lookup string.
pub const PATH_SEPARATOR: &str = "::";

/// A lookup string resolved to the section and key it addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPath<'a> {
	pub section: &'a str,
	pub key: &'a str,
}

impl<'a> KeyPath<'a> {
	/// Resolve `section::key`, or a bare key in the default section.
	///
	/// The lookup is trimmed first. Only a string with exactly one separator
	/// names a section; anything else is taken whole as a default-section key.
	pub fn parse(lookup: &'a str) -> Self {
		let lookup = lookup.trim();

		match lookup.split_once(PATH_SEPARATOR) {
			Some((section, key)) if !key.contains(PATH_SEPARATOR) => Self { section, key },
			_ => Self {
				section: DEFAULT_SECTION,
				key: lookup,
			},
		}
	}
}

impl fmt::Display for KeyPath<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}{}{}", self.section, PATH_SEPARATOR, self.key)
	}
}
