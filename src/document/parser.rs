use crate::document::types::{DEFAULT_SECTION, Document};
use crate::error::{IniError, Result};
use std::path::Path;
use tracing::{debug, trace};

const UTF8_BOM: char = '\u{feff}';
const COMMENT: char = '#';
const SECTION_START: char = '[';
const SECTION_END: char = ']';
const ASSIGN: char = '=';
const QUOTE: char = '"';

/// What a single trimmed line of an INI file is.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
	Blank,
	Comment,
	Header(&'a str),
	Pair { key: &'a str, value: &'a str },
	Malformed(&'a str),
}

/// Parse an INI file from the given path.
///
/// The file must be UTF-8; other encodings fail as `IniError::Io` with
/// kind `InvalidData`.
pub fn parse_file(path: &Path) -> Result<Document> {
	let content = std::fs::read_to_string(path).map_err(|source| IniError::Io {
		path: path.to_path_buf(),
		source,
	})?;

	parse_str(&content, path)
}

/// Parse INI text (useful for testing). `origin` is recorded as the source
/// and used in error messages.
pub fn parse_str(content: &str, origin: &Path) -> Result<Document> {
	let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);
	let mut doc = Document::new();
	let mut current = DEFAULT_SECTION;

	for (index, raw) in content.lines().enumerate() {
		match classify(raw) {
			Line::Blank | Line::Comment => {}
			Line::Header(name) => {
				trace!(section = name, "section header");
				current = name;
				doc.section_mut(current);
			}
			Line::Pair { key, value } => {
				trace!(section = current, key, "entry");
				doc.section_mut(current)
					.insert(key.to_string(), value.to_string());
			}
			Line::Malformed(line) => {
				return Err(IniError::Format {
					path: origin.to_path_buf(),
					line_number: index + 1,
					line: line.to_string(),
				});
			}
		}
	}

	doc.push_source(origin.to_path_buf());
	debug!(
		path = %origin.display(),
		sections = doc.section_count(),
		entries = doc.entry_count(),
		"parsed INI document"
	);

	Ok(doc)
}

fn classify(raw: &str) -> Line<'_> {
	let line = raw.trim();

	if line.is_empty() {
		return Line::Blank;
	}
	if line.starts_with(COMMENT) {
		return Line::Comment;
	}
	if let Some(name) = line
		.strip_prefix(SECTION_START)
		.and_then(|rest| rest.strip_suffix(SECTION_END))
	{
		return Line::Header(name);
	}

	match line.split_once(ASSIGN) {
		Some((key, value)) => Line::Pair {
			key: key.trim(),
			value: unquote(value.trim()),
		},
		None => Line::Malformed(line),
	}
}

/// Strip one leading and one trailing quote from a value that starts quoted.
fn unquote(value: &str) -> &str {
	match value.strip_prefix(QUOTE) {
		Some(inner) => inner.strip_suffix(QUOTE).unwrap_or(inner),
		None => value,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::path::PathBuf;

	fn parse(content: &str) -> Result<Document> {
		parse_str(content, &PathBuf::from("test.ini"))
	}

	#[test]
	fn test_classify_lines() {
		assert_eq!(classify(""), Line::Blank);
		assert_eq!(classify("   \t"), Line::Blank);
		assert_eq!(classify("# note"), Line::Comment);
		assert_eq!(classify("   #indented"), Line::Comment);
		assert_eq!(classify("[game01]"), Line::Header("game01"));
		assert_eq!(classify("[ spaced ]"), Line::Header(" spaced "));
		assert_eq!(classify("[]"), Line::Header(""));
		assert_eq!(
			classify(" key = value "),
			Line::Pair {
				key: "key",
				value: "value"
			}
		);
		assert_eq!(classify("foo"), Line::Malformed("foo"));
		assert_eq!(classify("["), Line::Malformed("["));
	}

	#[test]
	fn test_split_at_first_equals() {
		assert_eq!(
			classify("url = a=b=c"),
			Line::Pair {
				key: "url",
				value: "a=b=c"
			}
		);
		assert_eq!(
			classify("empty ="),
			Line::Pair {
				key: "empty",
				value: ""
			}
		);
		assert_eq!(
			classify("= orphan"),
			Line::Pair {
				key: "",
				value: "orphan"
			}
		);
	}

	#[test]
	fn test_unquote() {
		assert_eq!(unquote("\"I am good\""), "I am good");
		assert_eq!(unquote("\"open"), "open");
		assert_eq!(unquote("\"\""), "");
		assert_eq!(unquote("\""), "");
		assert_eq!(unquote("\"\"double\"\""), "\"double\"");
		assert_eq!(unquote("say \"hi\""), "say \"hi\"");
		assert_eq!(unquote("trailing\""), "trailing\"");
	}

	#[test]
	fn test_parse_empty_content() {
		let doc = parse("").unwrap();
		assert!(doc.is_empty());
		assert_eq!(doc.sources(), &[PathBuf::from("test.ini")]);
	}

	#[test]
	fn test_keys_before_header_go_to_default() {
		let doc = parse(
			r#"
#first ini test config
server_id = 100001
server_name = name1
[game01]
score = 1.2
"#,
		)
		.unwrap();

		let default = doc.section(DEFAULT_SECTION).unwrap();
		assert_eq!(default.get("server_id"), Some("100001"));
		assert_eq!(default.get("server_name"), Some("name1"));
		assert!(!default.contains("score"));
		assert_eq!(doc.section("game01").unwrap().get("score"), Some("1.2"));
	}

	#[test]
	fn test_header_only_section_exists() {
		let doc = parse("[empty]\n[full]\nk = v\n").unwrap();
		assert!(doc.section("empty").unwrap().is_empty());
		assert_eq!(doc.section("full").unwrap().len(), 1);
		assert!(doc.section(DEFAULT_SECTION).is_none());
	}

	#[test]
	fn test_repeated_key_overwrites() {
		let doc = parse("k = first\nk = second\n").unwrap();
		assert_eq!(doc.section(DEFAULT_SECTION).unwrap().get("k"), Some("second"));
	}

	#[test]
	fn test_reopened_section_accumulates() {
		let doc = parse("[a]\nx = 1\n[b]\ny = 2\n[a]\nz = 3\n").unwrap();
		let a = doc.section("a").unwrap();
		assert_eq!(a.get("x"), Some("1"));
		assert_eq!(a.get("z"), Some("3"));
		assert_eq!(doc.section_count(), 2);
	}

	#[test]
	fn test_no_inline_comments() {
		let doc = parse("color = blue # not a comment\n").unwrap();
		assert_eq!(
			doc.section(DEFAULT_SECTION).unwrap().get("color"),
			Some("blue # not a comment")
		);
	}

	#[test]
	fn test_bom_and_crlf() {
		let doc = parse("\u{feff}name = bom\r\n[s]\r\nk = v\r\n").unwrap();
		assert_eq!(doc.section(DEFAULT_SECTION).unwrap().get("name"), Some("bom"));
		assert_eq!(doc.section("s").unwrap().get("k"), Some("v"));
	}

	#[test]
	fn test_malformed_line_fails() {
		let result = parse("ok = 1\n\nfoo\nlater = 2\n");

		match result.unwrap_err() {
			IniError::Format {
				path,
				line_number,
				line,
			} => {
				assert_eq!(path, PathBuf::from("test.ini"));
				assert_eq!(line_number, 3);
				assert_eq!(line, "foo");
			}
			other => panic!("Expected Format error, got {other:?}"),
		}
	}

	#[test]
	fn test_parse_missing_file() {
		let result = parse_file(Path::new("/nonexistent/dir/config.ini"));
		match result.unwrap_err() {
			IniError::Io { path, source } => {
				assert_eq!(path, PathBuf::from("/nonexistent/dir/config.ini"));
				assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
			}
			other => panic!("Expected Io error, got {other:?}"),
		}
	}

	#[test]
	fn test_parse_invalid_utf8_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("binary.ini");
		std::fs::write(&path, [0x6b, 0x3d, 0xff, 0xfe]).unwrap();

		match parse_file(&path).unwrap_err() {
			IniError::Io { source, .. } => {
				assert_eq!(source.kind(), std::io::ErrorKind::InvalidData);
			}
			other => panic!("Expected Io error, got {other:?}"),
		}
	}
}
