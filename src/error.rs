use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;

/// Library-level structured errors for iniconf.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum IniError {
	#[error("Failed to read INI file: {path}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Malformed line {line_number} in {path}: \"{line}\", should be key = value")]
	Format {
		path: PathBuf,
		line_number: usize,
		line: String,
	},

	#[error("Cannot convert value of {key} (\"{value}\") to {target}")]
	Conversion {
		key: String,
		value: String,
		target: &'static str,
		#[source]
		source: ValueError,
	},

	#[error("Invalid key pattern: {pattern}")]
	InvalidPattern {
		pattern: String,
		#[source]
		source: regex::Error,
	},
}

/// Why a raw value failed to coerce into a typed value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValueError {
	#[error(transparent)]
	Int(#[from] ParseIntError),

	#[error(transparent)]
	Float(#[from] ParseFloatError),

	#[error("invalid boolean literal: \"{literal}\"")]
	Bool { literal: String },
}

/// Result type alias using IniError.
pub type Result<T> = std::result::Result<T, IniError>;
