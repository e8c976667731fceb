//! iniconf - INI configuration reader with typed `section::key` accessors.
//!
//! This library provides:
//! - Parsing of INI files into sections of raw key/value strings
//! - Lookup by `"section::key"` or by a bare default-section key
//! - Typed getters for integers, floats, booleans and `;`-separated lists
//! - Regex search over key paths
//!
//! # Example
//!
//! ```no_run
//! use iniconf::Document;
//!
//! let config = Document::load("server.ini").unwrap();
//!
//! let server_id = config.int("server_id").unwrap();
//! let players = config.strings("game01::player_list");
//! let gcm = config.bool("game01::gcm").unwrap_or(false);
//!
//! println!("{server_id}: {} players, gcm={gcm}", players.len());
//! ```

pub mod access;
pub mod document;
pub mod error;
pub mod query;

pub use access::KeyPath;
pub use document::{DEFAULT_SECTION, Document, Section, parse_file, parse_str};
pub use error::{IniError, Result, ValueError};
