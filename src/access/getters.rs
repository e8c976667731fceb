use crate::access::coerce::{parse_bool, parse_float, parse_int, split_list};
use crate::access::path::KeyPath;
use crate::document::Document;
use crate::error::{IniError, Result, ValueError};

impl Document {
	/// Raw value at a resolved path, if present.
	pub fn lookup(&self, path: KeyPath<'_>) -> Option<&str> {
		self.section(path.section)?.get(path.key)
	}

	/// Raw value for `key` (`"section::key"` or a default-section key).
	///
	/// Unlike [`Document::string`], this tells a missing key apart from one
	/// set to an empty value.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.lookup(KeyPath::parse(key))
	}

	/// Whether `key` resolves to a stored entry.
	pub fn contains(&self, key: &str) -> bool {
		self.get(key).is_some()
	}

	/// Raw value for `key`, or `""` when it is missing.
	pub fn string(&self, key: &str) -> String {
		self.raw(key).to_string()
	}

	/// The value split on `;`. A missing key yields `[""]`.
	pub fn strings(&self, key: &str) -> Vec<String> {
		split_list(self.raw(key))
	}

	/// Platform-width integer.
	pub fn int(&self, key: &str) -> Result<isize> {
		self.convert(key, "int", parse_int)
	}

	/// 32-bit signed integer.
	pub fn int32(&self, key: &str) -> Result<i32> {
		self.convert(key, "int32", parse_int)
	}

	/// 64-bit signed integer.
	pub fn int64(&self, key: &str) -> Result<i64> {
		self.convert(key, "int64", parse_int)
	}

	/// 32-bit unsigned integer.
	pub fn uint32(&self, key: &str) -> Result<u32> {
		self.convert(key, "uint32", parse_int)
	}

	/// 64-bit unsigned integer.
	pub fn uint64(&self, key: &str) -> Result<u64> {
		self.convert(key, "uint64", parse_int)
	}

	/// Decimal floating-point value.
	pub fn float(&self, key: &str) -> Result<f64> {
		self.convert(key, "float", parse_float)
	}

	/// Boolean from `1 t T TRUE true True` or `0 f F FALSE false False`.
	pub fn bool(&self, key: &str) -> Result<bool> {
		self.convert(key, "bool", parse_bool)
	}

	fn raw(&self, key: &str) -> &str {
		self.get(key).unwrap_or_default()
	}

	fn convert<T>(
		&self,
		key: &str,
		target: &'static str,
		parse: fn(&str) -> std::result::Result<T, ValueError>,
	) -> Result<T> {
		let value = self.raw(key);
		parse(value).map_err(|source| IniError::Conversion {
			key: key.trim().to_string(),
			value: value.to_string(),
			target,
			source,
		})
	}
}
