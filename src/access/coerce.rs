use crate::error::ValueError;
use std::num::ParseIntError;
use std::str::FromStr;

/// Literals accepted as `true`.
const TRUE_LITERALS: &[&str] = &["1", "t", "T", "TRUE", "true", "True"];

/// Literals accepted as `false`.
const FALSE_LITERALS: &[&str] = &["0", "f", "F", "FALSE", "false", "False"];

/// Separator for list values.
pub const LIST_SEPARATOR: char = ';';

/// Parse a base-10 integer of width `T`. Out-of-range input is an error.
pub fn parse_int<T>(raw: &str) -> Result<T, ValueError>
where
	T: FromStr<Err = ParseIntError>,
{
	Ok(raw.parse::<T>()?)
}

pub fn parse_float(raw: &str) -> Result<f64, ValueError> {
	Ok(raw.parse::<f64>()?)
}

pub fn parse_bool(raw: &str) -> Result<bool, ValueError> {
	if TRUE_LITERALS.contains(&raw) {
		Ok(true)
	} else if FALSE_LITERALS.contains(&raw) {
		Ok(false)
	} else {
		Err(ValueError::Bool {
			literal: raw.to_string(),
		})
	}
}

/// Split a list value. Empty input yields one empty item.
pub fn split_list(raw: &str) -> Vec<String> {
	raw.split(LIST_SEPARATOR).map(str::to_string).collect()
}
