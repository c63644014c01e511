use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// Runtime value a chain is executed against.
///
/// Keys arrive untyped (command line, config, other services), so a key may be
/// numeric or textual regardless of the field type it is eventually compared
/// with or assigned into.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchKey {
	/// No key supplied.
	#[default]
	Null,
	/// Integer key.
	Int(i64),
	/// Textual key.
	Text(String),
}

impl SearchKey {
	/// Parses user input: integer when the trimmed text is an `i64`, text otherwise.
	pub fn parse(input: &str) -> Self {
		match input.trim().parse::<i64>() {
			Ok(value) => SearchKey::Int(value),
			Err(_) => SearchKey::Text(input.to_string()),
		}
	}

	/// Returns true for keys that must not be searched for: null, empty text or zero.
	///
	/// Textual zeros count as zero when they parse as a 32-bit integer, so `"0"`,
	/// `" 0 "`, `"-0"` and `"00"` are all blank.
	pub fn is_blank(&self) -> bool {
		match self {
			SearchKey::Null => true,
			SearchKey::Int(value) => *value == 0,
			SearchKey::Text(text) => text.is_empty() || text.trim().parse::<i32>() == Ok(0),
		}
	}

	/// Returns the integer value, parsing textual keys.
	pub fn as_int(&self) -> Option<i64> {
		match self {
			SearchKey::Null => None,
			SearchKey::Int(value) => Some(*value),
			SearchKey::Text(text) => text.trim().parse().ok(),
		}
	}

	/// Compares two keys across representations.
	///
	/// Integers compare by value, texts by exact string equality, and a mixed
	/// pair compares the integer with the parsed text. `Null` matches nothing.
	pub fn matches(&self, other: &SearchKey) -> bool {
		match (self, other) {
			(SearchKey::Null, _) | (_, SearchKey::Null) => false,
			(SearchKey::Int(a), SearchKey::Int(b)) => a == b,
			(SearchKey::Text(a), SearchKey::Text(b)) => a == b,
			(SearchKey::Int(a), SearchKey::Text(text)) | (SearchKey::Text(text), SearchKey::Int(a)) => text.trim().parse::<i64>().ok() == Some(*a),
		}
	}
}

impl fmt::Display for SearchKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			SearchKey::Null => f.write_str("null"),
			SearchKey::Int(value) => write!(f, "{value}"),
			SearchKey::Text(text) => f.write_str(text),
		}
	}
}

macro_rules! impl_from_int {
	($($ty:ty),* $(,)?) => {
		$(
			impl From<$ty> for SearchKey {
				fn from(value: $ty) -> Self {
					SearchKey::Int(i64::from(value))
				}
			}
		)*
	};
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<String> for SearchKey {
	fn from(value: String) -> Self {
		SearchKey::Text(value)
	}
}

impl From<&str> for SearchKey {
	fn from(value: &str) -> Self {
		SearchKey::Text(value.to_string())
	}
}

impl<T: Into<SearchKey>> From<Option<T>> for SearchKey {
	fn from(value: Option<T>) -> Self {
		value.map_or(SearchKey::Null, Into::into)
	}
}

/// Failure converting a [`SearchKey`] into a typed field value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
	/// The key was null.
	#[error("cannot assign a null key to a {target} field")]
	Null {
		/// Target field type.
		target: &'static str,
	},
	/// A textual key could not be parsed as a number.
	#[error("key {key:?} is not a valid {target}")]
	NotNumeric {
		/// Offending key text.
		key: String,
		/// Target field type.
		target: &'static str,
	},
	/// The key is numeric but does not fit the field type.
	#[error("key {key} is out of range for {target}")]
	OutOfRange {
		/// Offending key value.
		key: i64,
		/// Target field type.
		target: &'static str,
	},
}

/// Field types a runtime key can be assigned into.
pub trait FromSearchKey: Sized {
	/// Converts the key into a field value.
	fn from_search_key(key: &SearchKey) -> Result<Self, KeyError>;
}

fn integer_key(key: &SearchKey, target: &'static str) -> Result<i64, KeyError> {
	match key {
		SearchKey::Null => Err(KeyError::Null { target }),
		SearchKey::Int(value) => Ok(*value),
		SearchKey::Text(text) => text.trim().parse().map_err(|_| KeyError::NotNumeric { key: text.clone(), target }),
	}
}

macro_rules! impl_from_search_key_int {
	($($ty:ty),* $(,)?) => {
		$(
			impl FromSearchKey for $ty {
				fn from_search_key(key: &SearchKey) -> Result<Self, KeyError> {
					let target = stringify!($ty);
					let value = integer_key(key, target)?;
					<$ty>::try_from(value).map_err(|_| KeyError::OutOfRange { key: value, target })
				}
			}
		)*
	};
}

impl_from_search_key_int!(i32, u32, u64);

impl FromSearchKey for i64 {
	fn from_search_key(key: &SearchKey) -> Result<Self, KeyError> {
		integer_key(key, "i64")
	}
}

impl FromSearchKey for String {
	fn from_search_key(key: &SearchKey) -> Result<Self, KeyError> {
		match key {
			SearchKey::Null => Err(KeyError::Null { target: "String" }),
			other => Ok(other.to_string()),
		}
	}
}
