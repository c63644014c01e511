//! Shared primitives for chained lookups: the runtime search key, conversion of
//! that key into typed entity fields, and rendering of projected fields into
//! outcome payload text.

/// Runtime search key and key-to-field conversion.
pub mod key;
/// Payload rendering for projected field values.
pub mod render;

pub use key::{FromSearchKey, KeyError, SearchKey};
pub use render::Render;

/// Returns the unqualified name of `T` (`chainsearch_sample::Customer` becomes `Customer`).
///
/// Generic parameters are kept verbatim, only the leading module path is dropped.
pub fn short_type_name<T: ?Sized>() -> &'static str {
	let full = std::any::type_name::<T>();
	let head = full.split('<').next().unwrap_or(full);
	match head.rfind("::") {
		Some(pos) => &full[pos + 2..],
		None => full,
	}
}

#[cfg(test)]
mod tests {
	use super::short_type_name;

	#[allow(dead_code)]
	struct Plain;
	#[allow(dead_code)]
	struct Wrapper<T>(T);

	#[test]
	fn short_name_strips_module_path() {
		assert_eq!(short_type_name::<Plain>(), "Plain");
		assert_eq!(short_type_name::<String>(), "String");
		assert_eq!(short_type_name::<i64>(), "i64");
	}

	#[test]
	fn short_name_keeps_generic_arguments() {
		let name = short_type_name::<Wrapper<Plain>>();
		assert!(name.starts_with("Wrapper<"), "{name}");
	}
}
