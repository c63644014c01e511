//! The typed bodies of the search and insert templates.
//!
//! Each function is written once, generic over the entity type, and bound per
//! type when a search or insert is registered.

use chainsearch_primitives::{Render, SearchKey, short_type_name};
use chainsearch_selector::{Assigner, Selector};
use chainsearch_store::{Entity, StoreError, TypedStore};

use crate::error::InsertError;

pub(super) type SearchResult = Result<Option<String>, StoreError>;
pub(super) type InsertResult = Result<String, InsertError>;

/// Projects the first row of `T` whose matched field equals `key`.
///
/// An empty projection (for example a `None` field) counts as a miss.
pub(super) fn find_first<T, K, V>(store: &TypedStore, matcher: &Selector<T, K>, getter: &Selector<T, V>, key: &SearchKey) -> SearchResult
where
	T: Entity,
	K: Into<SearchKey> + 'static,
	V: Render + 'static,
{
	store.read::<T, _>(|rows| {
		rows.iter()
			.find(|row| Into::<SearchKey>::into(matcher.get(row)).matches(key))
			.map(|row| getter.get(row).render())
			.filter(|text| !text.is_empty())
	})
}

/// Builds a default `T`, writes `key` into it, appends it and projects the
/// stored row, which observers may have rewritten.
pub(super) fn insert_new<T, V>(store: &TypedStore, setter: &Assigner<T>, field: &str, returner: &Selector<T, V>, key: &SearchKey) -> InsertResult
where
	T: Entity + Default,
	V: Render + 'static,
{
	let mut row = T::default();
	setter.assign(&mut row, key).map_err(|source| InsertError::Assign {
		entity: short_type_name::<T>(),
		field: field.to_string(),
		key: key.clone(),
		source,
	})?;
	let stored = store.append(row)?;
	Ok(returner.get(&stored).render())
}
