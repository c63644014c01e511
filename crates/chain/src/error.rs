use chainsearch_dispatch::SpecializationError;
use chainsearch_primitives::{KeyError, SearchKey};
use chainsearch_selector::SelectorError;
use chainsearch_store::StoreError;

/// Failure registering a search or insert.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainError {
	#[error("invalid selector: {0}")]
	Selector(#[from] SelectorError),
	#[error(transparent)]
	Specialization(#[from] SpecializationError),
}

/// Failure inserting a new row during a run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InsertError {
	#[error("cannot assign key {key} to {entity}.{field}: {source}")]
	Assign {
		entity: &'static str,
		field: String,
		key: SearchKey,
		#[source]
		source: KeyError,
	},
	#[error(transparent)]
	Store(#[from] StoreError),
}
