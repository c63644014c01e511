use std::fmt;
use std::sync::Arc;

use chainsearch_dispatch::{SpecializationCache, SpecializationError, Template, TypeWitness};
use chainsearch_primitives::{Render, SearchKey};
use chainsearch_selector::{Assigner, Selector};
use chainsearch_store::{Entity, TypedStore};
use indexmap::IndexSet;

use self::ops::{InsertResult, SearchResult};
use crate::error::ChainError;
use crate::outcome::Outcome;

mod ops;

/// Namespace used when none is configured.
pub const DEFAULT_NAMESPACE: &str = "default";

/// Whether a chain has anything to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainState {
	/// No search or insert registered yet.
	Configuring,
	/// At least one search or insert registered.
	Ready,
}

/// Ordered chain of searches with insert fallbacks.
///
/// ```
/// use chainsearch_chain::{ChainBuilder, Outcome};
/// use chainsearch_selector::{assign, field};
/// use chainsearch_store::{Mutability, TypedStore};
///
/// #[derive(Clone, Default)]
/// struct Customer { id: i64, name: String }
/// #[derive(Clone, Default)]
/// struct Contact { id: i64 }
///
/// let store = TypedStore::new();
/// store.register([Customer { id: 1001, name: "Adam".into() }], Mutability::ReadOnly)?;
/// store.register(Vec::<Contact>::new(), Mutability::AppendOnly)?;
///
/// let mut chain = ChainBuilder::new(store.clone()).with_namespace("contacts");
/// chain
/// 	.search(field!(Customer, id), field!(Customer, name))?
/// 	.insert(assign!(Contact, id), field!(Contact, id).stringify())?;
///
/// assert_eq!(chain.run(1001)?, Outcome::success("Adam"));
/// assert_eq!(chain.run(5005)?, Outcome::success("5005"));
/// assert_eq!(store.len::<Contact>()?, 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// Registration validates the selectors, binds the typed search or insert
/// body for the entity type, and specializes it in the cache right away, so
/// runs only pay for cache hits. A second registration for a type that is
/// already registered is ignored.
pub struct ChainBuilder {
	store: TypedStore,
	cache: Arc<SpecializationCache>,
	namespace: String,
	search: Template<SearchKey, SearchResult>,
	insert: Template<SearchKey, InsertResult>,
	searches: IndexSet<TypeWitness>,
	inserts: IndexSet<TypeWitness>,
	source_field: Option<String>,
	target_field: Option<String>,
	insert_field: Option<String>,
}

impl fmt::Debug for ChainBuilder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ChainBuilder")
			.field("namespace", &self.namespace)
			.field("searches", &self.searches)
			.field("inserts", &self.inserts)
			.field("source_field", &self.source_field)
			.field("target_field", &self.target_field)
			.finish_non_exhaustive()
	}
}

impl ChainBuilder {
	/// Creates an empty chain over `store` with its own specialization cache.
	///
	/// The cache, and every specialization holding a handle to `store`, is
	/// dropped with the builder. Use [`ChainBuilder::with_cache`] to share one.
	pub fn new(store: TypedStore) -> Self {
		Self {
			store,
			cache: Arc::new(SpecializationCache::new()),
			namespace: DEFAULT_NAMESPACE.to_string(),
			search: Template::unary("search"),
			insert: Template::unary("insert"),
			searches: IndexSet::new(),
			inserts: IndexSet::new(),
			source_field: None,
			target_field: None,
			insert_field: None,
		}
	}

	/// Sets the namespace tag under which specializations are cached.
	pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
		self.namespace = namespace.into();
		self
	}

	/// Uses `cache` instead of the builder's own, for example
	/// [`SpecializationCache::global`].
	pub fn with_cache(mut self, cache: Arc<SpecializationCache>) -> Self {
		self.cache = cache;
		self
	}

	/// Registers a search over `T`: the first row whose `matcher` field equals
	/// the run key is projected through `getter`.
	///
	/// The first registration also records the matcher and getter field names
	/// used in diagnostics.
	pub fn search<T, K, V>(&mut self, matcher: Selector<T, K>, getter: Selector<T, V>) -> Result<&mut Self, ChainError>
	where
		T: Entity,
		K: Into<SearchKey> + 'static,
		V: Render + 'static,
	{
		let source = matcher.field_name()?;
		let target = getter.field_name()?;
		self.source_field.get_or_insert(source);
		self.target_field.get_or_insert(target);

		let witness = TypeWitness::of::<T>();
		if self.searches.contains(&witness) {
			tracing::debug!(namespace = %self.namespace, ty = witness.name(), "search already registered, ignoring");
			return Ok(self);
		}

		let store = self.store.clone();
		self.search.bind::<T, _>(move || {
			let (store, matcher, getter) = (store.clone(), matcher.clone(), getter.clone());
			Arc::new(move |key: &SearchKey| ops::find_first(&store, &matcher, &getter, key))
		})?;
		self.cache.prepare(&self.namespace, &self.search, &[witness])?;
		self.searches.insert(witness);
		tracing::debug!(namespace = %self.namespace, ty = witness.name(), position = self.searches.len(), "registered search");
		Ok(self)
	}

	/// Registers an insert into `T`: a default `T` receives the run key through
	/// `setter`, is appended to the store, and the stored row is projected
	/// through `returner`.
	pub fn insert<T, V>(&mut self, setter: Assigner<T>, returner: Selector<T, V>) -> Result<&mut Self, ChainError>
	where
		T: Entity + Default,
		V: Render + 'static,
	{
		let field = setter.field_name()?;
		returner.resolve()?;
		self.insert_field.get_or_insert_with(|| field.clone());

		let witness = TypeWitness::of::<T>();
		if self.inserts.contains(&witness) {
			tracing::debug!(namespace = %self.namespace, ty = witness.name(), "insert already registered, ignoring");
			return Ok(self);
		}

		let store = self.store.clone();
		self.insert.bind::<T, _>(move || {
			let (store, setter, field, returner) = (store.clone(), setter.clone(), field.clone(), returner.clone());
			Arc::new(move |key: &SearchKey| ops::insert_new(&store, &setter, &field, &returner, key))
		})?;
		self.cache.prepare(&self.namespace, &self.insert, &[witness])?;
		self.inserts.insert(witness);
		tracing::debug!(namespace = %self.namespace, ty = witness.name(), position = self.inserts.len(), "registered insert");
		Ok(self)
	}

	/// Runs the chain for `key`.
	///
	/// A blank key (null, empty text, zero) fails immediately. Otherwise the
	/// searches run in registration order and the first hit wins. When every
	/// search misses, every insert runs in registration order and the outcome
	/// reflects the last one. With no inserts, the outcome reports every
	/// searched table.
	///
	/// Only specialization failures are returned as errors; everything else is
	/// reported in the [`Outcome`].
	pub fn run(&self, key: impl Into<SearchKey>) -> Result<Outcome, SpecializationError> {
		let key = key.into();
		if key.is_blank() {
			tracing::warn!(namespace = %self.namespace, field = self.source_name(), %key, "rejected blank key");
			return Ok(Outcome::failure(format!("{} passed as null, empty string or zero", self.source_name())));
		}

		for witness in &self.searches {
			match self.cache.specialize_and_invoke(&self.namespace, &key, &self.search, &[*witness])? {
				Ok(Some(data)) => {
					tracing::debug!(namespace = %self.namespace, ty = witness.name(), %key, "search hit");
					return Ok(Outcome::success(data));
				}
				Ok(None) => tracing::debug!(namespace = %self.namespace, ty = witness.name(), %key, "search miss"),
				Err(err) => {
					tracing::warn!(namespace = %self.namespace, ty = witness.name(), %key, error = %err, "search failed");
					return Ok(Outcome::from_error(&err));
				}
			}
		}

		if self.inserts.is_empty() {
			return Ok(Outcome::failure(self.not_found_message(&key)));
		}

		let mut outcome = Outcome::default();
		for witness in &self.inserts {
			outcome = match self.cache.specialize_and_invoke(&self.namespace, &key, &self.insert, &[*witness])? {
				Ok(data) => {
					tracing::debug!(namespace = %self.namespace, ty = witness.name(), %key, "inserted row");
					Outcome::success(data)
				}
				Err(err) => {
					tracing::warn!(namespace = %self.namespace, ty = witness.name(), %key, error = %err, "insert failed");
					Outcome::from_error(&err)
				}
			};
		}
		Ok(outcome)
	}

	pub fn state(&self) -> ChainState {
		if self.searches.is_empty() && self.inserts.is_empty() {
			ChainState::Configuring
		} else {
			ChainState::Ready
		}
	}

	/// Searched entity types, in registration order.
	pub fn search_types(&self) -> impl Iterator<Item = TypeWitness> + '_ {
		self.searches.iter().copied()
	}

	/// Insert entity types, in registration order.
	pub fn insert_types(&self) -> impl Iterator<Item = TypeWitness> + '_ {
		self.inserts.iter().copied()
	}

	/// Field read by the first registered search's matcher.
	pub fn source_field(&self) -> Option<&str> {
		self.source_field.as_deref()
	}

	/// Field read by the first registered search's getter.
	pub fn target_field(&self) -> Option<&str> {
		self.target_field.as_deref()
	}

	pub fn namespace(&self) -> &str {
		&self.namespace
	}

	pub fn store(&self) -> &TypedStore {
		&self.store
	}

	pub fn cache(&self) -> &Arc<SpecializationCache> {
		&self.cache
	}

	/// Name of the key field for diagnostics, falling back to the insert target.
	fn source_name(&self) -> &str {
		self.source_field.as_deref().or(self.insert_field.as_deref()).unwrap_or("key")
	}

	fn not_found_message(&self, key: &SearchKey) -> String {
		if self.searches.is_empty() {
			return format!("no searches or inserts configured for {}: {key}", self.source_name());
		}
		let tables = self.searches.iter().map(|witness| format!("{}s", witness.name())).collect::<Vec<_>>().join(" or ");
		let target = self.target_field.as_deref().unwrap_or("value");
		format!("Unable to find {target} in tables {tables} with {}: {key}", self.source_name())
	}
}
