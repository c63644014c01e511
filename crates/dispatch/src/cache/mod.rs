//! Memoized template specializations.
//!
//! # Purpose
//!
//! Turn a runtime list of [`TypeWitness`]es into a directly callable
//! specialization of a [`Template`], paying the specialization cost at most once
//! per distinct key.
//!
//! # Keys
//!
//! A specialization is stored under (template identity, namespace tag, type
//! ids in order). The namespace separates otherwise identical combinations
//! requested from different call sites.
//!
//! # Invariants
//!
//! * At most one specialization is ever committed per key. The map lock is held
//!   while a missing specialization is produced, so concurrent first use of the
//!   same key specializes once and every caller receives the committed value.
//! * Entries live as long as the cache; there is no eviction.
//! * The lock is released before the specialization is invoked, so invoked
//!   operations may use the cache again. Binders must not.

use std::any::{Any, TypeId};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, LazyLock};

use parking_lot::Mutex;
use rustc_hash::FxHashMap as HashMap;

use crate::error::{SpecializationError, SpecializeCause};
use crate::template::{Specialized, Template, TemplateId, type_ids};
use crate::witness::{TypeWitness, type_list};


static GLOBAL: LazyLock<Arc<SpecializationCache>> = LazyLock::new(|| Arc::new(SpecializationCache::new()));

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct CacheKey {
	template: TemplateId,
	namespace: Box<str>,
	types: Box<[TypeId]>,
}

impl CacheKey {
	fn new(template: TemplateId, namespace: &str, types: &[TypeWitness]) -> Self {
		Self {
			template,
			namespace: Box::from(namespace),
			types: type_ids(types),
		}
	}
}

/// Counters describing cache activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
	/// Committed specializations.
	pub entries: usize,
	/// Lookups served from an existing entry.
	pub hits: u64,
	/// Specializations produced.
	pub specializations: u64,
}

/// Memo table from (template, namespace, types) to a ready specialization.
#[derive(Default)]
pub struct SpecializationCache {
	entries: Mutex<HashMap<CacheKey, Arc<dyn Any + Send + Sync>>>,
	hits: AtomicU64,
	specializations: AtomicU64,
}

impl SpecializationCache {
	pub fn new() -> Self {
		Self::default()
	}

	/// The process-wide shared cache.
	pub fn global() -> Arc<Self> {
		GLOBAL.clone()
	}

	/// Specializes `template` for `types` (reusing a committed specialization
	/// when one exists) and invokes it with `state`.
	pub fn specialize_and_invoke<S: 'static, O: 'static>(
		&self,
		namespace: &str,
		state: &S,
		template: &Template<S, O>,
		types: &[TypeWitness],
	) -> Result<O, SpecializationError> {
		let specialized = self.specialization(namespace, template, types)?;
		Ok(specialized(state))
	}

	/// Commits the specialization for `types` without invoking it.
	pub fn prepare<S: 'static, O: 'static>(&self, namespace: &str, template: &Template<S, O>, types: &[TypeWitness]) -> Result<(), SpecializationError> {
		self.specialization(namespace, template, types).map(drop)
	}

	/// Returns the committed specialization for `types`, producing it on first use.
	pub fn specialization<S: 'static, O: 'static>(
		&self,
		namespace: &str,
		template: &Template<S, O>,
		types: &[TypeWitness],
	) -> Result<Specialized<S, O>, SpecializationError> {
		let key = CacheKey::new(template.id(), namespace, types);
		let mut entries = self.entries.lock();

		if let Some(entry) = entries.get(&key) {
			self.hits.fetch_add(1, Ordering::Relaxed);
			tracing::trace!(template = template.name(), namespace, types = %type_list(types), "specialization cache hit");
			return entry
				.downcast_ref::<Specialized<S, O>>()
				.cloned()
				.ok_or_else(|| template.error(types, SpecializeCause::SignatureMismatch));
		}

		let specialized = template.specialize(types)?;
		self.specializations.fetch_add(1, Ordering::Relaxed);
		tracing::debug!(
			template = template.name(),
			id = %template.id(),
			namespace,
			types = %type_list(types),
			"specialized template"
		);
		entries.insert(key, Arc::new(specialized.clone()));
		Ok(specialized)
	}

	/// Returns true if a specialization is committed for this combination.
	pub fn contains<S: 'static, O: 'static>(&self, namespace: &str, template: &Template<S, O>, types: &[TypeWitness]) -> bool {
		self.entries.lock().contains_key(&CacheKey::new(template.id(), namespace, types))
	}

	/// Number of committed specializations.
	pub fn len(&self) -> usize {
		self.entries.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn stats(&self) -> CacheStats {
		CacheStats {
			entries: self.len(),
			hits: self.hits.load(Ordering::Relaxed),
			specializations: self.specializations.load(Ordering::Relaxed),
		}
	}
}
