use std::any::TypeId;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use rustc_hash::FxHashMap as HashMap;

use crate::error::{SpecializationError, SpecializeCause};
use crate::witness::{TypeWitness, type_list};

/// A template bound to concrete types, ready to call with the runtime state.
pub type Specialized<S, O> = Arc<dyn Fn(&S) -> O + Send + Sync>;

type Binder<S, O> = Box<dyn Fn() -> Specialized<S, O> + Send + Sync>;

/// Process-unique identity of a [`Template`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TemplateId(u64);

impl TemplateId {
	fn next() -> Self {
		static NEXT: AtomicU64 = AtomicU64::new(1);
		Self(NEXT.fetch_add(1, Ordering::Relaxed))
	}
}

impl fmt::Display for TemplateId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// An operation written once, generic over `arity` type parameters, that takes
/// runtime state `S` and produces `O`.
///
/// Rust monomorphizes at compile time, so the per-type instantiations are
/// registered up front with [`Template::bind`] from code where the concrete type
/// is statically known. At run time a list of [`TypeWitness`]es selects the
/// binder, which produces the callable specialization.
pub struct Template<S, O> {
	id: TemplateId,
	name: &'static str,
	arity: usize,
	binders: HashMap<Box<[TypeId]>, Binder<S, O>>,
}

impl<S, O> fmt::Debug for Template<S, O> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Template")
			.field("id", &self.id)
			.field("name", &self.name)
			.field("arity", &self.arity)
			.field("bindings", &self.binders.len())
			.finish()
	}
}

impl<S: 'static, O: 'static> Template<S, O> {
	/// Creates a template taking `arity` type arguments.
	pub fn new(name: &'static str, arity: usize) -> Self {
		Self {
			id: TemplateId::next(),
			name,
			arity,
			binders: HashMap::default(),
		}
	}

	/// Creates a template over a single type argument.
	pub fn unary(name: &'static str) -> Self {
		Self::new(name, 1)
	}

	pub fn id(&self) -> TemplateId {
		self.id
	}

	pub fn name(&self) -> &'static str {
		self.name
	}

	pub fn arity(&self) -> usize {
		self.arity
	}

	/// Registers how to instantiate this template for `T`.
	///
	/// Replaces any previous binder for `T`. Specializations already committed to
	/// a cache are not affected.
	pub fn bind<T, F>(&mut self, binder: F) -> Result<(), SpecializationError>
	where
		T: ?Sized + 'static,
		F: Fn() -> Specialized<S, O> + Send + Sync + 'static,
	{
		self.bind_types(&[TypeWitness::of::<T>()], binder)
	}

	/// Registers how to instantiate this template for an ordered list of types.
	pub fn bind_types<F>(&mut self, types: &[TypeWitness], binder: F) -> Result<(), SpecializationError>
	where
		F: Fn() -> Specialized<S, O> + Send + Sync + 'static,
	{
		self.check_arity(types)?;
		self.binders.insert(type_ids(types), Box::new(binder));
		Ok(())
	}

	/// Removes the binder for `T`, returning whether one was registered.
	pub fn unbind<T: ?Sized + 'static>(&mut self) -> bool {
		self.binders.remove(&type_ids(&[TypeWitness::of::<T>()])).is_some()
	}

	/// Returns true if a binder exists for exactly these types.
	pub fn is_bound(&self, types: &[TypeWitness]) -> bool {
		self.binders.contains_key(&type_ids(types))
	}

	/// Produces a fresh specialization for `types`.
	///
	/// Callers normally go through [`crate::SpecializationCache`], which
	/// memoizes the result.
	pub fn specialize(&self, types: &[TypeWitness]) -> Result<Specialized<S, O>, SpecializationError> {
		self.check_arity(types)?;
		let binder = self.binders.get(&type_ids(types)).ok_or_else(|| self.error(types, SpecializeCause::Unbound))?;
		Ok(binder())
	}

	pub(crate) fn error(&self, types: &[TypeWitness], cause: SpecializeCause) -> SpecializationError {
		SpecializationError {
			template: self.name,
			types: type_list(types),
			cause,
		}
	}

	fn check_arity(&self, types: &[TypeWitness]) -> Result<(), SpecializationError> {
		if types.len() == self.arity {
			return Ok(());
		}
		Err(self.error(
			types,
			SpecializeCause::Arity {
				expected: self.arity,
				found: types.len(),
			},
		))
	}
}

pub(crate) fn type_ids(types: &[TypeWitness]) -> Box<[TypeId]> {
	types.iter().map(TypeWitness::id).collect()
}
