use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

use chainsearch_primitives::short_type_name;

/// Runtime token standing for a concrete type.
///
/// Equality and hashing use the [`TypeId`] only; the name is for diagnostics.
#[derive(Clone, Copy)]
pub struct TypeWitness {
	id: TypeId,
	name: &'static str,
}

impl TypeWitness {
	/// Witness for `T`.
	pub fn of<T: ?Sized + 'static>() -> Self {
		Self {
			id: TypeId::of::<T>(),
			name: short_type_name::<T>(),
		}
	}

	pub fn id(&self) -> TypeId {
		self.id
	}

	/// Unqualified type name.
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Returns true if this witnesses `T`.
	pub fn is<T: ?Sized + 'static>(&self) -> bool {
		self.id == TypeId::of::<T>()
	}
}

impl PartialEq for TypeWitness {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Eq for TypeWitness {}

impl Hash for TypeWitness {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id.hash(state);
	}
}

impl fmt::Debug for TypeWitness {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "TypeWitness({})", self.name)
	}
}

impl fmt::Display for TypeWitness {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name)
	}
}

/// Joins witness names for diagnostics (`Customer, Friend`).
pub(crate) fn type_list(types: &[TypeWitness]) -> String {
	types.iter().map(TypeWitness::name).collect::<Vec<_>>().join(", ")
}
