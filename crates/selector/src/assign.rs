use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use chainsearch_primitives::{FromSearchKey, KeyError, SearchKey};

use crate::expr::SelectorExpr;
use crate::resolve::{self, SelectorError};

type Setter<T> = Arc<dyn Fn(&mut T, &SearchKey) -> Result<(), KeyError> + Send + Sync>;

/// Writes a runtime key into one field of a freshly built entity.
///
/// The field's own type decides how the key is converted (see [`FromSearchKey`]),
/// so a textual key assigned into an integer field fails at assignment time.
pub struct Assigner<T> {
	expr: SelectorExpr,
	set: Setter<T>,
}

impl<T> Clone for Assigner<T> {
	fn clone(&self) -> Self {
		Self {
			expr: self.expr.clone(),
			set: self.set.clone(),
		}
	}
}

impl<T> fmt::Debug for Assigner<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Assigner").field("expr", &self.expr).finish_non_exhaustive()
	}
}

impl<T: 'static> Assigner<T> {
	/// Assigner for field `name` of the entity.
	pub fn field<V, F>(name: impl Into<Cow<'static, str>>, set: F) -> Self
	where
		V: FromSearchKey + 'static,
		F: Fn(&mut T, V) + Send + Sync + 'static,
	{
		Self::from_parts(SelectorExpr::field(name), set)
	}

	/// Assigner with an explicit target description.
	pub fn from_parts<V, F>(expr: SelectorExpr, set: F) -> Self
	where
		V: FromSearchKey + 'static,
		F: Fn(&mut T, V) + Send + Sync + 'static,
	{
		Self {
			expr,
			set: Arc::new(move |entity: &mut T, key: &SearchKey| {
				let value = V::from_search_key(key)?;
				set(entity, value);
				Ok(())
			}),
		}
	}

	/// Marks the target as reached through a type conversion.
	pub fn convert(self) -> Self {
		Self {
			expr: self.expr.convert(),
			set: self.set,
		}
	}

	/// Declarative description of the assignment target.
	pub fn expr(&self) -> &SelectorExpr {
		&self.expr
	}

	/// Name of the assigned field; fails unless the target is a single entity field.
	pub fn field_name(&self) -> Result<String, SelectorError> {
		resolve::assignable_field(&self.expr)
	}

	/// Converts `key` into the field type and stores it in `entity`.
	pub fn assign(&self, entity: &mut T, key: &SearchKey) -> Result<(), KeyError> {
		(self.set)(entity, key)
	}
}
