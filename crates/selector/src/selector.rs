use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use chainsearch_primitives::Render;

use crate::expr::SelectorExpr;
use crate::resolve::{self, FieldPath, SelectorError};

type Getter<T, V> = Arc<dyn Fn(&T) -> V + Send + Sync>;

/// Typed selector from entity `T` to a field value `V`, paired with a
/// declarative description of which field it reads.
///
/// The combinators build the description and the function side by side, so a
/// selector built from them always describes what it computes.
/// [`Selector::from_parts`] accepts any description and is the only way to
/// produce shapes the resolver rejects.
pub struct Selector<T, V> {
	expr: SelectorExpr,
	get: Getter<T, V>,
}

impl<T, V> Clone for Selector<T, V> {
	fn clone(&self) -> Self {
		Self {
			expr: self.expr.clone(),
			get: self.get.clone(),
		}
	}
}

impl<T, V> fmt::Debug for Selector<T, V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Selector").field("expr", &self.expr).finish_non_exhaustive()
	}
}

impl<T: 'static, V: 'static> Selector<T, V> {
	/// Selector reading field `name` directly from the entity.
	pub fn field<F>(name: impl Into<Cow<'static, str>>, get: F) -> Self
	where
		F: Fn(&T) -> V + Send + Sync + 'static,
	{
		Self::from_parts(SelectorExpr::field(name), get)
	}

	/// Selector with an explicit description.
	pub fn from_parts<F>(expr: SelectorExpr, get: F) -> Self
	where
		F: Fn(&T) -> V + Send + Sync + 'static,
	{
		Self { expr, get: Arc::new(get) }
	}

	/// Declarative description of this selector.
	pub fn expr(&self) -> &SelectorExpr {
		&self.expr
	}

	/// Evaluates the selector against an entity.
	pub fn get(&self, entity: &T) -> V {
		(self.get)(entity)
	}

	/// Resolves the field path this selector reads.
	pub fn resolve(&self) -> Result<FieldPath, SelectorError> {
		resolve::resolve(&self.expr)
	}

	/// Resolves the terminal field name this selector reads.
	pub fn field_name(&self) -> Result<String, SelectorError> {
		resolve::field_name(&self.expr)
	}

	/// Reads field `name` from the value this selector produces.
	pub fn then<U: 'static, F>(self, name: impl Into<Cow<'static, str>> + 'static, get: F) -> Selector<T, U>
	where
		F: Fn(&V) -> U + Send + Sync + 'static,
	{
		let inner = self.get;
		Selector {
			expr: self.expr.then(name),
			get: Arc::new(move |entity: &T| get(&inner(entity))),
		}
	}

	/// Converts the selected value into `U`.
	pub fn convert<U: From<V> + 'static>(self) -> Selector<T, U> {
		let inner = self.get;
		Selector {
			expr: self.expr.convert(),
			get: Arc::new(move |entity: &T| U::from(inner(entity))),
		}
	}

	/// Maps every element of the selected sequence through `element`.
	pub fn project<E: 'static, U: 'static>(self, element: Selector<E, U>) -> Selector<T, Vec<U>>
	where
		V: IntoIterator<Item = E>,
	{
		let inner = self.get;
		let element_get = element.get;
		Selector {
			expr: self.expr.project(element.expr),
			get: Arc::new(move |entity: &T| inner(entity).into_iter().map(|item| element_get(&item)).collect::<Vec<U>>()),
		}
	}
}

impl<T: 'static, V: Render + 'static> Selector<T, V> {
	/// Converts the selected value to its payload text.
	pub fn stringify(self) -> Selector<T, String> {
		let inner = self.get;
		Selector {
			expr: self.expr.stringify(),
			get: Arc::new(move |entity: &T| inner(entity).render()),
		}
	}
}
