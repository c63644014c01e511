use std::any::{Any, TypeId};
use std::sync::Arc;

use chainsearch_primitives::short_type_name;
use parking_lot::RwLock;
use rustc_hash::FxHashMap as HashMap;

use crate::error::StoreError;
use crate::table::{ErasedTable, Mutability, Table, TableInfo};
use crate::Entity;

#[cfg(test)]
mod tests;

struct Slot {
	order: usize,
	table: Arc<dyn Any + Send + Sync>,
	erased: Arc<dyn ErasedTable>,
}

/// Shared handle to a set of per-type tables.
///
/// Cloning the handle shares the tables. The type map lock is only held long
/// enough to find a table; each table carries its own rows lock, so an append
/// to one table never blocks readers of another.
#[derive(Clone, Default)]
pub struct TypedStore {
	slots: Arc<RwLock<HashMap<TypeId, Slot>>>,
}

impl std::fmt::Debug for TypedStore {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(self.tables()).finish()
	}
}

impl TypedStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers the table for `T` with its initial rows.
	pub fn register<T: Entity>(&self, rows: impl IntoIterator<Item = T>, mutability: Mutability) -> Result<(), StoreError> {
		let name = short_type_name::<T>();
		let mut slots = self.slots.write();
		if slots.contains_key(&TypeId::of::<T>()) {
			return Err(StoreError::AlreadyRegistered { table: name });
		}

		let table = Arc::new(Table::new(name, rows.into_iter().collect(), mutability));
		let rows = table.rows.read().len();
		let order = slots.len();
		slots.insert(
			TypeId::of::<T>(),
			Slot {
				order,
				table: table.clone(),
				erased: table,
			},
		);
		tracing::debug!(table = name, %mutability, rows, "registered table");
		Ok(())
	}

	/// Adds an observer run on every row appended to `T`'s table.
	pub fn observe<T: Entity>(&self, observer: impl Fn(&mut T) + Send + Sync + 'static) -> Result<(), StoreError> {
		let table = self.table::<T>()?;
		table.observers.write().push(Box::new(observer));
		Ok(())
	}

	/// Runs `f` over the current rows of `T` while holding the table's read lock.
	pub fn read<T: Entity, R>(&self, f: impl FnOnce(&[T]) -> R) -> Result<R, StoreError> {
		let table = self.table::<T>()?;
		let rows = table.rows.read();
		Ok(f(&rows))
	}

	/// Snapshot of every row of `T`, in insertion order.
	pub fn get<T: Entity>(&self) -> Result<Vec<T>, StoreError> {
		self.read::<T, _>(<[T]>::to_vec)
	}

	pub fn len<T: Entity>(&self) -> Result<usize, StoreError> {
		self.read::<T, _>(<[T]>::len)
	}

	/// Returns true if a table is registered for `T`.
	pub fn contains<T: Entity>(&self) -> bool {
		self.slots.read().contains_key(&TypeId::of::<T>())
	}

	pub fn mutability<T: Entity>(&self) -> Option<Mutability> {
		self.table::<T>().ok().map(|table| table.mutability)
	}

	/// Every registered table, in registration order.
	pub fn tables(&self) -> Vec<TableInfo> {
		let slots = self.slots.read();
		let mut ordered: Vec<&Slot> = slots.values().collect();
		ordered.sort_by_key(|slot| slot.order);
		ordered.into_iter().map(|slot| slot.erased.info()).collect()
	}

	/// Appends `value` to `T`'s table and returns the stored row.
	///
	/// Observers run exactly once on the new row, in registration order, while
	/// the table's write lock is held; readers see either the table without the
	/// row or the row as rewritten by every observer.
	pub fn append<T: Entity>(&self, value: T) -> Result<T, StoreError> {
		let table = self.table::<T>()?;
		if table.mutability == Mutability::ReadOnly {
			return Err(StoreError::ReadOnly { table: table.name });
		}

		let mut rows = table.rows.write();
		let mut value = value;
		for observer in table.observers.read().iter() {
			observer(&mut value);
		}
		rows.push(value.clone());
		tracing::debug!(table = table.name, rows = rows.len(), "appended row");
		Ok(value)
	}

	fn table<T: Entity>(&self) -> Result<Arc<Table<T>>, StoreError> {
		let unregistered = || StoreError::Unregistered { table: short_type_name::<T>() };
		let any = self.slots.read().get(&TypeId::of::<T>()).map(|slot| slot.table.clone()).ok_or_else(unregistered)?;
		any.downcast::<Table<T>>().map_err(|_| unregistered())
	}
}
