use std::fmt;

use parking_lot::RwLock;

use crate::Entity;

/// Callback run on every row appended to a table, before the row becomes visible.
pub type Observer<T> = Box<dyn Fn(&mut T) + Send + Sync>;

/// Whether a table accepts appends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mutability {
	/// Populated at registration, never grows.
	ReadOnly,
	/// Grows through appends; existing rows are never updated or removed.
	AppendOnly,
}

impl fmt::Display for Mutability {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Mutability::ReadOnly => f.write_str("read-only"),
			Mutability::AppendOnly => f.write_str("append-only"),
		}
	}
}

/// Summary of one registered table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableInfo {
	pub name: &'static str,
	pub mutability: Mutability,
	pub rows: usize,
}

pub(crate) struct Table<T> {
	pub(crate) name: &'static str,
	pub(crate) mutability: Mutability,
	pub(crate) rows: RwLock<Vec<T>>,
	pub(crate) observers: RwLock<Vec<Observer<T>>>,
}

impl<T: Entity> Table<T> {
	pub(crate) fn new(name: &'static str, rows: Vec<T>, mutability: Mutability) -> Self {
		Self {
			name,
			mutability,
			rows: RwLock::new(rows),
			observers: RwLock::new(Vec::new()),
		}
	}
}

/// Type-erased view of a table for listings.
pub(crate) trait ErasedTable: Send + Sync {
	fn info(&self) -> TableInfo;
}

impl<T: Entity> ErasedTable for Table<T> {
	fn info(&self) -> TableInfo {
		TableInfo {
			name: self.name,
			mutability: self.mutability,
			rows: self.rows.read().len(),
		}
	}
}
