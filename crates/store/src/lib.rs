//! Type-keyed in-memory tables.
//!
//! A [`TypedStore`] holds at most one table per concrete entity type. Tables
//! are either read-only or append-only; appends run the table's observers on
//! the new row before it becomes visible to readers.

use std::any::Any;

mod error;
mod store;
mod table;

pub use error::StoreError;
pub use store::TypedStore;
pub use table::{Mutability, Observer, TableInfo};

/// A row type that can live in a [`TypedStore`].
pub trait Entity: Any + Clone + Send + Sync {}

impl<T: Any + Clone + Send + Sync> Entity for T {}
