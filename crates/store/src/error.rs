/// Errors raised by [`crate::TypedStore`] operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
	#[error("no table registered for {table}")]
	Unregistered { table: &'static str },
	#[error("a table for {table} is already registered")]
	AlreadyRegistered { table: &'static str },
	#[error("table {table} is read-only")]
	ReadOnly { table: &'static str },
}
