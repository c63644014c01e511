//! Sample table contents, built in or loaded from TOML.
//!
//! ```toml
//! customers = [{ id = 1001, name = "Adam" }]
//! friends = [{ id = 2001, name = "Rachel" }]
//! contacts = []
//! ```
//!
//! Missing tables are empty.

use std::path::{Path, PathBuf};

use chainsearch_store::{Mutability, StoreError, TypedStore};
use serde::{Deserialize, Serialize};

use crate::demo::rename_new_contact;
use crate::entity::{Classmate, Colleague, Contact, Customer, Friend};

#[cfg(test)]
mod tests;

/// Failure loading a dataset file.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
	#[error("failed to read dataset {}: {source}", .path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("invalid dataset: {0}")]
	Parse(#[from] toml::de::Error),
	#[error(transparent)]
	Store(#[from] StoreError),
}

/// Rows for every sample table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Dataset {
	pub customers: Vec<Customer>,
	pub friends: Vec<Friend>,
	pub colleagues: Vec<Colleague>,
	pub classmates: Vec<Classmate>,
	/// Initial rows of the append-only contact table.
	pub contacts: Vec<Contact>,
}

impl Dataset {
	/// The built-in dataset: three rows per read-only table, no contacts.
	pub fn builtin() -> Self {
		Self {
			customers: vec![Customer::new(1001, "Adam"), Customer::new(1002, "Becky"), Customer::new(1003, "Sunny")],
			friends: vec![Friend::new(2001, "Rachel"), Friend::new(2002, "George"), Friend::new(2003, "Stuart")],
			colleagues: vec![Colleague::new(3001, "Raymond"), Colleague::new(3002, "Simon"), Colleague::new(3003, "Jessie")],
			classmates: vec![Classmate::new(4001, "Chris"), Classmate::new(4002, "Kevin"), Classmate::new(4003, "Harry")],
			contacts: Vec::new(),
		}
	}

	pub fn from_toml_str(input: &str) -> Result<Self, DatasetError> {
		Ok(toml::from_str(input)?)
	}

	/// Reads and parses a TOML dataset file.
	pub fn load(path: &Path) -> Result<Self, DatasetError> {
		let content = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		let dataset = Self::from_toml_str(&content)?;
		tracing::debug!(path = %path.display(), rows = dataset.rows(), "loaded dataset");
		Ok(dataset)
	}

	/// Total rows across every table.
	pub fn rows(&self) -> usize {
		self.customers.len() + self.friends.len() + self.colleagues.len() + self.classmates.len() + self.contacts.len()
	}

	/// Registers every table in a fresh store and installs the contact observer.
	pub fn into_store(self) -> Result<TypedStore, DatasetError> {
		let store = TypedStore::new();
		store.register(self.customers, Mutability::ReadOnly)?;
		store.register(self.friends, Mutability::ReadOnly)?;
		store.register(self.colleagues, Mutability::ReadOnly)?;
		store.register(self.classmates, Mutability::ReadOnly)?;
		store.register(self.contacts, Mutability::AppendOnly)?;
		store.observe(rename_new_contact)?;
		Ok(store)
	}
}
