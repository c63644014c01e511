use chainsearch_chain::{ChainBuilder, ChainError};
use chainsearch_selector::{assign, field};
use chainsearch_store::TypedStore;

use crate::entity::{Classmate, Colleague, Contact, Customer, Friend};

/// Suffix given to the name of every newly inserted contact.
pub const NEWLY_ADDED: &str = " newly added";

/// Display name a contact receives when it is inserted.
pub fn contact_display_name(id: i64) -> String {
	format!("{id}{NEWLY_ADDED}")
}

/// Append observer for the contact table.
pub fn rename_new_contact(contact: &mut Contact) {
	contact.name = contact_display_name(contact.id);
	tracing::trace!(id = contact.id, name = %contact.name, "renamed new contact");
}

/// Searches customers, friends, colleagues and classmates by id for their
/// name, inserting a contact when nobody matches.
pub fn demo_chain(store: TypedStore, namespace: &str) -> Result<ChainBuilder, ChainError> {
	let mut chain = ChainBuilder::new(store).with_namespace(namespace);
	chain
		.search(field!(Customer, id), field!(Customer, name))?
		.search(field!(Friend, id), field!(Friend, name))?
		.search(field!(Colleague, id), field!(Colleague, name))?
		.search(field!(Classmate, id), field!(Classmate, name))?
		.insert(assign!(Contact, id), field!(Contact, name))?;
	Ok(chain)
}
