//! Sample contact tables and the demo chain built over them.
//!
//! Four read-only tables of contact-like people plus an append-only
//! [`Contact`] table whose observer renames every new contact to
//! `"<id> newly added"`.

mod dataset;
mod demo;
mod entity;

pub use dataset::{Dataset, DatasetError};
pub use demo::{NEWLY_ADDED, contact_display_name, demo_chain, rename_new_contact};
pub use entity::{Classmate, Colleague, Contact, Customer, Friend};
