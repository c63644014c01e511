//! Search-then-insert chains.
//!
//! A [`ChainBuilder`] collects, in registration order, one search per entity
//! type and one insert per entity type. [`ChainBuilder::run`] takes a single
//! runtime key, tries every search until one finds a row, and only when all of
//! them miss performs every insert. The concrete entity types are only known
//! through [`TypeWitness`](chainsearch_dispatch::TypeWitness)es at run time; the
//! typed search and insert bodies are reached through a
//! [`SpecializationCache`](chainsearch_dispatch::SpecializationCache).

mod builder;
mod error;
mod outcome;

pub use builder::{ChainBuilder, ChainState, DEFAULT_NAMESPACE};
pub use error::{ChainError, InsertError};
pub use outcome::Outcome;
