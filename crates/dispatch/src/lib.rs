//! Runtime dispatch of generic operations by type witness.
//!
//! An operation is written once as a [`Template`] and instantiated per concrete
//! type through binders registered where the type is statically known. A
//! [`SpecializationCache`] turns a runtime list of [`TypeWitness`]es into a
//! callable [`Specialized`] operation and memoizes it, so each distinct
//! (template, namespace, types) combination is specialized at most once.

mod cache;
mod error;
mod template;
mod witness;

pub use cache::{CacheStats, SpecializationCache};
pub use error::{SpecializationError, SpecializeCause};
pub use template::{Specialized, Template, TemplateId};
pub use witness::TypeWitness;
