//! Declarative field selectors.
//!
//! A selector is an ordinary typed function from an entity to one of its
//! fields, carried together with a [`SelectorExpr`] describing which field it
//! reads. Chains evaluate the function at run time and resolve the description
//! at registration time to name fields in diagnostics, without ever evaluating
//! the selector against real data.
//!
//! Accepted shapes (see [`resolve()`]):
//!
//! - a direct field: `it.id`
//! - a field behind a conversion: `(it.id as _)`
//! - a field reached through one projection: `it.orders.map(|it| it.id)`
//! - any of the above behind a terminal `to_string()`

mod assign;
mod expr;
mod macros;
mod resolve;
mod selector;

pub use assign::Assigner;
pub use expr::{BinaryOp, SelectorExpr, UnaryOp};
pub use resolve::{FieldPath, SelectorError, assignable_field, field_name, resolve};
pub use selector::Selector;
