//! Field-path resolution over [`SelectorExpr`] trees.
//!
//! Resolution is purely structural: no entity is ever evaluated. The walk starts
//! at the outermost node and records field names as it descends towards the
//! entity parameter:
//!
//! * `Field` records its name, then continues into the value it was read from.
//! * `Unary(Convert)` and `Stringify` are transparent.
//! * `Project` walks the element sub-selector first, then the projected source.
//!   Only one level of projection is accepted: a `Project` below another one is
//!   rejected.
//! * `Parameter` ends the walk.
//!
//! Every other node is rejected. The last recorded name is the terminal field
//! reported in diagnostics.

use std::borrow::Cow;

use crate::expr::{SelectorExpr, UnaryOp};


/// Structural failure resolving a selector.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
	/// The selector contains a node kind the resolver does not accept.
	#[error("{kind} expressions are not supported in field selectors")]
	UnsupportedShape {
		/// Descriptive kind of the offending node.
		kind: Cow<'static, str>,
	},
	/// The selector never reads a field (for example the entity itself).
	#[error("selector `{expr}` does not reference a field")]
	NoField {
		/// Rendered selector.
		expr: String,
	},
}

/// Field names recorded while resolving a selector, in walk order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
	segments: Vec<Cow<'static, str>>,
}

impl FieldPath {
	/// Field names in the order the walk recorded them.
	pub fn segments(&self) -> &[Cow<'static, str>] {
		&self.segments
	}

	/// The terminal field name: the last one the walk recorded.
	pub fn terminal(&self) -> &str {
		// Non-empty by construction in `resolve`.
		self.segments.last().map(|name| name.as_ref()).unwrap_or_default()
	}
}

/// Resolves the field path referenced by `expr`.
pub fn resolve(expr: &SelectorExpr) -> Result<FieldPath, SelectorError> {
	let mut segments = Vec::new();
	walk(expr, &mut segments, false)?;
	if segments.is_empty() {
		return Err(SelectorError::NoField { expr: expr.to_string() });
	}
	Ok(FieldPath { segments })
}

/// Resolves the terminal field name referenced by `expr`.
pub fn field_name(expr: &SelectorExpr) -> Result<String, SelectorError> {
	resolve(expr).map(|path| path.terminal().to_string())
}

fn walk(expr: &SelectorExpr, segments: &mut Vec<Cow<'static, str>>, projected: bool) -> Result<(), SelectorError> {
	match expr {
		SelectorExpr::Parameter => Ok(()),
		SelectorExpr::Field { name, of } => {
			segments.push(name.clone());
			walk(of, segments, projected)
		}
		SelectorExpr::Unary { op: UnaryOp::Convert, operand } => walk(operand, segments, projected),
		SelectorExpr::Stringify { operand } => walk(operand, segments, projected),
		SelectorExpr::Project { .. } if projected => Err(SelectorError::UnsupportedShape {
			kind: "Project (nested)".into(),
		}),
		SelectorExpr::Project { source, element } => {
			walk(element, segments, true)?;
			walk(source, segments, true)
		}
		SelectorExpr::Unary { .. } | SelectorExpr::Call { .. } | SelectorExpr::Binary { .. } | SelectorExpr::Constant(_) => {
			Err(SelectorError::UnsupportedShape { kind: expr.kind() })
		}
	}
}

/// Checks that `expr` is assignable: a single field of the entity, optionally
/// behind a conversion.
pub fn assignable_field(expr: &SelectorExpr) -> Result<String, SelectorError> {
	match expr {
		SelectorExpr::Unary { op: UnaryOp::Convert, operand } => assignable_field(operand),
		SelectorExpr::Field { name, of } if matches!(**of, SelectorExpr::Parameter) => Ok(name.to_string()),
		SelectorExpr::Parameter => Err(SelectorError::NoField { expr: expr.to_string() }),
		other => Err(SelectorError::UnsupportedShape {
			kind: format!("{} (assignment target)", other.kind()).into(),
		}),
	}
}
