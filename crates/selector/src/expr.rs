use std::borrow::Cow;
use std::fmt;

/// Unary operators a selector expression may apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
	/// Widening or narrowing conversion of the operand's type.
	Convert,
	/// Arithmetic negation.
	Negate,
	/// Logical negation.
	Not,
}

/// Binary operators a selector expression may apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
	Add,
	Subtract,
	Equal,
	And,
	Or,
	Coalesce,
}

/// Declarative description of what a selector reads from its entity.
///
/// The tree mirrors the selector's structure from the outside in: the root node
/// is the last operation applied and [`SelectorExpr::Parameter`] is the entity
/// the selector receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorExpr {
	/// The entity itself.
	Parameter,
	/// Named field read from the value produced by `of`.
	Field {
		name: Cow<'static, str>,
		of: Box<SelectorExpr>,
	},
	/// Unary operator applied to `operand`.
	Unary { op: UnaryOp, operand: Box<SelectorExpr> },
	/// Every element of the sequence produced by `source`, mapped through `element`.
	///
	/// `element` is a selector over the element type, rooted at its own
	/// [`SelectorExpr::Parameter`].
	Project {
		source: Box<SelectorExpr>,
		element: Box<SelectorExpr>,
	},
	/// Terminal conversion to text.
	Stringify { operand: Box<SelectorExpr> },
	/// Method call with arguments.
	Call {
		method: Cow<'static, str>,
		args: Vec<SelectorExpr>,
	},
	/// Binary operator over two sub-expressions.
	Binary {
		op: BinaryOp,
		left: Box<SelectorExpr>,
		right: Box<SelectorExpr>,
	},
	/// Literal value.
	Constant(Cow<'static, str>),
}

impl SelectorExpr {
	/// Field `name` read directly from the entity.
	pub fn field(name: impl Into<Cow<'static, str>>) -> Self {
		SelectorExpr::Field {
			name: name.into(),
			of: Box::new(SelectorExpr::Parameter),
		}
	}

	/// Field `name` read from the value this expression produces.
	pub fn then(self, name: impl Into<Cow<'static, str>>) -> Self {
		SelectorExpr::Field {
			name: name.into(),
			of: Box::new(self),
		}
	}

	/// Wraps this expression in a type conversion.
	pub fn convert(self) -> Self {
		SelectorExpr::Unary {
			op: UnaryOp::Convert,
			operand: Box::new(self),
		}
	}

	/// Wraps this expression in a terminal stringification.
	pub fn stringify(self) -> Self {
		SelectorExpr::Stringify { operand: Box::new(self) }
	}

	/// Projects every element of this (sequence) expression through `element`.
	pub fn project(self, element: SelectorExpr) -> Self {
		SelectorExpr::Project {
			source: Box::new(self),
			element: Box::new(element),
		}
	}

	/// Descriptive kind of this node, used in diagnostics.
	pub fn kind(&self) -> Cow<'static, str> {
		match self {
			SelectorExpr::Parameter => "Parameter".into(),
			SelectorExpr::Field { .. } => "Field".into(),
			SelectorExpr::Unary { op, .. } => format!("Unary({op:?})").into(),
			SelectorExpr::Project { .. } => "Project".into(),
			SelectorExpr::Stringify { .. } => "Stringify".into(),
			SelectorExpr::Call { method, args } => format!("Call({method}/{})", args.len()).into(),
			SelectorExpr::Binary { op, .. } => format!("Binary({op:?})").into(),
			SelectorExpr::Constant(_) => "Constant".into(),
		}
	}
}

impl fmt::Display for SelectorExpr {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			SelectorExpr::Parameter => f.write_str("it"),
			SelectorExpr::Field { name, of } => write!(f, "{of}.{name}"),
			SelectorExpr::Unary { op: UnaryOp::Convert, operand } => write!(f, "({operand} as _)"),
			SelectorExpr::Unary { op: UnaryOp::Negate, operand } => write!(f, "-{operand}"),
			SelectorExpr::Unary { op: UnaryOp::Not, operand } => write!(f, "!{operand}"),
			SelectorExpr::Project { source, element } => write!(f, "{source}.map(|it| {element})"),
			SelectorExpr::Stringify { operand } => write!(f, "{operand}.to_string()"),
			SelectorExpr::Call { method, args } => {
				write!(f, "{method}(")?;
				for (i, arg) in args.iter().enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{arg}")?;
				}
				f.write_str(")")
			}
			SelectorExpr::Binary { op, left, right } => write!(f, "({left} {op:?} {right})"),
			SelectorExpr::Constant(value) => write!(f, "{value:?}"),
		}
	}
}
