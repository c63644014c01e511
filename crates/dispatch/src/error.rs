/// Failure binding a template to concrete types.
///
/// These indicate a wiring bug (a template used with types it was never bound
/// to) rather than a transient condition, and are never retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot specialize `{template}` for <{types}>")]
pub struct SpecializationError {
	/// Template name.
	pub template: &'static str,
	/// Requested type arguments.
	pub types: String,
	/// Underlying cause.
	#[source]
	pub cause: SpecializeCause,
}

/// Why a specialization could not be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SpecializeCause {
	/// Wrong number of type arguments.
	#[error("expected {expected} type argument(s), got {found}")]
	Arity { expected: usize, found: usize },
	/// No binder registered for the requested types.
	#[error("no binding registered for these types")]
	Unbound,
	/// A cached specialization exists under the key but with another signature.
	#[error("cached specialization has a different signature")]
	SignatureMismatch,
}
