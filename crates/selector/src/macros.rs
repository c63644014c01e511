//! Shorthand constructors for field selectors and assigners.

/// Builds a [`Selector`](crate::Selector) reading a field (or a field of a field).
///
/// ```
/// # use chainsearch_selector::field;
/// #[derive(Clone, Default)]
/// struct Customer { id: i64, name: String }
///
/// let id = field!(Customer, id);
/// assert_eq!(id.field_name().unwrap(), "id");
/// assert_eq!(id.get(&Customer { id: 7, name: "Adam".into() }), 7);
/// ```
#[macro_export]
macro_rules! field {
	($ty:ty, $field:ident) => {
		$crate::Selector::field(stringify!($field), |entity: &$ty| ::std::clone::Clone::clone(&entity.$field))
	};
	($ty:ty, $outer:ident . $inner:ident) => {
		$crate::Selector::field(stringify!($outer), |entity: &$ty| ::std::clone::Clone::clone(&entity.$outer))
			.then(stringify!($inner), |outer| ::std::clone::Clone::clone(&outer.$inner))
	};
}

/// Builds an [`Assigner`](crate::Assigner) writing the runtime key into a field.
///
/// ```
/// # use chainsearch_selector::assign;
/// # use chainsearch_primitives::SearchKey;
/// #[derive(Clone, Default)]
/// struct Contact { id: i64, name: String }
///
/// let set_id = assign!(Contact, id);
/// let mut contact = Contact::default();
/// set_id.assign(&mut contact, &SearchKey::Int(9999)).unwrap();
/// assert_eq!(contact.id, 9999);
/// ```
#[macro_export]
macro_rules! assign {
	($ty:ty, $field:ident) => {
		$crate::Assigner::field(stringify!($field), |entity: &mut $ty, value| entity.$field = value)
	};
}
