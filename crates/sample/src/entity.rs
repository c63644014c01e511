use serde::{Deserialize, Serialize};

macro_rules! person {
	($($(#[$meta:meta])* $name:ident),* $(,)?) => {
		$(
			$(#[$meta])*
			#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
			pub struct $name {
				pub id: i64,
				pub name: String,
			}

			impl $name {
				pub fn new(id: i64, name: impl Into<String>) -> Self {
					Self { id, name: name.into() }
				}
			}
		)*
	};
}

person! {
	Customer,
	Friend,
	Colleague,
	Classmate,
	/// Row of the append-only table new keys are inserted into.
	Contact,
}
