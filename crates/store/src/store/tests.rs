use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use pretty_assertions::assert_eq;

use super::*;

#[derive(Debug, Clone, Default, PartialEq)]
struct Person {
	id: i64,
	name: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Visitor {
	id: i64,
	name: String,
}

fn person(id: i64, name: &str) -> Person {
	Person { id, name: name.to_string() }
}

#[test]
fn registered_rows_are_readable_in_order() {
	let store = TypedStore::new();
	store.register([person(1, "a"), person(2, "b")], Mutability::ReadOnly).unwrap();

	assert_eq!(store.get::<Person>().unwrap(), vec![person(1, "a"), person(2, "b")]);
	assert_eq!(store.len::<Person>().unwrap(), 2);
	assert_eq!(store.read::<Person, _>(|rows| rows.iter().map(|p| p.id).sum::<i64>()).unwrap(), 3);
	assert!(store.contains::<Person>());
	assert!(!store.contains::<Visitor>());
}

#[test]
fn second_registration_is_rejected() {
	let store = TypedStore::new();
	store.register([person(1, "a")], Mutability::ReadOnly).unwrap();

	let err = store.register(Vec::<Person>::new(), Mutability::AppendOnly).unwrap_err();

	assert_eq!(err, StoreError::AlreadyRegistered { table: "Person" });
	assert_eq!(store.len::<Person>().unwrap(), 1);
	assert_eq!(store.mutability::<Person>(), Some(Mutability::ReadOnly));
}

#[test]
fn unregistered_table_reports_type_name() {
	let store = TypedStore::new();

	assert_eq!(store.get::<Visitor>().unwrap_err(), StoreError::Unregistered { table: "Visitor" });
	assert_eq!(store.append(Visitor::default()).unwrap_err().to_string(), "no table registered for Visitor");
	assert!(store.observe::<Visitor>(|_| {}).is_err());
}

#[test]
fn read_only_table_rejects_appends() {
	let store = TypedStore::new();
	store.register([person(1, "a")], Mutability::ReadOnly).unwrap();

	let err = store.append(person(2, "b")).unwrap_err();

	assert_eq!(err, StoreError::ReadOnly { table: "Person" });
	assert_eq!(store.len::<Person>().unwrap(), 1);
}

/// Each append runs every observer exactly once, and the stored row is the
/// rewritten one.
#[test]
fn observers_run_once_per_append() {
	let store = TypedStore::new();
	store.register(Vec::<Visitor>::new(), Mutability::AppendOnly).unwrap();
	let calls = Arc::new(AtomicUsize::new(0));
	{
		let calls = calls.clone();
		store
			.observe(move |visitor: &mut Visitor| {
				calls.fetch_add(1, Ordering::SeqCst);
				visitor.name = format!("{} seen", visitor.id);
			})
			.unwrap();
	}

	let stored = store.append(Visitor { id: 7, name: String::new() }).unwrap();
	store.append(Visitor { id: 8, name: "kept?".into() }).unwrap();

	assert_eq!(stored.name, "7 seen");
	assert_eq!(calls.load(Ordering::SeqCst), 2);
	assert_eq!(
		store.get::<Visitor>().unwrap(),
		vec![Visitor { id: 7, name: "7 seen".into() }, Visitor { id: 8, name: "8 seen".into() }]
	);
}

#[test]
fn clones_share_tables() {
	let store = TypedStore::new();
	let handle = store.clone();
	store.register(Vec::<Visitor>::new(), Mutability::AppendOnly).unwrap();

	handle.append(Visitor::default()).unwrap();

	assert_eq!(store.len::<Visitor>().unwrap(), 1);
}

#[test]
fn tables_lists_in_registration_order() {
	let store = TypedStore::new();
	store.register(Vec::<Visitor>::new(), Mutability::AppendOnly).unwrap();
	store.register([person(1, "a"), person(2, "b")], Mutability::ReadOnly).unwrap();
	store.append(Visitor::default()).unwrap();

	assert_eq!(
		store.tables(),
		vec![
			TableInfo {
				name: "Visitor",
				mutability: Mutability::AppendOnly,
				rows: 1
			},
			TableInfo {
				name: "Person",
				mutability: Mutability::ReadOnly,
				rows: 2
			},
		]
	);
}

/// Readers racing with appends never see a row before its observers ran.
#[test]
fn concurrent_readers_never_see_unobserved_rows() {
	let store = TypedStore::new();
	store.register(Vec::<Visitor>::new(), Mutability::AppendOnly).unwrap();
	store.observe(|visitor: &mut Visitor| visitor.name = format!("{} seen", visitor.id)).unwrap();

	std::thread::scope(|scope| {
		let writer = scope.spawn(|| {
			for id in 0..200 {
				store.append(Visitor { id, name: String::new() }).unwrap();
			}
		});
		for _ in 0..4 {
			scope.spawn(|| {
				let mut last = 0;
				while last < 200 {
					let (len, consistent) = store
						.read::<Visitor, _>(|rows| (rows.len(), rows.iter().all(|v| v.name == format!("{} seen", v.id))))
						.unwrap();
					assert!(consistent);
					assert!(len >= last);
					last = len;
				}
			});
		}
		writer.join().unwrap();
	});

	assert_eq!(store.len::<Visitor>().unwrap(), 200);
}
