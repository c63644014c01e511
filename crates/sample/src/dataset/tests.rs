use std::io::Write;

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn builtin_has_three_rows_per_read_only_table() {
	let dataset = Dataset::builtin();

	assert_eq!(dataset.rows(), 12);
	assert!(dataset.contacts.is_empty());
	assert_eq!(dataset.customers[0], Customer::new(1001, "Adam"));
	assert_eq!(dataset.classmates[2], Classmate::new(4003, "Harry"));
}

#[test]
fn missing_tables_default_to_empty() {
	let dataset = Dataset::from_toml_str(
		r#"
		friends = [{ id = 7, name = "Zed" }]
		"#,
	)
	.unwrap();

	assert_eq!(dataset.friends, vec![Friend::new(7, "Zed")]);
	assert_eq!(dataset.rows(), 1);
}

#[test]
fn unknown_table_is_rejected() {
	let err = Dataset::from_toml_str("enemies = []").unwrap_err();
	assert!(matches!(err, DatasetError::Parse(_)), "{err}");
}

#[test]
fn wrong_field_type_is_rejected() {
	let err = Dataset::from_toml_str(r#"customers = [{ id = "x", name = "Adam" }]"#).unwrap_err();
	assert!(err.to_string().starts_with("invalid dataset:"), "{err}");
}

#[test]
fn load_reads_file_from_disk() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	writeln!(file, "customers = [{{ id = 1, name = \"One\" }}]").unwrap();
	writeln!(file, "contacts = [{{ id = 2, name = \"Two\" }}]").unwrap();

	let dataset = Dataset::load(file.path()).unwrap();

	assert_eq!(dataset.customers, vec![Customer::new(1, "One")]);
	assert_eq!(dataset.contacts, vec![Contact::new(2, "Two")]);
}

#[test]
fn load_reports_missing_file() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("missing.toml");

	let err = Dataset::load(&path).unwrap_err();

	assert!(matches!(err, DatasetError::Io { .. }));
	assert!(err.to_string().contains("missing.toml"), "{err}");
}

#[test]
fn into_store_registers_every_table() {
	let store = Dataset::builtin().into_store().unwrap();

	let tables: Vec<_> = store.tables().into_iter().map(|table| (table.name, table.mutability, table.rows)).collect();
	assert_eq!(
		tables,
		vec![
			("Customer", Mutability::ReadOnly, 3),
			("Friend", Mutability::ReadOnly, 3),
			("Colleague", Mutability::ReadOnly, 3),
			("Classmate", Mutability::ReadOnly, 3),
			("Contact", Mutability::AppendOnly, 0),
		]
	);
}

#[test]
fn contact_observer_is_installed() {
	let store = Dataset::builtin().into_store().unwrap();

	let stored = store.append(Contact::new(55, "")).unwrap();

	assert_eq!(stored.name, "55 newly added");
}
