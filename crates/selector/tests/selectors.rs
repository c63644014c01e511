use chainsearch_primitives::{KeyError, SearchKey};
use chainsearch_selector::{Assigner, Selector, SelectorError, SelectorExpr, assign, field};
use pretty_assertions::assert_eq;

#[derive(Debug, Clone, Default, PartialEq)]
struct Address {
	city: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Order {
	total: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Customer {
	id: i64,
	name: String,
	address: Address,
	orders: Vec<Order>,
}

fn adam() -> Customer {
	Customer {
		id: 1001,
		name: "Adam".into(),
		address: Address { city: "Leeds".into() },
		orders: vec![Order { total: 3 }, Order { total: 5 }],
	}
}

#[test]
fn field_macro_reads_and_names_field() {
	let name = field!(Customer, name);
	assert_eq!(name.get(&adam()), "Adam");
	assert_eq!(name.field_name().unwrap(), "name");
}

#[test]
fn nested_field_macro() {
	let city = field!(Customer, address.city);
	assert_eq!(city.get(&adam()), "Leeds");
	assert_eq!(city.resolve().unwrap().segments().len(), 2);
}

#[test]
fn convert_keeps_field_name() {
	let id = Selector::field("total", |o: &Order| o.total).convert::<u64>();
	assert_eq!(id.get(&Order { total: 9 }), 9_u64);
	assert_eq!(id.field_name().unwrap(), "total");
}

#[test]
fn stringify_renders_value() {
	let id = field!(Customer, id).stringify();
	assert_eq!(id.get(&adam()), "1001");
	assert_eq!(id.field_name().unwrap(), "id");
}

#[test]
fn projection_maps_every_element() {
	let totals = field!(Customer, orders).project(field!(Order, total));
	assert_eq!(totals.get(&adam()), vec![3, 5]);
	assert_eq!(totals.field_name().unwrap(), "orders");
}

#[test]
fn from_parts_allows_rejected_shapes() {
	let doubled = Selector::from_parts(
		SelectorExpr::Call {
			method: "double".into(),
			args: vec![SelectorExpr::field("id")],
		},
		|c: &Customer| c.id * 2,
	);
	assert_eq!(doubled.get(&adam()), 2002);
	assert!(matches!(doubled.field_name(), Err(SelectorError::UnsupportedShape { .. })));
}

#[test]
fn assign_macro_converts_key_into_field_type() {
	let set_id = assign!(Customer, id);
	let mut customer = Customer::default();
	set_id.assign(&mut customer, &SearchKey::Text("9999".into())).unwrap();
	assert_eq!(customer.id, 9999);
	assert_eq!(set_id.field_name().unwrap(), "id");
}

#[test]
fn assign_rejects_unconvertible_key() {
	let set_id = assign!(Customer, id);
	let mut customer = Customer::default();
	let err = set_id.assign(&mut customer, &SearchKey::Text("abc".into())).unwrap_err();
	assert_eq!(
		err,
		KeyError::NotNumeric {
			key: "abc".into(),
			target: "i64"
		}
	);
	assert_eq!(customer, Customer::default());
}

#[test]
fn assigner_through_conversion() {
	let set_total = Assigner::field("total", |o: &mut Order, v: u32| o.total = v).convert();
	let mut order = Order::default();
	set_total.assign(&mut order, &SearchKey::Int(12)).unwrap();
	assert_eq!(order.total, 12);
	assert_eq!(set_total.field_name().unwrap(), "total");
}
