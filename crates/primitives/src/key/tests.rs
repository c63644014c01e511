use rstest::rstest;

use super::*;

#[rstest]
#[case::null(SearchKey::Null)]
#[case::zero(SearchKey::Int(0))]
#[case::empty(SearchKey::Text(String::new()))]
#[case::text_zero(SearchKey::Text("0".into()))]
#[case::padded_zero(SearchKey::Text(" 0 ".into()))]
#[case::negative_zero(SearchKey::Text("-0".into()))]
#[case::leading_zeros(SearchKey::Text("00".into()))]
fn blank_keys(#[case] key: SearchKey) {
	assert!(key.is_blank(), "{key:?} should be blank");
}

#[rstest]
#[case::int(SearchKey::Int(1001))]
#[case::negative(SearchKey::Int(-4))]
#[case::text(SearchKey::Text("abc".into()))]
#[case::whitespace(SearchKey::Text(" ".into()))]
#[case::numeric_text(SearchKey::Text("1001".into()))]
fn present_keys(#[case] key: SearchKey) {
	assert!(!key.is_blank(), "{key:?} should not be blank");
}

#[test]
fn parse_prefers_integers() {
	assert_eq!(SearchKey::parse("1001"), SearchKey::Int(1001));
	assert_eq!(SearchKey::parse(" 42 "), SearchKey::Int(42));
	assert_eq!(SearchKey::parse("adam"), SearchKey::Text("adam".into()));
	assert_eq!(SearchKey::parse(""), SearchKey::Text(String::new()));
}

#[test]
fn matches_across_representations() {
	assert!(SearchKey::Int(1001).matches(&SearchKey::Int(1001)));
	assert!(SearchKey::Int(1001).matches(&SearchKey::Text("1001".into())));
	assert!(SearchKey::Text("1001".into()).matches(&SearchKey::Int(1001)));
	assert!(SearchKey::Text("adam".into()).matches(&SearchKey::Text("adam".into())));

	assert!(!SearchKey::Int(1001).matches(&SearchKey::Int(1002)));
	assert!(!SearchKey::Text("Adam".into()).matches(&SearchKey::Text("adam".into())));
	assert!(!SearchKey::Null.matches(&SearchKey::Null));
	assert!(!SearchKey::Int(1).matches(&SearchKey::Null));
}

#[test]
fn option_conversion_maps_none_to_null() {
	assert_eq!(SearchKey::from(None::<i64>), SearchKey::Null);
	assert_eq!(SearchKey::from(Some(7_i32)), SearchKey::Int(7));
	assert_eq!(SearchKey::from(Some("x")), SearchKey::Text("x".into()));
}

#[test]
fn integer_fields_accept_numeric_text() {
	assert_eq!(i64::from_search_key(&SearchKey::Text(" 9999".into())), Ok(9999));
	assert_eq!(i32::from_search_key(&SearchKey::Int(12)), Ok(12));
	assert_eq!(String::from_search_key(&SearchKey::Int(12)), Ok("12".to_string()));
}

#[test]
fn integer_fields_reject_bad_keys() {
	assert_eq!(i64::from_search_key(&SearchKey::Null), Err(KeyError::Null { target: "i64" }));
	assert_eq!(
		i64::from_search_key(&SearchKey::Text("abc".into())),
		Err(KeyError::NotNumeric {
			key: "abc".into(),
			target: "i64"
		})
	);
	assert_eq!(
		u32::from_search_key(&SearchKey::Int(-1)),
		Err(KeyError::OutOfRange { key: -1, target: "u32" })
	);
	assert_eq!(
		i32::from_search_key(&SearchKey::Int(i64::MAX)),
		Err(KeyError::OutOfRange {
			key: i64::MAX,
			target: "i32"
		})
	);
}

#[test]
fn display_renders_raw_value() {
	assert_eq!(SearchKey::Int(5005).to_string(), "5005");
	assert_eq!(SearchKey::Text("x".into()).to_string(), "x");
	assert_eq!(SearchKey::Null.to_string(), "null");
}
