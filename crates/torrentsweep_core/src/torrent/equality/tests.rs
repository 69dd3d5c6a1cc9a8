use std::cmp::Ordering;

use crate::torrent::{Dict, Value};

#[test]
fn integers_compare_by_value() {
	let a = Value::Int(23);
	let b = Value::Int(42);
	let c = Value::Int(23);

	assert_eq!(a, c);
	assert_ne!(a, b);
	assert_eq!(a.cmp(&b), Ordering::Less);
	assert_eq!(b.cmp(&a), Ordering::Greater);
	assert_eq!(a.cmp(&a), Ordering::Equal);
}

#[test]
fn integers_match_native_numbers() {
	let value = Value::Int(23);

	assert!(value.eq_int(23));
	assert!(value.eq_int(23_u8));
	assert!(!value.eq_int(42));
	assert!(!value.eq_int(u64::MAX), "unconvertible operand is never equal");
	assert_eq!(value.cmp_int(23), Ordering::Equal);
	assert_eq!(value.cmp_int(42), Ordering::Less);
}

#[test]
fn strings_compare_by_content() {
	let foo = Value::text("foo");
	let bar = Value::text("bar");

	assert_eq!(foo, Value::text("foo"));
	assert_ne!(foo, bar);
	assert_eq!(foo.cmp(&bar), Ordering::Greater);
	assert!(foo.eq_text("foo"));
	assert!(!foo.eq_text("bar"));
	assert_eq!(foo.cmp_text("foo"), Ordering::Equal);
}

#[test]
fn strings_and_integers_never_match() {
	let text = Value::text("23");
	let int = Value::Int(23);

	assert_ne!(text, int);
	assert_ne!(int, text);
	assert!(!text.eq_int(23));
	assert!(!int.eq_text("23"));
	assert_eq!(int.cmp_text("23"), Ordering::Less);
	assert_eq!(text.cmp_int(23), Ordering::Less);
}

#[test]
fn absent_operand_is_never_equal() {
	let value = Value::text("foo");
	assert!(!value.eq_opt(None));
	assert!(value.eq_opt(Some(&Value::text("foo"))));
}

#[test]
fn lists_are_order_sensitive() {
	let forward = Value::list().push(Value::text("foo")).push(Value::text("bar"));
	let same = Value::list().push(Value::text("foo")).push(Value::text("bar"));
	let reversed = Value::list().push(Value::text("bar")).push(Value::text("foo"));
	let ints = Value::list().push(Value::Int(23)).push(Value::Int(42));

	assert_eq!(forward, same);
	assert_ne!(forward, reversed);
	assert_ne!(forward, ints);
	assert_eq!(forward.structural_hash(), same.structural_hash());
	assert_ne!(forward.structural_hash(), reversed.structural_hash());

	let items = forward.as_list().expect("list");
	assert!(items.contains(&Value::text("foo")));
	assert!(!items.contains(&Value::Int(23)));
}

#[test]
fn lists_of_different_length_differ() {
	let short = Value::list().push(Value::Int(1));
	let long = Value::list().push(Value::Int(1)).push(Value::Int(2));
	assert_ne!(short, long);
	assert_eq!(short.cmp(&long), Ordering::Less);
}

#[test]
fn dicts_ignore_insertion_order() {
	let ab = Value::dict().insert("a", Value::Int(1)).insert("b", Value::Int(2));
	let ba = Value::dict().insert("b", Value::Int(2)).insert("a", Value::Int(1));

	assert_eq!(ab, ba);
	assert_eq!(ab.structural_hash(), ba.structural_hash());
	assert_eq!(ab.cmp(&ba), Ordering::Equal);
}

#[test]
fn dicts_compare_values_pointwise() {
	let mut left = Dict::new();
	left.insert(Value::text("foo"), Value::text("bar"));
	let mut right = Dict::new();
	right.insert(Value::text("foo"), Value::text("baz"));
	let mut extra = left.clone();
	extra.insert(Value::text("qux"), Value::Int(0));

	assert_ne!(Value::Dict(left.clone()), Value::Dict(right));
	assert_ne!(Value::Dict(left.clone()), Value::Dict(extra));
	assert_eq!(Value::Dict(left.clone()), Value::Dict(left));
}

#[test]
fn nested_dicts_hash_consistently() {
	let inner_ab = Value::dict().insert("x", Value::Int(1)).insert("y", Value::list().push(Value::Int(2)));
	let inner_ba = Value::dict().insert("y", Value::list().push(Value::Int(2))).insert("x", Value::Int(1));
	let outer_a = Value::dict().insert("info", inner_ab).insert("comment", Value::text("c"));
	let outer_b = Value::dict().insert("comment", Value::text("c")).insert("info", inner_ba);

	assert_eq!(outer_a, outer_b);
	assert_eq!(outer_a.structural_hash(), outer_b.structural_hash());
}

#[test]
fn mixed_variants_order_by_rank() {
	let mut values = vec![Value::dict(), Value::list(), Value::Int(0), Value::text("")];
	values.sort();
	let kinds: Vec<_> = values.iter().map(Value::kind).collect();
	assert_eq!(kinds, ["string", "integer", "list", "dictionary"]);
}
