use std::borrow::Cow;

use indexmap::IndexMap;

/// Insertion-ordered dictionary payload of [`Value::Dict`].
pub type Dict = IndexMap<Value, Value>;

/// One decoded bencode term.
#[derive(Debug, Clone)]
pub enum Value {
	/// Binary-safe byte string.
	Str(Vec<u8>),
	/// Signed integer.
	Int(i64),
	/// Ordered sequence of terms.
	List(Vec<Value>),
	/// Key/value pairs; iteration order is kept, comparison ignores it.
	Dict(Dict),
}

impl Value {
	/// Create a string value from text.
	pub fn text(text: &str) -> Self {
		Self::Str(text.as_bytes().to_vec())
	}

	/// Create a string value from raw bytes.
	pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
		Self::Str(bytes.into())
	}

	/// Create an empty list.
	pub fn list() -> Self {
		Self::List(Vec::new())
	}

	/// Create an empty dictionary.
	pub fn dict() -> Self {
		Self::Dict(Dict::new())
	}

	/// Append an item to a list (builder pattern).
	///
	/// Debug builds panic on a non-list; release builds return it unchanged.
	pub fn push(mut self, item: Value) -> Self {
		debug_assert!(matches!(self, Self::List(_)), "push on {} value", self.kind());
		if let Self::List(items) = &mut self {
			items.push(item);
		}
		self
	}

	/// Insert a text-keyed entry into a dictionary (builder pattern).
	///
	/// Debug builds panic on a non-dictionary; release builds return it unchanged.
	pub fn insert(mut self, key: &str, value: Value) -> Self {
		debug_assert!(matches!(self, Self::Dict(_)), "insert on {} value", self.kind());
		if let Self::Dict(entries) = &mut self {
			entries.insert(Value::text(key), value);
		}
		self
	}

	/// Stable lowercase label for the variant.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Str(_) => "string",
			Self::Int(_) => "integer",
			Self::List(_) => "list",
			Self::Dict(_) => "dictionary",
		}
	}

	/// Borrow the payload of a string value.
	pub fn as_bytes(&self) -> Option<&[u8]> {
		match self {
			Self::Str(bytes) => Some(bytes),
			_ => None,
		}
	}

	/// Return the payload of an integer value.
	pub fn as_int(&self) -> Option<i64> {
		match self {
			Self::Int(value) => Some(*value),
			_ => None,
		}
	}

	/// Borrow the items of a list value.
	pub fn as_list(&self) -> Option<&[Value]> {
		match self {
			Self::List(items) => Some(items),
			_ => None,
		}
	}

	/// Borrow the entries of a dictionary value.
	pub fn as_dict(&self) -> Option<&Dict> {
		match self {
			Self::Dict(entries) => Some(entries),
			_ => None,
		}
	}

	/// Look up a text key in a dictionary value.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.as_dict()?.get(&Value::text(key))
	}

	/// Render a string value as UTF-8, replacing invalid sequences.
	pub fn to_text_lossy(&self) -> Option<Cow<'_, str>> {
		self.as_bytes().map(String::from_utf8_lossy)
	}
}

impl From<&str> for Value {
	fn from(text: &str) -> Self {
		Self::text(text)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}

impl From<Vec<Value>> for Value {
	fn from(items: Vec<Value>) -> Self {
		Self::List(items)
	}
}

impl From<Dict> for Value {
	fn from(entries: Dict) -> Self {
		Self::Dict(entries)
	}
}
