//! Structural equality, hashing, and ordering for [`Value`] trees.
//!
//! Dictionaries are compared, hashed, and ordered independently of their
//! insertion order. Comparisons against native Rust values go through the
//! named `eq_*`/`cmp_*` helpers rather than operator overloads.

use std::cmp::Ordering;
use std::hash::{DefaultHasher, Hash, Hasher};

use crate::torrent::{Dict, Value};

impl Value {
	/// True when this is a string holding exactly the UTF-8 bytes of `text`.
	pub fn eq_text(&self, text: &str) -> bool {
		self.eq_bytes(text.as_bytes())
	}

	/// True when this is a string holding exactly `bytes`.
	pub fn eq_bytes(&self, bytes: &[u8]) -> bool {
		matches!(self, Self::Str(own) if own.as_slice() == bytes)
	}

	/// True when this is an integer numerically equal to `other`.
	///
	/// Values that do not convert to `i64` never compare equal.
	pub fn eq_int<T: TryInto<i64>>(&self, other: T) -> bool {
		match (self, other.try_into()) {
			(Self::Int(own), Ok(other)) => *own == other,
			_ => false,
		}
	}

	/// Structural equality against a possibly absent value; absent is never equal.
	pub fn eq_opt(&self, other: Option<&Value>) -> bool {
		other.is_some_and(|other| self == other)
	}

	/// Order a string value against native text; other variants order as less.
	pub fn cmp_text(&self, text: &str) -> Ordering {
		match self {
			Self::Str(own) => own.as_slice().cmp(text.as_bytes()),
			_ => Ordering::Less,
		}
	}

	/// Order an integer value against a native integer; other variants and
	/// unconvertible operands order as less.
	pub fn cmp_int<T: TryInto<i64>>(&self, other: T) -> Ordering {
		match (self, other.try_into()) {
			(Self::Int(own), Ok(other)) => own.cmp(&other),
			_ => Ordering::Less,
		}
	}

	/// Stable structural hash; equal values always hash identically.
	pub fn structural_hash(&self) -> u64 {
		let mut hasher = DefaultHasher::new();
		self.hash(&mut hasher);
		hasher.finish()
	}

	fn rank(&self) -> u8 {
		match self {
			Self::Str(_) => 0,
			Self::Int(_) => 1,
			Self::List(_) => 2,
			Self::Dict(_) => 3,
		}
	}
}

impl PartialEq for Value {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Str(left), Self::Str(right)) => left == right,
			(Self::Int(left), Self::Int(right)) => left == right,
			(Self::List(left), Self::List(right)) => left.len() == right.len() && left.iter().zip(right).all(|(a, b)| a == b),
			(Self::Dict(left), Self::Dict(right)) => dict_eq(left, right),
			_ => false,
		}
	}
}

impl Eq for Value {}

impl Hash for Value {
	fn hash<H: Hasher>(&self, state: &mut H) {
		state.write_u8(self.rank());
		match self {
			Self::Str(bytes) => bytes.hash(state),
			Self::Int(value) => value.hash(state),
			Self::List(items) => {
				state.write_usize(items.len());
				for item in items {
					item.hash(state);
				}
			}
			Self::Dict(entries) => {
				state.write_usize(entries.len());
				state.write_u64(dict_hash(entries));
			}
		}
	}
}

impl PartialOrd for Value {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Value {
	fn cmp(&self, other: &Self) -> Ordering {
		match (self, other) {
			(Self::Str(left), Self::Str(right)) => left.cmp(right),
			(Self::Int(left), Self::Int(right)) => left.cmp(right),
			(Self::List(left), Self::List(right)) => left.cmp(right),
			(Self::Dict(left), Self::Dict(right)) => sorted_entries(left).cmp(&sorted_entries(right)),
			_ => self.rank().cmp(&other.rank()),
		}
	}
}

fn dict_eq(left: &Dict, right: &Dict) -> bool {
	left.len() == right.len() && left.iter().all(|(key, value)| right.get(key).is_some_and(|other| value == other))
}

// Wrapping sum of per-entry hashes: commutative, so insertion order drops out.
fn dict_hash(entries: &Dict) -> u64 {
	entries.iter().fold(0_u64, |acc, (key, value)| {
		let mut hasher = DefaultHasher::new();
		key.hash(&mut hasher);
		value.hash(&mut hasher);
		acc.wrapping_add(hasher.finish())
	})
}

fn sorted_entries(entries: &Dict) -> Vec<(&Value, &Value)> {
	let mut out: Vec<_> = entries.iter().collect();
	out.sort();
	out
}

#[cfg(test)]
mod tests;
