use crate::torrent::bytes::Cursor;
use crate::torrent::{Dict, Result, SweepError, Value};

/// What to do when a dictionary repeats a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateKeyPolicy {
	/// Fail the decode with [`SweepError::DuplicateKey`].
	Reject,
	/// Keep the first position, overwrite with the later value.
	LastWins,
}

/// Runtime limits and grammar switches for bencode decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum number of nested lists/dictionaries.
	pub max_depth: u32,
	/// Handling of repeated dictionary keys.
	pub duplicate_keys: DuplicateKeyPolicy,
	/// Accept a single leading `-` in integers.
	pub allow_negative: bool,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_depth: 64,
			duplicate_keys: DuplicateKeyPolicy::Reject,
			allow_negative: true,
		}
	}
}

impl DecodeOptions {
	/// Strict preset where `-` is not an integer digit, so negative integers are rejected.
	pub fn strict() -> Self {
		Self {
			allow_negative: false,
			..Self::default()
		}
	}
}

/// Recursive-descent bencode parser.
pub struct Decoder<'o> {
	options: &'o DecodeOptions,
}

impl<'o> Decoder<'o> {
	/// Create a decoder bound to `options`.
	pub fn new(options: &'o DecodeOptions) -> Self {
		Self { options }
	}

	/// Parse one term starting at the cursor, leaving it right after the term.
	pub fn parse_term(&self, cursor: &mut Cursor<'_>) -> Result<Value> {
		self.parse_at_depth(cursor, 0)
	}

	fn parse_at_depth(&self, cursor: &mut Cursor<'_>, depth: u32) -> Result<Value> {
		match cursor.peek_required()? {
			b'0'..=b'9' => parse_string(cursor).map(Value::Str),
			b'i' => self.parse_integer(cursor).map(Value::Int),
			b'l' => self.parse_list(cursor, depth),
			b'd' => self.parse_dict(cursor, depth),
			_ => Err(SweepError::MalformedInput {
				at: cursor.pos(),
				reason: "unknown term type",
			}),
		}
	}

	fn parse_integer(&self, cursor: &mut Cursor<'_>) -> Result<i64> {
		cursor.expect_byte(b'i', "expected 'i'")?;

		let negative = self.options.allow_negative && cursor.peek_required()? == b'-';
		if negative {
			cursor.next_byte()?;
		}

		let digits_at = cursor.pos();
		let digits = cursor.read_digits();
		let end_at = cursor.pos();
		if cursor.next_byte()? != b'e' {
			return Err(SweepError::MalformedInput {
				at: end_at,
				reason: "invalid integer digit",
			});
		}

		if digits.is_empty() {
			return Err(SweepError::MalformedInput {
				at: digits_at,
				reason: "empty integer",
			});
		}
		if digits.len() > 1 && digits[0] == b'0' {
			return Err(SweepError::MalformedInput {
				at: digits_at,
				reason: "leading zero in integer",
			});
		}
		if negative && digits == b"0" {
			return Err(SweepError::MalformedInput {
				at: digits_at,
				reason: "negative zero",
			});
		}

		accumulate_i64(digits, negative).ok_or(SweepError::MalformedInput {
			at: digits_at,
			reason: "integer out of range",
		})
	}

	fn parse_list(&self, cursor: &mut Cursor<'_>, depth: u32) -> Result<Value> {
		self.enter(depth)?;
		cursor.expect_byte(b'l', "expected 'l'")?;

		let mut items = Vec::new();
		while cursor.peek_required()? != b'e' {
			items.push(self.parse_at_depth(cursor, depth + 1)?);
		}
		cursor.next_byte()?;

		Ok(Value::List(items))
	}

	fn parse_dict(&self, cursor: &mut Cursor<'_>, depth: u32) -> Result<Value> {
		self.enter(depth)?;
		cursor.expect_byte(b'd', "expected 'd'")?;

		let mut entries = Dict::new();
		while cursor.peek_required()? != b'e' {
			let key_at = cursor.pos();
			let key = self.parse_at_depth(cursor, depth + 1)?;
			let value = self.parse_at_depth(cursor, depth + 1)?;

			if self.options.duplicate_keys == DuplicateKeyPolicy::Reject && entries.contains_key(&key) {
				return Err(SweepError::DuplicateKey {
					at: key_at,
					key: key_label(&key),
				});
			}
			entries.insert(key, value);
		}
		cursor.next_byte()?;

		Ok(Value::Dict(entries))
	}

	fn enter(&self, depth: u32) -> Result<()> {
		if depth >= self.options.max_depth {
			return Err(SweepError::TooDeeplyNested {
				max_depth: self.options.max_depth,
			});
		}
		Ok(())
	}
}

/// Decode the first term of `bytes` with default options; trailing bytes are ignored.
pub fn decode(bytes: &[u8]) -> Result<Value> {
	decode_prefix(bytes, &DecodeOptions::default()).map(|(value, _)| value)
}

/// Decode the first term of `bytes`, returning it with the number of bytes consumed.
pub fn decode_prefix(bytes: &[u8], options: &DecodeOptions) -> Result<(Value, usize)> {
	let mut cursor = Cursor::new(bytes);
	let value = Decoder::new(options).parse_term(&mut cursor)?;
	Ok((value, cursor.pos()))
}

/// Decode exactly one term spanning all of `bytes`.
pub fn decode_exact(bytes: &[u8], options: &DecodeOptions) -> Result<Value> {
	let (value, consumed) = decode_prefix(bytes, options)?;
	if consumed != bytes.len() {
		return Err(SweepError::MalformedInput {
			at: consumed,
			reason: "trailing bytes after term",
		});
	}
	Ok(value)
}

fn parse_string(cursor: &mut Cursor<'_>) -> Result<Vec<u8>> {
	let len_at = cursor.pos();
	let digits = cursor.read_digits();
	if digits.is_empty() {
		return Err(SweepError::MalformedInput {
			at: len_at,
			reason: "expected string length",
		});
	}

	let sep_at = cursor.pos();
	if cursor.next_byte()? != b':' {
		return Err(SweepError::MalformedInput {
			at: sep_at,
			reason: "expected ':' after string length",
		});
	}

	let len = accumulate_i64(digits, false)
		.and_then(|len| usize::try_from(len).ok())
		.ok_or(SweepError::MalformedInput {
			at: len_at,
			reason: "string length out of range",
		})?;

	Ok(cursor.read_exact(len)?.to_vec())
}

fn accumulate_i64(digits: &[u8], negative: bool) -> Option<i64> {
	digits.iter().try_fold(0_i64, |acc, byte| {
		let digit = i64::from(byte - b'0');
		let acc = acc.checked_mul(10)?;
		if negative { acc.checked_sub(digit) } else { acc.checked_add(digit) }
	})
}

fn key_label(key: &Value) -> String {
	match key {
		Value::Str(bytes) => String::from_utf8_lossy(bytes).into_owned(),
		Value::Int(value) => value.to_string(),
		other => format!("<{}>", other.kind()),
	}
}
