use crate::torrent::Value;

/// Encode a value tree to bencoded bytes.
pub fn encode(value: &Value) -> Vec<u8> {
	let mut buf = Vec::new();
	encode_into(value, &mut buf);
	buf
}

/// Encode into an existing buffer; dictionary entries are written in insertion order.
pub fn encode_into(value: &Value, buf: &mut Vec<u8>) {
	match value {
		Value::Str(bytes) => {
			buf.extend_from_slice(bytes.len().to_string().as_bytes());
			buf.push(b':');
			buf.extend_from_slice(bytes);
		}
		Value::Int(number) => {
			buf.push(b'i');
			buf.extend_from_slice(number.to_string().as_bytes());
			buf.push(b'e');
		}
		Value::List(items) => {
			buf.push(b'l');
			for item in items {
				encode_into(item, buf);
			}
			buf.push(b'e');
		}
		Value::Dict(entries) => {
			buf.push(b'd');
			for (key, item) in entries {
				encode_into(key, buf);
				encode_into(item, buf);
			}
			buf.push(b'e');
		}
	}
}

impl Value {
	/// Encode this value to bencoded bytes.
	pub fn to_bencode(&self) -> Vec<u8> {
		encode(self)
	}
}
