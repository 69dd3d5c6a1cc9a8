use std::fmt::Write as _;

use crate::torrent::{TextCodec, Value};

/// Presentation limits for [`pretty_print_with`].
#[derive(Debug, Clone, Copy)]
pub struct PrettyOptions {
	/// Codec used to turn string payloads into text.
	pub codec: TextCodec,
	/// Maximum number of Unicode scalar values printed per string.
	pub max_string_len: Option<usize>,
	/// Render strings that are not clean text as `<N bytes>`.
	pub binary_placeholder: bool,
}

impl Default for PrettyOptions {
	fn default() -> Self {
		Self {
			codec: TextCodec::default(),
			max_string_len: None,
			binary_placeholder: false,
		}
	}
}

impl PrettyOptions {
	/// Preset tuned for interactive terminal output.
	pub fn for_terminal() -> Self {
		Self {
			codec: TextCodec::default(),
			max_string_len: Some(120),
			binary_placeholder: true,
		}
	}
}

/// Render a value tree with the default layout, starting `indent` columns in.
pub fn pretty_print(value: &Value, indent: usize) -> String {
	pretty_print_with(value, indent, &PrettyOptions::default())
}

/// Render a value tree with explicit presentation options.
pub fn pretty_print_with(value: &Value, indent: usize, options: &PrettyOptions) -> String {
	let mut out = String::new();
	render(&mut out, value, indent, options);
	out
}

fn render(out: &mut String, value: &Value, indent: usize, options: &PrettyOptions) {
	let pad = " ".repeat(indent);
	match value {
		Value::Str(bytes) => {
			if options.binary_placeholder && looks_binary(bytes, options.codec) {
				let _ = writeln!(out, "{pad}<{} bytes>", bytes.len());
			} else {
				let text = options.codec.decode(bytes);
				let _ = writeln!(out, "{pad}'{}'", truncate(&text, options.max_string_len));
			}
		}
		Value::Int(number) => {
			let _ = writeln!(out, "{pad}{number}");
		}
		Value::List(items) => {
			let _ = writeln!(out, "{pad}(");
			for item in items {
				render(out, item, indent + 2, options);
			}
			let _ = writeln!(out, "{pad})");
		}
		Value::Dict(entries) => {
			let _ = writeln!(out, "{pad}[");
			for (key, item) in entries {
				render(out, key, indent + 2, options);
				render(out, item, indent + 2, options);
				let _ = writeln!(out, "{pad}  ----");
			}
			let _ = writeln!(out, "{pad}]");
		}
	}
}

fn looks_binary(bytes: &[u8], codec: TextCodec) -> bool {
	!codec.is_clean(bytes) || codec.decode(bytes).chars().any(|ch| ch.is_control() && ch != '\t')
}

fn truncate(input: &str, max_len: Option<usize>) -> String {
	let Some(max_len) = max_len else {
		return input.to_owned();
	};
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}

#[cfg(test)]
mod tests {
	use super::{PrettyOptions, pretty_print, pretty_print_with};
	use crate::torrent::{TextCodec, Value};

	#[test]
	fn scalars_render_on_one_line() {
		assert_eq!(pretty_print(&Value::text("spam"), 0), "'spam'\n");
		assert_eq!(pretty_print(&Value::Int(-7), 4), "    -7\n");
	}

	#[test]
	fn list_children_indent_two_columns() {
		let list = Value::list().push(Value::text("a")).push(Value::Int(1));
		assert_eq!(pretty_print(&list, 0), "(\n  'a'\n  1\n)\n");
	}

	#[test]
	fn dict_entries_are_separated() {
		let dict = Value::dict().insert("k", Value::list().push(Value::Int(2)));
		let expected = "[\n  'k'\n  (\n    2\n  )\n  ----\n]\n";
		assert_eq!(pretty_print(&dict, 0), expected);
	}

	#[test]
	fn nested_indent_offsets_every_line() {
		let dict = Value::dict().insert("a", Value::Int(1));
		assert_eq!(pretty_print(&dict, 2), "  [\n    'a'\n    1\n    ----\n  ]\n");
	}

	#[test]
	fn terminal_preset_hides_binary_and_truncates() {
		let options = PrettyOptions {
			max_string_len: Some(3),
			..PrettyOptions::for_terminal()
		};
		assert_eq!(pretty_print_with(&Value::bytes(vec![0x00, 0xff, 0x10]), 0, &options), "<3 bytes>\n");
		assert_eq!(pretty_print_with(&Value::text("abcdef"), 0, &options), "'abc...'\n");
	}

	#[test]
	fn declared_codec_is_used_for_text() {
		let options = PrettyOptions {
			codec: TextCodec::from_label("latin1").expect("latin1 resolves"),
			..PrettyOptions::default()
		};
		assert_eq!(pretty_print_with(&Value::bytes(b"caf\xe9".to_vec()), 0, &options), "'café'\n");
	}
}
