//! Canonical pretty-printer for translation files.
//!
//! The output format is fixed independently of any JSON library's default
//! formatting: 4-space indentation, source key order, a small fixed escape
//! set, and no trailing newline. Re-running the tool over an already
//! canonical tree is a no-op, so diffs stay minimal and human-reviewable.

use serde_json::Number;

/// A value as the encoder sees it.
///
/// The source format only ever nests one level deep (a record object per
/// translation key), but the encoder is recursive and handles arbitrary
/// nesting.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An ordered object; iteration order is emission order.
    Object(Vec<(String, Value)>),
    /// A quoted, escaped string.
    String(String),
    /// An unquoted number in its natural textual form.
    Number(Number),
    /// The literal `null`.
    Null,
}

const INDENT_UNIT: &str = "    ";

/// Escapes backspace, tab, newline, carriage return, form feed, and double
/// quote. Everything else, including `/`, backslash, and non-ASCII, is
/// emitted literally.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\u{0008}' => out.push_str("\\b"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{000C}' => out.push_str("\\f"),
            '"' => out.push_str("\\\""),
            _ => out.push(c),
        }
    }
    out
}

/// Encodes an ordered mapping as a canonical pretty-printed object.
///
/// Entry lines are indented one unit deeper than the brace lines; nested
/// objects start on the line after their key and recurse one level deeper.
/// The final entry carries no trailing comma, an empty mapping renders as a
/// bare brace pair on two lines, and there is no newline after the closing
/// brace. Top-level callers pass `indent = 0`.
pub fn encode(entries: &[(String, Value)], indent: usize) -> String {
    let pad = INDENT_UNIT.repeat(indent);
    if entries.is_empty() {
        return format!("{pad}{{\n{pad}}}");
    }

    let entry_pad = INDENT_UNIT.repeat(indent + 1);
    let mut out = String::new();

    for (key, value) in entries {
        out.push_str(&entry_pad);
        out.push('"');
        out.push_str(&escape(key));
        out.push_str("\": ");

        match value {
            Value::Object(fields) => {
                out.push('\n');
                out.push_str(&encode(fields, indent + 1));
            }
            Value::String(s) => {
                out.push('"');
                out.push_str(&escape(s));
                out.push('"');
            }
            Value::Number(n) => out.push_str(&n.to_string()),
            Value::Null => out.push_str("null"),
        }

        out.push_str(",\n");
    }

    // Strip the trailing ",\n" of the final entry.
    out.truncate(out.len() - 2);

    format!("{pad}{{\n{out}\n{pad}}}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[(&str, Value)]) -> Value {
        Value::Object(
            fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        )
    }

    #[test]
    fn test_empty_mapping_is_a_bare_brace_pair() {
        assert_eq!(encode(&[], 0), "{\n}");
    }

    #[test]
    fn test_single_record_layout() {
        let entries = vec![(
            "app_name".to_string(),
            record(&[("message", Value::String("My App".to_string()))]),
        )];
        let expected = "{\n    \"app_name\": \n    {\n        \"message\": \"My App\"\n    }\n}";
        assert_eq!(encode(&entries, 0), expected);
    }

    #[test]
    fn test_no_trailing_comma_and_no_trailing_newline() {
        let entries = vec![
            ("a".to_string(), record(&[("message", Value::String("A".to_string()))])),
            ("b".to_string(), record(&[("message", Value::String("B".to_string()))])),
        ];
        let out = encode(&entries, 0);
        assert!(out.ends_with("\"B\"\n    }\n}"));
        assert!(!out.contains(",\n}"));
        assert!(!out.ends_with('\n'));
    }

    #[test]
    fn test_key_order_is_input_order() {
        let entries = vec![
            ("zebra".to_string(), Value::Null),
            ("alpha".to_string(), Value::Null),
        ];
        let out = encode(&entries, 0);
        let zebra = out.find("zebra").unwrap();
        let alpha = out.find("alpha").unwrap();
        assert!(zebra < alpha);
    }

    #[test]
    fn test_description_field_follows_message() {
        let entries = vec![(
            "greeting".to_string(),
            record(&[
                ("message", Value::String("Hello".to_string())),
                ("description", Value::String("Shown on launch".to_string())),
            ]),
        )];
        let expected = concat!(
            "{\n",
            "    \"greeting\": \n",
            "    {\n",
            "        \"message\": \"Hello\",\n",
            "        \"description\": \"Shown on launch\"\n",
            "    }\n",
            "}"
        );
        assert_eq!(encode(&entries, 0), expected);
    }

    #[test]
    fn test_escaping_covers_the_fixed_set() {
        let entries = vec![(
            "k".to_string(),
            Value::String("a\"b\nc\td\re\u{0008}f\u{000C}g".to_string()),
        )];
        let out = encode(&entries, 0);
        assert!(out.contains(r#""a\"b\nc\td\re\bf\fg""#));
    }

    #[test]
    fn test_forward_slash_and_non_ascii_stay_literal() {
        let entries = vec![(
            "k".to_string(),
            Value::String("https://example.com/ übergroß 日本語".to_string()),
        )];
        let out = encode(&entries, 0);
        assert!(out.contains("https://example.com/ übergroß 日本語"));
    }

    #[test]
    fn test_null_and_number_render_unquoted() {
        let entries = vec![
            ("missing".to_string(), Value::Null),
            ("count".to_string(), Value::Number(Number::from(42))),
        ];
        let out = encode(&entries, 0);
        assert!(out.contains("\"missing\": null"));
        assert!(out.contains("\"count\": 42"));
    }

    #[test]
    fn test_nested_indentation_steps_by_four_spaces() {
        let entries = vec![(
            "outer".to_string(),
            record(&[("inner", record(&[("leaf", Value::Null)]))]),
        )];
        let expected = concat!(
            "{\n",
            "    \"outer\": \n",
            "    {\n",
            "        \"inner\": \n",
            "        {\n",
            "            \"leaf\": null\n",
            "        }\n",
            "    }\n",
            "}"
        );
        assert_eq!(encode(&entries, 0), expected);
    }
}
