// Author: Dustin Pilgrim
// License: MIT

use crate::ast::{is_valid_name, Value};
use crate::SigilError;

/// Render a value tree as SIGIL text.
///
/// Table entries are emitted in insertion order, indented two spaces per
/// nesting level. Nested tables and lists get a `KEY =` header line; lists
/// always collapse to a single `#( ... )` line. Strings are double-quoted
/// without escaping, so embedded quote characters produce ambiguous output.
///
/// The first invalid key anywhere in the tree aborts the whole render; no
/// partial output is returned.
///
/// # Examples
/// ```
/// use sigil_dsl::{render, Value};
/// use serde_json::json;
///
/// let tree = Value::try_from(json!({ "HOST": "localhost", "PORT": 8080 }))?;
/// assert_eq!(render(&tree)?, "HOST = \"localhost\"\nPORT = 8080");
/// # Ok::<(), sigil_dsl::SigilError>(())
/// ```
///
/// # Errors
/// Returns [`SigilError::InvalidKey`] when a table key is not made of
/// uppercase letters only.
pub fn render(value: &Value) -> Result<String, SigilError> {
    render_value(value, 0)
}

fn render_value(value: &Value, depth: usize) -> Result<String, SigilError> {
    let indent = "  ".repeat(depth);

    match value {
        Value::Table(entries) => {
            let mut lines = Vec::new();
            for (key, child) in entries {
                if !is_valid_name(key) {
                    return Err(SigilError::InvalidKey {
                        key: key.clone(),
                        hint: Some("Keys must be one or more uppercase letters".into()),
                        code: Some(101),
                    });
                }
                match child {
                    Value::Table(_) => {
                        lines.push(format!("{}{} =", indent, key));
                        lines.push(render_value(child, depth + 1)?);
                    }
                    Value::List(_) => {
                        // List lines align with their key header.
                        lines.push(format!("{}{} =", indent, key));
                        lines.push(format!("{}{}", indent, render_value(child, depth + 1)?));
                    }
                    _ => {
                        let scalar = render_value(child, depth)?;
                        lines.push(format!("{}{} = {}", indent, key, scalar.trim()));
                    }
                }
            }
            Ok(lines.join("\n"))
        }
        Value::List(items) => {
            let mut parts = Vec::new();
            for item in items {
                parts.push(collapse(&render_value(item, depth)?));
            }
            Ok(format!("#( {} )", parts.join(" ")))
        }
        Value::Text(s) => Ok(format!("\"{}\"", s)),
        Value::Number(n) => Ok(n.to_string()),
    }
}

/// Squash a multi-line rendering into one line so list elements always
/// occupy a single visual construct.
fn collapse(rendered: &str) -> String {
    if !rendered.contains('\n') {
        return rendered.trim().to_string();
    }
    rendered
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn tree(value: serde_json::Value) -> Value {
        Value::try_from(value).expect("Failed to convert test tree")
    }

    #[test]
    fn test_render_nested_table_with_list() {
        let input = tree(json!({
            "ROOT": {
                "NAME": "demo",
                "VALUES": [1, 2, 3]
            }
        }));

        let output = render(&input).expect("Failed to render tree");

        assert_eq!(
            output,
            "ROOT =\n  NAME = \"demo\"\n  VALUES =\n  #( 1 2 3 )"
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let input = tree(json!({
            "APP": { "NAME": "sigil", "PORT": 8080, "TAGS": ["a", "b"] }
        }));

        let first = render(&input).expect("Failed to render tree");
        let second = render(&input).expect("Failed to render tree");

        assert_eq!(first, second);
    }

    #[test]
    fn test_render_preserves_key_order() {
        let input = tree(json!({ "ZETA": 1, "ALPHA": 2, "MID": 3 }));

        let output = render(&input).expect("Failed to render tree");

        assert_eq!(output, "ZETA = 1\nALPHA = 2\nMID = 3");
    }

    #[test]
    fn test_indentation_grows_two_spaces_per_level() {
        let input = tree(json!({
            "A": { "B": { "C": { "D": 1 } } }
        }));

        let output = render(&input).expect("Failed to render tree");

        assert_eq!(output, "A =\n  B =\n    C =\n      D = 1");
    }

    #[test]
    fn test_list_always_renders_as_single_line() {
        let input = tree(json!({
            "ITEMS": [{ "ID": 1, "TAG": "x" }, [4, 5], "plain"]
        }));

        let output = render(&input).expect("Failed to render tree");

        assert_eq!(
            output,
            "ITEMS =\n#( ID = 1 TAG = \"x\" #( 4 5 ) \"plain\" )"
        );
    }

    #[test]
    fn test_root_list() {
        let input = tree(json!([1, "two", 3.5]));

        let output = render(&input).expect("Failed to render tree");

        assert_eq!(output, "#( 1 \"two\" 3.5 )");
    }

    #[test]
    fn test_empty_list() {
        let input = tree(json!({ "EMPTY": [] }));

        let output = render(&input).expect("Failed to render tree");

        assert_eq!(output, "EMPTY =\n#(  )");
    }

    #[test]
    fn test_integer_and_float_forms() {
        let input = tree(json!({ "COUNT": 42, "RATIO": 2.5 }));

        let output = render(&input).expect("Failed to render tree");

        assert_eq!(output, "COUNT = 42\nRATIO = 2.5");
    }

    #[test]
    fn test_whole_float_keeps_decimal_point() {
        let input = tree(json!({ "RATIO": 2.0 }));

        let output = render(&input).expect("Failed to render tree");

        assert_eq!(output, "RATIO = 2.0");
    }

    #[test]
    fn test_invalid_key_at_root() {
        let input = tree(json!({ "lowercase": 1 }));

        let err = render(&input).unwrap_err();
        match err {
            SigilError::InvalidKey { key, code, .. } => {
                assert_eq!(key, "lowercase");
                assert_eq!(code, Some(101));
            }
            _ => panic!("Expected InvalidKey for lowercase key"),
        }
    }

    #[test]
    fn test_invalid_key_nested() {
        let input = tree(json!({
            "ROOT": { "GOOD": 1, "BAD_KEY": 2 }
        }));

        let err = render(&input).unwrap_err();
        match err {
            SigilError::InvalidKey { key, .. } => assert_eq!(key, "BAD_KEY"),
            _ => panic!("Expected InvalidKey for underscored key"),
        }
    }

    #[test]
    fn test_invalid_key_inside_list_element() {
        let input = tree(json!({
            "ITEMS": [{ "ok": 1 }]
        }));

        let err = render(&input).unwrap_err();
        match err {
            SigilError::InvalidKey { key, .. } => assert_eq!(key, "ok"),
            _ => panic!("Expected InvalidKey inside list element"),
        }
    }

    #[test]
    fn test_strings_are_quoted_verbatim() {
        // Embedded quotes are not escaped. Documented limitation.
        let input = tree(json!({ "MSG": "say \"hi\"" }));

        let output = render(&input).expect("Failed to render tree");

        assert_eq!(output, "MSG = \"say \"hi\"\"");
    }
}
