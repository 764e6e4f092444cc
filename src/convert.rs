use indexmap::IndexMap;

use crate::ast::{Number, Value};
use crate::SigilError;

impl TryFrom<serde_json::Value> for Value {
    type Error = SigilError;

    /// Adapt a parsed JSON tree into a SIGIL value tree.
    ///
    /// Key order of objects is preserved. Booleans and nulls have no SIGIL
    /// representation and are rejected; key naming is not checked here, it
    /// is enforced at render time.
    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::Object(map) => {
                let mut entries = IndexMap::with_capacity(map.len());
                for (key, child) in map {
                    entries.insert(key, Value::try_from(child)?);
                }
                Ok(Value::Table(entries))
            }
            serde_json::Value::Array(items) => {
                let mut list = Vec::with_capacity(items.len());
                for item in items {
                    list.push(Value::try_from(item)?);
                }
                Ok(Value::List(list))
            }
            serde_json::Value::String(s) => Ok(Value::Text(s)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Value::Number(Number::Int(i)))
                } else if let Some(f) = n.as_f64() {
                    Ok(Value::Number(Number::Float(f)))
                } else {
                    Err(SigilError::UnsupportedType {
                        kind: format!("number {}", n),
                        hint: Some("Numbers must fit in i64 or f64".into()),
                        code: Some(102),
                    })
                }
            }
            serde_json::Value::Bool(_) => Err(SigilError::UnsupportedType {
                kind: "boolean".into(),
                hint: Some("SIGIL has no boolean form".into()),
                code: Some(102),
            }),
            serde_json::Value::Null => Err(SigilError::UnsupportedType {
                kind: "null".into(),
                hint: Some("SIGIL has no null form".into()),
                code: Some(102),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_becomes_ordered_table() {
        let value = Value::try_from(json!({ "B": 1, "A": 2 })).expect("Failed to convert");

        let table = value.as_table().expect("Expected a table");
        let keys: Vec<_> = table.keys().cloned().collect();
        assert_eq!(keys, vec!["B".to_string(), "A".to_string()]);
    }

    #[test]
    fn test_scalar_mapping() {
        let value =
            Value::try_from(json!({ "N": 7, "F": 1.25, "S": "text" })).expect("Failed to convert");

        let table = value.as_table().expect("Expected a table");
        assert_eq!(table["N"].as_number(), Some(Number::Int(7)));
        assert_eq!(table["F"].as_number(), Some(Number::Float(1.25)));
        assert_eq!(table["S"].as_text(), Some("text"));
    }

    #[test]
    fn test_array_becomes_list() {
        let value = Value::try_from(json!([1, "a"])).expect("Failed to convert");

        let list = value.as_list().expect("Expected a list");
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_boolean_is_unsupported() {
        let err = Value::try_from(json!({ "FLAG": true })).unwrap_err();

        match err {
            SigilError::UnsupportedType { kind, code, .. } => {
                assert_eq!(kind, "boolean");
                assert_eq!(code, Some(102));
            }
            _ => panic!("Expected UnsupportedType for boolean"),
        }
    }

    #[test]
    fn test_null_is_unsupported() {
        let err = Value::try_from(json!({ "GONE": null })).unwrap_err();

        match err {
            SigilError::UnsupportedType { kind, .. } => assert_eq!(kind, "null"),
            _ => panic!("Expected UnsupportedType for null"),
        }
    }

    #[test]
    fn test_lowercase_keys_pass_conversion() {
        // Naming is a render-time rule, not a conversion-time rule.
        let value = Value::try_from(json!({ "lower": 1 })).expect("Failed to convert");
        assert!(value.as_table().is_some());
    }
}
