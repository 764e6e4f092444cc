// Author: Dustin Pilgrim
// License: MIT

use crate::ast::Value;
use crate::constants::ConstantsStore;
use crate::SigilError;

/// Export a value tree to pretty-printed JSON.
///
/// Tables become objects (key order preserved), lists become arrays, and
/// scalars map directly. Useful for inspecting a tree without rendering it
/// to SIGIL.
///
/// # Examples
/// ```
/// use sigil_dsl::{export, Value};
/// use serde_json::json;
///
/// let tree = Value::try_from(json!({ "PORT": 8080 }))?;
/// let json_output = export::export_value_to_json(&tree)?;
/// assert!(json_output.contains("\"PORT\": 8080"));
/// # Ok::<(), sigil_dsl::SigilError>(())
/// ```
pub fn export_value_to_json(value: &Value) -> Result<String, SigilError> {
    Ok(serde_json::to_string_pretty(value).unwrap())
}

/// Export a constants store to pretty-printed JSON.
///
/// Entries keep definition order. Expression results appear under their
/// source-text keys, e.g. `"{+ A B}": 5.0`.
pub fn export_store_to_json(store: &ConstantsStore) -> Result<String, SigilError> {
    Ok(serde_json::to_string_pretty(store).unwrap())
}
