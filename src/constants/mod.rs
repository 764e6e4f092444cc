// Author: Dustin Pilgrim
// License: MIT

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::ast::is_valid_name;
use crate::SigilError;

mod expr;


static NUMBER_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+(\.\d+)?$").unwrap());

/// A single resolved constant: numeric, or verbatim text.
///
/// Text is stored exactly as written. A text value that happens to name
/// another constant is NOT dereferenced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Constant {
    Number(f64),
    Text(String),
}

impl Constant {
    pub fn as_number(&self) -> Option<f64> {
        if let Constant::Number(n) = self {
            Some(*n)
        } else {
            None
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        if let Constant::Text(s) = self {
            Some(s)
        } else {
            None
        }
    }
}

/// Insertion-ordered mapping of constant names to resolved values.
///
/// Each [`evaluate`] call builds and returns its own store; nothing is
/// shared between calls. Evaluated expression lines are stored under their
/// exact source text, so `store.number("{+ A B}")` looks up the result of
/// that line.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ConstantsStore {
    entries: IndexMap<String, Constant>,
}

impl ConstantsStore {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Constant> {
        self.entries.get(name)
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        self.entries.get(name).and_then(Constant::as_number)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.entries.get(name).and_then(Constant::as_text)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Constant)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Names in definition order.
    pub fn names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

/// Evaluate a constants script into a [`ConstantsStore`].
///
/// The script is processed line by line, top to bottom. Blank lines and
/// lines starting with `%` are comments. A line containing `=` is an
/// assignment: the name must be uppercase letters only, and the value is
/// stored as a number when it matches `digits[.digits]`, otherwise as
/// verbatim text. A line of the form `{<op> <left> <right>}` is an
/// arithmetic expression over numeric literals and previously defined
/// constants; its result is stored under the line's own text. Any other
/// line is silently ignored.
///
/// # Examples
/// ```
/// use sigil_dsl::evaluate;
///
/// let store = evaluate("A = 2\nB = 3\n{+ A B}")?;
/// assert_eq!(store.number("A"), Some(2.0));
/// assert_eq!(store.number("{+ A B}"), Some(5.0));
/// # Ok::<(), sigil_dsl::SigilError>(())
/// ```
///
/// # Errors
/// Fails with [`SigilError::InvalidConstantName`],
/// [`SigilError::MalformedExpression`], [`SigilError::UnresolvedOperand`]
/// or [`SigilError::DivideByZero`]; the first failure aborts the whole
/// evaluation and no partial store is returned.
pub fn evaluate(script: &str) -> Result<ConstantsStore, SigilError> {
    let mut store = ConstantsStore::new();

    for (idx, raw) in script.lines().enumerate() {
        let line = raw.trim();
        let line_no = idx + 1;

        if line.is_empty() || line.starts_with('%') {
            continue;
        }

        if let Some((name, value)) = line.split_once('=') {
            let name = name.trim();
            let value = value.trim();

            if !is_valid_name(name) {
                return Err(SigilError::InvalidConstantName {
                    name: name.to_string(),
                    line: line_no,
                    hint: Some("Constant names must be one or more uppercase letters".into()),
                    code: Some(201),
                });
            }

            let constant = match value.parse::<f64>() {
                Ok(n) if NUMBER_PATTERN.is_match(value) => Constant::Number(n),
                _ => Constant::Text(value.to_string()),
            };
            store.entries.insert(name.to_string(), constant);
        } else if line.starts_with('{') && line.ends_with('}') {
            let result = expr::eval_expression(line, line_no, &store)?;
            store.entries.insert(line.to_string(), Constant::Number(result));
        }
        // Any other line is ignored.
    }

    Ok(store)
}
