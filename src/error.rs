use std::fmt;

/// The main error type for SIGIL rendering and constant evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum SigilError {
    /// Raised when a table key fails the uppercase-letters-only rule.
    InvalidKey {
        key: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a foreign value has no SIGIL representation.
    UnsupportedType {
        kind: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when an assignment target fails the naming rule.
    InvalidConstantName {
        name: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when an expression line does not match `{op left right}`.
    MalformedExpression {
        text: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    UnresolvedOperand {
        token: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    DivideByZero {
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
}

impl fmt::Display for SigilError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SigilError::InvalidKey { key, hint, code } =>
                write!(f, "[SIGIL] Invalid key '{}'{}{}",
                    key,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            SigilError::UnsupportedType { kind, hint, code } =>
                write!(f, "[SIGIL] Unsupported value type '{}'{}{}",
                    kind,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            SigilError::InvalidConstantName { name, line, hint, code } =>
                write!(f, "[SIGIL] Invalid constant name '{}' at line {}{}{}",
                    name, line,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            SigilError::MalformedExpression { text, line, hint, code } =>
                write!(f, "[SIGIL] Malformed expression '{}' at line {}{}{}",
                    text, line,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            SigilError::UnresolvedOperand { token, line, hint, code } =>
                write!(f, "[SIGIL] Unresolved operand '{}' at line {}{}{}",
                    token, line,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            SigilError::DivideByZero { line, hint, code } =>
                write!(f, "[SIGIL] Division by zero at line {}{}{}",
                    line,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
        }
    }
}

impl std::error::Error for SigilError {}
