use once_cell::sync::Lazy;
use regex::Regex;

use super::{Constant, ConstantsStore};
use crate::SigilError;

static EXPRESSION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\{([+\-*/]|max) (\S+) (\S+)\}$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Max,
}

impl Op {
    fn from_symbol(symbol: &str) -> Option<Op> {
        match symbol {
            "+" => Some(Op::Add),
            "-" => Some(Op::Sub),
            "*" => Some(Op::Mul),
            "/" => Some(Op::Div),
            "max" => Some(Op::Max),
            _ => None,
        }
    }

    fn apply(self, left: f64, right: f64, line: usize) -> Result<f64, SigilError> {
        match self {
            Op::Add => Ok(left + right),
            Op::Sub => Ok(left - right),
            Op::Mul => Ok(left * right),
            Op::Div => {
                if right == 0.0 {
                    return Err(SigilError::DivideByZero {
                        line,
                        hint: Some("The right operand evaluates to zero".into()),
                        code: Some(204),
                    });
                }
                Ok(left / right)
            }
            Op::Max => Ok(left.max(right)),
        }
    }
}

/// Evaluate one `{<op> <left> <right>}` line against the constants defined
/// so far.
pub(super) fn eval_expression(
    text: &str,
    line: usize,
    store: &ConstantsStore,
) -> Result<f64, SigilError> {
    let captures = EXPRESSION_PATTERN
        .captures(text)
        .ok_or_else(|| malformed(text, line))?;

    let op = Op::from_symbol(&captures[1]).ok_or_else(|| malformed(text, line))?;

    let left = resolve_operand(&captures[2], line, store)?;
    let right = resolve_operand(&captures[3], line, store)?;

    op.apply(left, right, line)
}

fn malformed(text: &str, line: usize) -> SigilError {
    SigilError::MalformedExpression {
        text: text.to_string(),
        line,
        hint: Some("Expected {<+|-|*|/|max> <left> <right>}".into()),
        code: Some(202),
    }
}

/// An operand is a previously defined numeric constant, or a float literal.
fn resolve_operand(token: &str, line: usize, store: &ConstantsStore) -> Result<f64, SigilError> {
    if let Some(constant) = store.get(token) {
        return match constant {
            Constant::Number(n) => Ok(*n),
            Constant::Text(_) => Err(SigilError::UnresolvedOperand {
                token: token.to_string(),
                line,
                hint: Some(format!("Constant '{}' holds text, not a number", token)),
                code: Some(203),
            }),
        };
    }

    token.parse::<f64>().map_err(|_| SigilError::UnresolvedOperand {
        token: token.to_string(),
        line,
        hint: Some("Operands must be numbers or previously defined constants".into()),
        code: Some(203),
    })
}
