//! Arithmetic builtins: left folds over number arguments
//!
//! Arithmetic wraps on overflow (two's-complement). A zero divisor aborts
//! the fold with a division-by-zero error regardless of later operands.

use crate::environment::Environment;
use crate::error::EvalError;
use crate::value::Value;

#[derive(Clone, Copy)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

fn fold(name: &str, op: Op, args: Vec<Value>) -> Result<Value, EvalError> {
    let mut terms = Vec::with_capacity(args.len());
    for (index, arg) in args.iter().enumerate() {
        match arg {
            Value::Number(n) => terms.push(*n),
            other => {
                return Err(EvalError::Type {
                    name: name.to_string(),
                    index,
                    got: other.type_name(),
                    expected: "Number",
                })
            }
        }
    }

    let mut terms = terms.into_iter();
    let mut acc = match terms.next() {
        Some(first) => first,
        None => {
            return Err(EvalError::Arity {
                name: name.to_string(),
                got: 0,
                expected: 1,
            })
        }
    };

    // Unary minus negates.
    if matches!(op, Op::Sub) && terms.len() == 0 {
        return Ok(Value::Number(acc.wrapping_neg()));
    }

    for term in terms {
        acc = match op {
            Op::Add => acc.wrapping_add(term),
            Op::Sub => acc.wrapping_sub(term),
            Op::Mul => acc.wrapping_mul(term),
            Op::Div => {
                if term == 0 {
                    return Err(EvalError::DivisionByZero);
                }
                acc.wrapping_div(term)
            }
        };
    }
    Ok(Value::Number(acc))
}

/// `+` / `add`
pub(super) fn add(_env: &mut Environment, args: Vec<Value>) -> Result<Value, EvalError> {
    fold("+", Op::Add, args)
}

/// `-` / `subtract`
pub(super) fn sub(_env: &mut Environment, args: Vec<Value>) -> Result<Value, EvalError> {
    fold("-", Op::Sub, args)
}

/// `*` / `multiply`
pub(super) fn mul(_env: &mut Environment, args: Vec<Value>) -> Result<Value, EvalError> {
    fold("*", Op::Mul, args)
}

/// `/` / `divide`
pub(super) fn div(_env: &mut Environment, args: Vec<Value>) -> Result<Value, EvalError> {
    fold("/", Op::Div, args)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(ns: &[i64]) -> Vec<Value> {
        ns.iter().copied().map(Value::Number).collect()
    }

    #[test]
    fn test_left_fold() {
        assert_eq!(
            fold("-", Op::Sub, numbers(&[10, 3, 2])),
            Ok(Value::Number(5))
        );
    }

    #[test]
    fn test_unary_minus_negates() {
        assert_eq!(fold("-", Op::Sub, numbers(&[7])), Ok(Value::Number(-7)));
    }

    #[test]
    fn test_division_by_zero_aborts_fold() {
        assert_eq!(
            fold("/", Op::Div, numbers(&[8, 0, 2])),
            Err(EvalError::DivisionByZero)
        );
    }

    #[test]
    fn test_type_error_reports_position() {
        let args = vec![Value::Number(1), Value::symbol("x")];
        assert_eq!(
            fold("+", Op::Add, args),
            Err(EvalError::Type {
                name: "+".to_string(),
                index: 1,
                got: "Symbol",
                expected: "Number",
            })
        );
    }
}
