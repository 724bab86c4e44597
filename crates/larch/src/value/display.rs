//! Display rendering for values
//!
//! This is the output boundary: the host program prints the `Display` form
//! of the result value and appends its own line break.

use std::fmt;

use super::Value;

fn write_seq(f: &mut fmt::Formatter<'_>, items: &[Value], open: char, close: char) -> fmt::Result {
    write!(f, "{}", open)?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", item)?;
    }
    write!(f, "{}", close)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Error(err) => write!(f, "Error: {}", err),
            Value::Symbol(name) => write!(f, "{}", name),
            Value::Sexpr(items) => write_seq(f, items, '(', ')'),
            Value::Qexpr(items) => write_seq(f, items, '{', '}'),
            Value::Builtin(_) => write!(f, "<builtin>"),
            Value::Lambda(lambda) => {
                write!(f, "(\\ {{")?;
                for (i, name) in lambda.formals.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", name)?;
                }
                write!(f, "}} ")?;
                write_seq(f, &lambda.body, '{', '}')?;
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::EvalError;

    use super::*;

    #[test]
    fn test_display_number() {
        assert_eq!(Value::Number(-42).to_string(), "-42");
    }

    #[test]
    fn test_display_error() {
        let v = Value::Error(EvalError::DivisionByZero);
        assert_eq!(v.to_string(), "Error: division by zero");
    }

    #[test]
    fn test_display_sexpr_and_qexpr() {
        let inner = Value::Qexpr(vec![Value::Number(2), Value::Number(3)]);
        let v = Value::Sexpr(vec![Value::symbol("head"), inner]);
        assert_eq!(v.to_string(), "(head {2 3})");
    }

    #[test]
    fn test_display_empty_forms() {
        assert_eq!(Value::empty_sexpr().to_string(), "()");
        assert_eq!(Value::empty_qexpr().to_string(), "{}");
    }

    #[test]
    fn test_display_lambda() {
        let v = Value::lambda(
            vec!["x".to_string(), "y".to_string()],
            vec![Value::symbol("+"), Value::symbol("x"), Value::symbol("y")],
        );
        assert_eq!(v.to_string(), "(\\ {x y} {+ x y})");
    }
}
