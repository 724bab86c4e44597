//! Definition and lambda-construction builtins

use crate::environment::Environment;
use crate::error::EvalError;
use crate::value::Value;

use super::{expect_len, expect_qexpr, take_list};

/// Unwrap a q-expression of symbols into their names.
fn symbol_names(name: &str, items: Vec<Value>) -> Result<Vec<String>, EvalError> {
    let mut names = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match item {
            Value::Symbol(sym) => names.push(sym),
            other => {
                return Err(EvalError::Type {
                    name: name.to_string(),
                    index,
                    got: other.type_name(),
                    expected: "Symbol",
                })
            }
        }
    }
    Ok(names)
}

/// `\`: construct a closure from a formals list and a body.
pub(super) fn lambda(_env: &mut Environment, mut args: Vec<Value>) -> Result<Value, EvalError> {
    expect_len("\\", &args, 2)?;
    expect_qexpr("\\", &args, 0)?;
    expect_qexpr("\\", &args, 1)?;

    let formals = symbol_names("\\", take_list("\\", &mut args, 0)?)?;
    let body = take_list("\\", &mut args, 0)?;
    Ok(Value::lambda(formals, body))
}

fn define(
    env: &mut Environment,
    mut args: Vec<Value>,
    name: &str,
    global: bool,
) -> Result<Value, EvalError> {
    if args.is_empty() {
        return Err(EvalError::Arity {
            name: name.to_string(),
            got: 0,
            expected: 1,
        });
    }
    expect_qexpr(name, &args, 0)?;

    let symbols = symbol_names(name, take_list(name, &mut args, 0)?)?;
    if symbols.len() != args.len() {
        return Err(EvalError::Arity {
            name: name.to_string(),
            got: args.len(),
            expected: symbols.len(),
        });
    }

    for (symbol, value) in symbols.into_iter().zip(args) {
        if global {
            env.bind_global(symbol, value);
        } else {
            env.bind_local(symbol, value);
        }
    }
    Ok(Value::empty_sexpr())
}

/// `def`: bind each symbol/value pair in the root environment.
pub(super) fn def(env: &mut Environment, args: Vec<Value>) -> Result<Value, EvalError> {
    define(env, args, "def", true)
}

/// `=`: bind each symbol/value pair in the local environment.
pub(super) fn put(env: &mut Environment, args: Vec<Value>) -> Result<Value, EvalError> {
    define(env, args, "=", false)
}
