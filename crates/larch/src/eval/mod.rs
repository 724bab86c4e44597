//! Expression evaluation
//!
//! The evaluator reduces s-expressions; every other value is already in
//! normal form. Failures are values: a child that reduces to an error
//! short-circuits the enclosing s-expression, first error (by position)
//! winning. There is no separate exception channel.

mod apply;

use tracing::trace;

use crate::environment::Environment;
use crate::error::EvalError;
use crate::value::Value;

/// Reduce `value` in `env`.
///
/// Numbers, errors, functions, and q-expressions are returned as-is;
/// symbols resolve against the environment chain; s-expressions reduce by
/// function application.
pub fn eval(env: &mut Environment, value: Value) -> Value {
    match value {
        Value::Symbol(name) => match env.resolve(&name) {
            Ok(bound) => bound,
            Err(err) => Value::Error(err),
        },
        Value::Sexpr(items) => eval_sexpr(env, items),
        other => other,
    }
}

/// Reduce an s-expression: children first, then apply.
fn eval_sexpr(env: &mut Environment, items: Vec<Value>) -> Value {
    trace!(elements = items.len(), "reducing s-expression");

    // Every child evaluates, left to right, before anything else happens.
    let mut items: Vec<Value> = items.into_iter().map(|item| eval(env, item)).collect();

    // First error wins, ties broken by position.
    if let Some(index) = items.iter().position(Value::is_error) {
        return items.swap_remove(index);
    }

    // Empty application is identity on the empty form.
    if items.is_empty() {
        return Value::Sexpr(items);
    }

    // A sole element may itself still be reducible.
    if items.len() == 1 {
        return eval(env, items.remove(0));
    }

    let func = items.remove(0);
    if !func.is_callable() {
        return Value::Error(EvalError::NotCallable {
            got: func.type_name(),
        });
    }
    apply::call_value(env, func, items)
}
