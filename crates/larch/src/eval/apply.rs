//! Function application, including partial application

use std::mem;

use tracing::trace;

use crate::environment::Environment;
use crate::error::EvalError;
use crate::value::{LambdaValue, Value};

use super::eval;

/// The reserved formal that collects all remaining call arguments.
const VARIADIC_MARKER: &str = "&";

/// Apply a callable to already-evaluated arguments.
pub(super) fn call_value(env: &mut Environment, func: Value, args: Vec<Value>) -> Value {
    match func {
        Value::Builtin(builtin) => match (builtin.func)(env, args) {
            Ok(value) => value,
            Err(err) => Value::Error(err),
        },
        Value::Lambda(lambda) => call_lambda(env, lambda, args),
        other => Value::Error(EvalError::NotCallable {
            got: other.type_name(),
        }),
    }
}

/// Bind arguments to formals, then run the body or return a partial closure.
///
/// The binding order is load-bearing: the arity check precedes each formal
/// pop, and the variadic marker consumes the whole remaining argument list
/// the moment it is reached.
fn call_lambda(env: &mut Environment, mut lambda: Box<LambdaValue>, mut args: Vec<Value>) -> Value {
    let given = args.len();
    let total = lambda.formals.len();

    while !args.is_empty() {
        if lambda.formals.is_empty() {
            return Value::Error(EvalError::TooManyArguments {
                got: given,
                expected: total,
            });
        }
        let formal = lambda.formals.remove(0);

        if formal == VARIADIC_MARKER {
            if lambda.formals.len() != 1 {
                return Value::Error(EvalError::MalformedVariadicFormals);
            }
            let rest = lambda.formals.remove(0);
            lambda
                .env
                .bind_local(rest, Value::Qexpr(mem::take(&mut args)));
            break;
        }

        lambda.env.bind_local(formal, args.remove(0));
    }

    // A marker no argument reached binds its companion to the empty list.
    if matches!(lambda.formals.first(), Some(formal) if formal == VARIADIC_MARKER) {
        if lambda.formals.len() != 2 {
            return Value::Error(EvalError::MalformedVariadicFormals);
        }
        lambda.formals.remove(0);
        let rest = lambda.formals.remove(0);
        lambda.env.bind_local(rest, Value::empty_qexpr());
    }

    if !lambda.formals.is_empty() {
        trace!(remaining = lambda.formals.len(), "partial application");
        return Value::Lambda(lambda);
    }

    // Park the caller as the parent scope for the duration of the body, so
    // the closure sees the environment it was called from, then hand it
    // back once the body has reduced.
    let caller = mem::take(env);
    lambda.env.attach_parent(caller);
    let result = eval(&mut lambda.env, Value::Sexpr(lambda.body.clone()));
    if let Some(caller) = lambda.env.detach_parent() {
        *env = caller;
    }
    result
}
