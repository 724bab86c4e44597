//! The builtin library
//!
//! Each builtin validates the shape of its arguments, then consumes them to
//! produce a value or an error. The dispatch table at the top is built once
//! and loaded into the root environment by the prelude; application then
//! reaches a builtin through an ordinary environment lookup.

mod list;
mod math;
mod vars;

use crate::error::EvalError;
use crate::value::{BuiltinFnPtr, Value};

/// name -> native operation, loaded by [`Environment::load_prelude`].
///
/// [`Environment::load_prelude`]: crate::Environment::load_prelude
pub static TABLE: &[(&str, BuiltinFnPtr)] = &[
    // Definition and lambda construction
    ("\\", vars::lambda),
    ("def", vars::def),
    ("=", vars::put),
    // List manipulation
    ("list", list::list),
    ("head", list::head),
    ("tail", list::tail),
    ("init", list::init),
    ("last", list::last),
    ("join", list::join),
    ("eval", list::eval),
    // Arithmetic, operator and word spellings
    ("+", math::add),
    ("-", math::sub),
    ("*", math::mul),
    ("/", math::div),
    ("add", math::add),
    ("subtract", math::sub),
    ("multiply", math::mul),
    ("divide", math::div),
];

// ═══════════════════════════════════════════════════════════════════════
// Shared Argument Validation
// ═══════════════════════════════════════════════════════════════════════

/// Exactly `expected` arguments, or an arity error.
fn expect_len(name: &str, args: &[Value], expected: usize) -> Result<(), EvalError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(EvalError::Arity {
            name: name.to_string(),
            got: args.len(),
            expected,
        })
    }
}

/// The argument at `index` must be a q-expression.
fn expect_qexpr(name: &str, args: &[Value], index: usize) -> Result<(), EvalError> {
    match &args[index] {
        Value::Qexpr(_) => Ok(()),
        other => Err(EvalError::Type {
            name: name.to_string(),
            index,
            got: other.type_name(),
            expected: "Q-Expression",
        }),
    }
}

/// Detach the argument at `index` and unwrap it as q-expression elements.
fn take_list(name: &str, args: &mut Vec<Value>, index: usize) -> Result<Vec<Value>, EvalError> {
    match args.remove(index) {
        Value::Qexpr(items) => Ok(items),
        other => Err(EvalError::Type {
            name: name.to_string(),
            index,
            got: other.type_name(),
            expected: "Q-Expression",
        }),
    }
}
