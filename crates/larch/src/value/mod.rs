//! Value representation for the interpreted language
//!
//! Every datum the evaluator touches is a [`Value`]. Expressions come in two
//! flavors: s-expressions reduce by function application, q-expressions are
//! inert data until something retags them (`eval`, or a closure body being
//! run).

mod callable;
mod display;
mod impls;

pub use callable::{BuiltinFn, BuiltinFnPtr, LambdaValue};

use crate::error::EvalError;

/// Runtime value for the interpreter.
///
/// A closed sum type: each case carries only its payload, and child values
/// are exclusively owned, so `Clone` is always a deep copy and sibling
/// elements never alias.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// 64-bit signed integer
    Number(i64),

    /// An evaluation failure, carried as data
    Error(EvalError),

    /// A name, resolved against the environment chain when evaluated
    Symbol(String),

    /// Evaluable expression: reduced by function application
    Sexpr(Vec<Value>),

    /// Quoted expression: literal data, never auto-reduced
    Qexpr(Vec<Value>),

    /// Built-in native function
    Builtin(BuiltinFn),

    /// User-defined closure with its own environment
    Lambda(Box<LambdaValue>),
}
