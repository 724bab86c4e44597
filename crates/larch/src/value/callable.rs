//! Callable value types: builtins and closures

use crate::environment::Environment;
use crate::error::EvalError;

use super::Value;

/// Signature of a native builtin operation.
///
/// A builtin receives the active environment and the already-evaluated
/// argument values. The argument vector is consumed on every path, success
/// or error; an `Err` is turned into a [`Value::Error`] by the applier.
pub type BuiltinFnPtr = fn(&mut Environment, Vec<Value>) -> Result<Value, EvalError>;

/// A built-in native function.
///
/// The function pointer is a stateless identifier, so builtins copy by
/// value; the name is kept for display and error messages.
#[derive(Clone)]
pub struct BuiltinFn {
    /// Name the builtin is registered under
    pub name: String,

    /// The native operation
    pub func: BuiltinFnPtr,
}

impl BuiltinFn {
    /// Create a builtin function value.
    pub fn new(name: impl Into<String>, func: BuiltinFnPtr) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl PartialEq for BuiltinFn {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl std::fmt::Debug for BuiltinFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BuiltinFn({})", self.name)
    }
}

/// A user-defined closure.
///
/// Pairs the unbound formal names with a quoted body and the environment
/// the closure owns outright. Applying the closure removes formals from the
/// front as arguments bind; a closure with formals left over is a partial
/// application waiting for the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct LambdaValue {
    /// Formal parameter names still waiting for arguments
    pub formals: Vec<String>,

    /// Elements of the quoted body; retagged evaluable when the closure runs
    pub body: Vec<Value>,

    /// The closure's own environment; arguments bind here
    pub env: Environment,
}

impl LambdaValue {
    /// Create a closure with a fresh empty environment.
    pub fn new(formals: Vec<String>, body: Vec<Value>) -> Self {
        Self {
            formals,
            body,
            env: Environment::new(),
        }
    }
}
