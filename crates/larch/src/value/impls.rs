//! Value constructors, predicates, and extractors

use crate::error::EvalError;

use super::{BuiltinFn, BuiltinFnPtr, LambdaValue, Value};

// ═══════════════════════════════════════════════════════════════════════
// Convenience Constructors
// ═══════════════════════════════════════════════════════════════════════

impl Value {
    /// Create a number value.
    pub fn number(n: i64) -> Self {
        Value::Number(n)
    }

    /// Create a symbol value.
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    /// Create an error value.
    pub fn error(err: EvalError) -> Self {
        Value::Error(err)
    }

    /// Create an s-expression from its elements.
    pub fn sexpr(elements: Vec<Value>) -> Self {
        Value::Sexpr(elements)
    }

    /// Create a q-expression from its elements.
    pub fn qexpr(elements: Vec<Value>) -> Self {
        Value::Qexpr(elements)
    }

    /// The empty s-expression `()`.
    pub fn empty_sexpr() -> Self {
        Value::Sexpr(Vec::new())
    }

    /// The empty q-expression `{}`.
    pub fn empty_qexpr() -> Self {
        Value::Qexpr(Vec::new())
    }

    /// Create a builtin function value.
    pub fn builtin(name: impl Into<String>, func: BuiltinFnPtr) -> Self {
        Value::Builtin(BuiltinFn::new(name, func))
    }

    /// Create a closure with a fresh empty environment.
    pub fn lambda(formals: Vec<String>, body: Vec<Value>) -> Self {
        Value::Lambda(Box::new(LambdaValue::new(formals, body)))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Predicates
    // ═══════════════════════════════════════════════════════════════════

    /// Check if the value is an error.
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Check if the value can sit in operator position.
    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Builtin(_) | Value::Lambda(_))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Extractors
    // ═══════════════════════════════════════════════════════════════════

    /// Extract the number payload.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extract the symbol name.
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Value::Symbol(name) => Some(name),
            _ => None,
        }
    }

    /// The vocabulary error messages use for value kinds.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "Number",
            Value::Error(_) => "Error",
            Value::Symbol(_) => "Symbol",
            Value::Sexpr(_) => "S-Expression",
            Value::Qexpr(_) => "Q-Expression",
            Value::Builtin(_) | Value::Lambda(_) => "Function",
        }
    }
}
