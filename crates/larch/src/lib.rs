//! # Larch
//!
//! A tree-walking evaluator for a small Lisp.
//!
//! Larch is the evaluation core only: an external grammar/parser component
//! produces a tagged syntax tree, the [`frontend`] converts it into the
//! [`Value`] model, and [`eval()`] reduces it against an [`Environment`]
//! pre-populated with the builtin library. The resulting [`Value`] renders
//! through `Display` for whatever front end hosts the interpreter.
//!
//! ## Architecture
//!
//! - **Language Frontend**: parse source text into a [`SyntaxNode`] tree
//! - **Larch Core**: convert with [`read()`], reduce with [`eval()`]
//! - **Host Program**: owns the root [`Environment`] and prints results
//!
//! ```
//! use larch::{eval, Environment, Value};
//!
//! let mut env = Environment::with_prelude();
//! let expr = Value::sexpr(vec![
//!     Value::symbol("+"),
//!     Value::number(1),
//!     Value::number(2),
//! ]);
//! assert_eq!(eval(&mut env, expr), Value::Number(3));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builtins;
pub mod environment;
pub mod error;
pub mod eval;
pub mod frontend;
pub mod value;

// Re-export main types
pub use environment::Environment;
pub use error::EvalError;
pub use eval::eval;
pub use frontend::{read, SyntaxNode};
pub use value::{BuiltinFn, BuiltinFnPtr, LambdaValue, Value};

/// Larch version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }
}
