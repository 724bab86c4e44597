//! Typed input boundary for the external parser
//!
//! The grammar component owns tokenization and parsing; it hands over a
//! [`SyntaxNode`] tree mirroring its grammar rules. [`read`] converts that
//! tree into the [`Value`] model 1:1, recursively and in order. Structural
//! tokens (parentheses, braces) never reach the typed tree, and the root
//! rule becomes an ordinary evaluable expression.

use crate::error::EvalError;
use crate::value::Value;

/// A node of the parse tree handed over by the external grammar.
#[derive(Debug, Clone, PartialEq)]
pub enum SyntaxNode {
    /// Raw number literal text, parsed to an integer during read-in
    Number(String),

    /// A symbol name
    Symbol(String),

    /// Parenthesized, evaluable expression
    Sexpr(Vec<SyntaxNode>),

    /// Braced, quoted expression
    Qexpr(Vec<SyntaxNode>),

    /// Top-level rule wrapping one unit of input
    Root(Vec<SyntaxNode>),
}

/// Convert a parse tree into the value model.
///
/// Number text that does not fit an `i64` becomes an
/// [`InvalidNumberLiteral`](EvalError::InvalidNumberLiteral) error value,
/// which then propagates through evaluation like any other error.
pub fn read(node: SyntaxNode) -> Value {
    match node {
        SyntaxNode::Number(text) => read_number(&text),
        SyntaxNode::Symbol(name) => Value::Symbol(name),
        SyntaxNode::Sexpr(children) | SyntaxNode::Root(children) => {
            Value::Sexpr(children.into_iter().map(read).collect())
        }
        SyntaxNode::Qexpr(children) => Value::Qexpr(children.into_iter().map(read).collect()),
    }
}

fn read_number(text: &str) -> Value {
    match text.parse::<i64>() {
        Ok(n) => Value::Number(n),
        Err(_) => Value::Error(EvalError::InvalidNumberLiteral(text.to_string())),
    }
}
