//! Tests for environment binding and lookup

use pretty_assertions::assert_eq;

use larch::{builtins, Environment, EvalError, Value};

#[test]
fn test_new_environment_is_empty() {
    let env = Environment::new();
    assert!(env.is_empty());
    assert_eq!(env.len(), 0);
}

#[test]
fn test_resolve_unbound_symbol() {
    let env = Environment::new();
    assert_eq!(
        env.resolve("missing"),
        Err(EvalError::UnboundSymbol("missing".to_string()))
    );
}

#[test]
fn test_bind_local_and_resolve() {
    let mut env = Environment::new();
    env.bind_local("x", Value::Number(10));
    assert_eq!(env.resolve("x"), Ok(Value::Number(10)));
    assert!(env.contains("x"));
}

#[test]
fn test_last_write_wins() {
    let mut env = Environment::new();
    env.bind_local("x", Value::Number(1));
    env.bind_local("x", Value::Number(2));
    assert_eq!(env.resolve("x"), Ok(Value::Number(2)));
    assert_eq!(env.len(), 1);
}

#[test]
fn test_bind_global_at_root_is_local() {
    // With no parent the environment is its own root.
    let mut env = Environment::new();
    env.bind_global("g", Value::Number(5));
    assert_eq!(env.resolve("g"), Ok(Value::Number(5)));
}

#[test]
fn test_resolve_returns_a_copy() {
    let mut env = Environment::new();
    env.bind_local("xs", Value::qexpr(vec![Value::Number(1)]));

    // Consuming the resolved value leaves the binding untouched.
    let copy = env.resolve("xs").expect("bound");
    drop(copy);
    assert_eq!(env.resolve("xs"), Ok(Value::qexpr(vec![Value::Number(1)])));
}

#[test]
fn test_clone_deep_copies_bindings() {
    let mut env = Environment::new();
    env.bind_local("x", Value::Number(1));

    let mut copy = env.clone();
    copy.bind_local("x", Value::Number(99));
    copy.bind_local("y", Value::Number(2));

    assert_eq!(env.resolve("x"), Ok(Value::Number(1)));
    assert!(!env.contains("y"));
}

#[test]
fn test_prelude_contains_the_builtin_library() {
    let env = Environment::with_prelude();
    assert_eq!(env.len(), builtins::TABLE.len());

    for name in [
        "\\", "def", "=", "list", "head", "tail", "init", "last", "join", "eval", "+", "-", "*",
        "/", "add", "subtract", "multiply", "divide",
    ] {
        let value = env.resolve(name).expect("builtin registered");
        assert!(value.is_callable(), "'{}' is not callable", name);
    }
}

#[test]
fn test_builtin_renders_opaquely() {
    let env = Environment::with_prelude();
    let plus = env.resolve("+").expect("registered");
    assert_eq!(plus.to_string(), "<builtin>");
}
