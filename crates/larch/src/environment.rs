//! Runtime environment managing symbol bindings
//!
//! Environments form a parent chain: lookup walks from the local table
//! toward the root, local definition writes to the nearest table, global
//! definition writes to the root. A closure owns its environment outright;
//! for the duration of a call the calling environment is parked as the
//! parent link so the body can see the scopes it was invoked from.

mod prelude;

use indexmap::IndexMap;

use crate::error::EvalError;
use crate::value::Value;

/// A chained symbol table.
///
/// The parent link is owned but transient: it is attached exactly once, at
/// the moment a closure is invoked, and taken back out when the call
/// completes. Any environment stored inside a [`Value`] has no parent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    /// Enclosing scope, present only while a call is in flight
    parent: Option<Box<Environment>>,

    /// name -> value; unique keys, last write wins
    bindings: IndexMap<String, Value>,
}

impl Environment {
    /// Create a new empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Lookup
    // ═══════════════════════════════════════════════════════════════════

    /// Look up `name`, searching this environment and then its ancestors.
    ///
    /// Returns a copy of the bound value; the nearest binding wins.
    pub fn resolve(&self, name: &str) -> Result<Value, EvalError> {
        match self.bindings.get(name) {
            Some(value) => Ok(value.clone()),
            None => match &self.parent {
                Some(parent) => parent.resolve(name),
                None => Err(EvalError::UnboundSymbol(name.to_string())),
            },
        }
    }

    /// Check whether `name` is bound anywhere in the chain.
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
            || self
                .parent
                .as_ref()
                .is_some_and(|parent| parent.contains(name))
    }

    /// Number of bindings in this environment alone.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if this environment has no local bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Definition
    // ═══════════════════════════════════════════════════════════════════

    /// Bind `name` in this environment, overwriting any previous binding.
    pub fn bind_local(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    /// Bind `name` in the root environment of the chain.
    pub fn bind_global(&mut self, name: impl Into<String>, value: Value) {
        match self.parent.as_deref_mut() {
            Some(parent) => parent.bind_global(name, value),
            None => self.bind_local(name, value),
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Call-Time Parent Parking
    // ═══════════════════════════════════════════════════════════════════

    /// Park `caller` as this environment's parent for the duration of a call.
    pub(crate) fn attach_parent(&mut self, caller: Environment) {
        debug_assert!(self.parent.is_none());
        self.parent = Some(Box::new(caller));
    }

    /// Take the parked caller back out once the call completes.
    pub(crate) fn detach_parent(&mut self) -> Option<Environment> {
        self.parent.take().map(|parent| *parent)
    }
}
