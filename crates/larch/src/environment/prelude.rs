//! Standard prelude: the builtin registration boundary
//!
//! The host program loads the prelude into the root environment once,
//! before any evaluation.

use tracing::debug;

use crate::builtins;
use crate::value::Value;

use super::Environment;

impl Environment {
    /// Create a root environment with the builtin library loaded.
    pub fn with_prelude() -> Self {
        let mut env = Self::new();
        env.load_prelude();
        env
    }

    /// Load the builtin dispatch table into this environment.
    pub fn load_prelude(&mut self) {
        for (name, func) in builtins::TABLE {
            self.bind_local(*name, Value::builtin(*name, *func));
        }
        debug!(count = builtins::TABLE.len(), "loaded builtin prelude");
    }
}
