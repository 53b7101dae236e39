//! Named capability registry
//!
//! Lets configuration-driven callers pick coercers and getters by name.
//! Asking for a name that was never registered is a wiring mistake and is
//! reported as [`ConfigError::UnknownCapability`].

use crate::json;
use serde_json::Value;
use std::collections::HashMap;
use want_core::{Coerce, ConfigError, Lookup};

/// Registry of coercers and getters keyed by name
pub struct CapabilityRegistry<V> {
    coercers: HashMap<String, Box<dyn Coerce<V>>>,
    getters: HashMap<String, Box<dyn Lookup<V>>>,
}

impl<V> CapabilityRegistry<V> {
    /// Create new empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            coercers: HashMap::new(),
            getters: HashMap::new(),
        }
    }

    /// Register a coercer, replacing any previous one with the same name
    pub fn register_coercer(&mut self, name: &str, coercer: impl Coerce<V> + 'static) {
        self.coercers.insert(name.to_string(), Box::new(coercer));
    }

    /// Register a getter, replacing any previous one with the same name
    pub fn register_getter(&mut self, name: &str, getter: impl Lookup<V> + 'static) {
        self.getters.insert(name.to_string(), Box::new(getter));
    }

    /// Coercer by name
    ///
    /// # Errors
    /// [`ConfigError::UnknownCapability`] if nothing is registered as `name`.
    pub fn coercer(&self, name: &str) -> Result<&dyn Coerce<V>, ConfigError> {
        match self.coercers.get(name) {
            Some(coercer) => Ok(coercer.as_ref()),
            None => Err(unknown("coercer", name)),
        }
    }

    /// Getter by name
    ///
    /// # Errors
    /// [`ConfigError::UnknownCapability`] if nothing is registered as `name`.
    pub fn getter(&self, name: &str) -> Result<&dyn Lookup<V>, ConfigError> {
        match self.getters.get(name) {
            Some(getter) => Ok(getter.as_ref()),
            None => Err(unknown("getter", name)),
        }
    }

    /// Check if a coercer exists
    #[inline]
    #[must_use]
    pub fn contains_coercer(&self, name: &str) -> bool {
        self.coercers.contains_key(name)
    }

    /// Check if a getter exists
    #[inline]
    #[must_use]
    pub fn contains_getter(&self, name: &str) -> bool {
        self.getters.contains_key(name)
    }

    /// Registered coercer names, sorted
    #[must_use]
    pub fn coercer_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.coercers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl CapabilityRegistry<Value> {
    /// Registry with the JSON coercers under their usual names
    #[must_use]
    pub fn with_json_defaults() -> Self {
        let mut registry = Self::new();
        registry.register_coercer("integer", json::integer());
        registry.register_coercer("float", json::float());
        registry.register_coercer("boolean", json::boolean());
        registry.register_coercer("string", json::string());
        registry
    }
}

impl<V> Default for CapabilityRegistry<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> std::fmt::Debug for CapabilityRegistry<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut getters: Vec<&String> = self.getters.keys().collect();
        getters.sort_unstable();
        f.debug_struct("CapabilityRegistry")
            .field("coercers", &self.coercer_names())
            .field("getters", &getters)
            .finish()
    }
}

fn unknown(kind: &'static str, name: &str) -> ConfigError {
    ConfigError::UnknownCapability {
        kind,
        name: name.to_string(),
    }
}
