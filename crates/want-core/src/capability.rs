//! Capability traits consumed by the engine
//!
//! - [`ParamSource`]: the host's request-parameter store
//! - [`Coerce`]: type coercion (one required method)
//! - [`Lookup`]: object retrieval (one required method)
//!
//! Blanket impls cover closures and the std maps, so most call sites never
//! write an adapter by hand.

use crate::error::CoercionError;
use crate::param::Param;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Request-parameter store
pub trait ParamSource<V> {
    /// Whether the key exists at all
    fn has(&self, key: &str) -> bool;

    /// Stored value; `None` when the key is absent *or* present without a value
    fn get(&self, key: &str) -> Option<V>;

    /// Fold `has`/`get` into a [`Param`]
    fn fetch(&self, key: &str) -> Param<V> {
        if !self.has(key) {
            return Param::Missing;
        }
        self.get(key).map_or(Param::NoValue, Param::Present)
    }
}

impl<V, S: ParamSource<V> + ?Sized> ParamSource<V> for &S {
    fn has(&self, key: &str) -> bool {
        (**self).has(key)
    }

    fn get(&self, key: &str) -> Option<V> {
        (**self).get(key)
    }

    fn fetch(&self, key: &str) -> Param<V> {
        (**self).fetch(key)
    }
}

impl<V: Clone, H: BuildHasher> ParamSource<V> for HashMap<String, Option<V>, H> {
    fn has(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn get(&self, key: &str) -> Option<V> {
        HashMap::get(self, key).cloned().flatten()
    }
}

impl<V: Clone> ParamSource<V> for BTreeMap<String, Option<V>> {
    fn has(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn get(&self, key: &str) -> Option<V> {
        BTreeMap::get(self, key).cloned().flatten()
    }
}

/// JSON objects: an explicit `null` is a present key without a value
impl ParamSource<serde_json::Value> for serde_json::Map<String, serde_json::Value> {
    fn has(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn get(&self, key: &str) -> Option<serde_json::Value> {
        match serde_json::Map::get(self, key) {
            None | Some(serde_json::Value::Null) => None,
            Some(v) => Some(v.clone()),
        }
    }
}

/// Type coercion capability
pub trait Coerce<V> {
    /// Coerce a present value
    ///
    /// # Errors
    /// [`CoercionError::Coercion`] or [`CoercionError::Constraint`] when the
    /// value is rejected; [`CoercionError::Other`] for anything else.
    fn coerce(&self, value: &V) -> Result<V, CoercionError>;

    /// Coerce any working value. The default maps `Present` through
    /// [`Coerce::coerce`] and passes `Missing`/`NoValue` unchanged; override
    /// to give absence a typed meaning.
    ///
    /// # Errors
    /// Same as [`Coerce::coerce`].
    fn coerce_param(&self, value: &Param<V>) -> Result<Param<V>, CoercionError> {
        match value {
            Param::Present(v) => self.coerce(v).map(Param::Present),
            Param::Missing => Ok(Param::Missing),
            Param::NoValue => Ok(Param::NoValue),
        }
    }

    /// Domain value standing in for "present but empty", if any
    fn undefined(&self) -> Option<V> {
        None
    }
}

impl<V, F> Coerce<V> for F
where
    F: Fn(&V) -> Result<V, CoercionError>,
{
    fn coerce(&self, value: &V) -> Result<V, CoercionError> {
        self(value)
    }
}

/// Object lookup capability
pub trait Lookup<V> {
    /// Resolve a coerced value; `None` when nothing matches
    fn get(&self, key: &V) -> Option<V>;

    /// Resolve any non-missing working value. The default maps `Present`
    /// through [`Lookup::get`], treats `NoValue` as a miss and passes
    /// `Missing` unchanged; override to resolve a bare flag.
    fn get_param(&self, key: &Param<V>) -> Option<Param<V>> {
        match key {
            Param::Present(v) => self.get(v).map(Param::Present),
            Param::NoValue => None,
            Param::Missing => Some(Param::Missing),
        }
    }
}

impl<V, F> Lookup<V> for F
where
    F: Fn(&V) -> Option<V>,
{
    fn get(&self, key: &V) -> Option<V> {
        self(key)
    }
}

impl<V: Eq + Hash + Clone, H: BuildHasher> Lookup<V> for HashMap<V, V, H> {
    fn get(&self, key: &V) -> Option<V> {
        HashMap::get(self, key).cloned()
    }
}

impl<V: Ord + Clone> Lookup<V> for BTreeMap<V, V> {
    fn get(&self, key: &V) -> Option<V> {
        BTreeMap::get(self, key).cloned()
    }
}
