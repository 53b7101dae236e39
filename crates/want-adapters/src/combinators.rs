//! Coercer combinators
//!
//! - [`WithUndefined`]: gives any coercer a "present but empty" sentinel
//! - [`Then`]: runs two coercers in sequence (parse, then constrain)

use want_core::{Coerce, CoercionError, Param};

/// Coercer with an undefined sentinel for present-but-empty parameters
#[derive(Debug, Clone)]
pub struct WithUndefined<C, V> {
    inner: C,
    undefined: V,
}

impl<C, V: Clone> Coerce<V> for WithUndefined<C, V>
where
    C: Coerce<V>,
{
    fn coerce(&self, value: &V) -> Result<V, CoercionError> {
        self.inner.coerce(value)
    }

    fn coerce_param(&self, value: &Param<V>) -> Result<Param<V>, CoercionError> {
        self.inner.coerce_param(value)
    }

    fn undefined(&self) -> Option<V> {
        Some(self.undefined.clone())
    }
}

/// Two coercers applied in order
#[derive(Debug, Clone)]
pub struct Then<A, B> {
    first: A,
    second: B,
}

impl<V, A, B> Coerce<V> for Then<A, B>
where
    A: Coerce<V>,
    B: Coerce<V>,
{
    fn coerce(&self, value: &V) -> Result<V, CoercionError> {
        let intermediate = self.first.coerce(value)?;
        self.second.coerce(&intermediate)
    }

    fn coerce_param(&self, value: &Param<V>) -> Result<Param<V>, CoercionError> {
        let intermediate = self.first.coerce_param(value)?;
        self.second.coerce_param(&intermediate)
    }

    fn undefined(&self) -> Option<V> {
        self.first.undefined()
    }
}

/// Builder methods for every coercer
pub trait CoerceExt<V>: Coerce<V> + Sized {
    /// Attach an undefined sentinel
    #[must_use]
    fn or_undefined(self, undefined: impl Into<V>) -> WithUndefined<Self, V> {
        WithUndefined {
            inner: self,
            undefined: undefined.into(),
        }
    }

    /// Feed this coercer's output into `next`
    #[must_use]
    fn then<B: Coerce<V>>(self, next: B) -> Then<Self, B> {
        Then {
            first: self,
            second: next,
        }
    }
}

impl<V, C: Coerce<V>> CoerceExt<V> for C {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::{integer, one_of, Text};
    use serde_json::{json, Value};

    #[test]
    fn or_undefined_exposes_sentinel() {
        let c = Text.or_undefined("");
        assert_eq!(Coerce::<Value>::undefined(&c), Some(json!("")));
        assert_eq!(c.coerce(&json!(5)).unwrap(), json!("5"));
    }

    #[test]
    fn then_parses_and_constrains() {
        let port = integer().then(one_of([80, 443]));
        assert_eq!(port.coerce(&json!("443")).unwrap(), json!(443));
        assert!(matches!(
            port.coerce(&json!("8080")),
            Err(CoercionError::Constraint(_))
        ));
        assert!(matches!(
            port.coerce(&json!("http")),
            Err(CoercionError::Coercion(_))
        ));
    }
}
