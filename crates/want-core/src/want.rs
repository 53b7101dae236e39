//! Façade entry points
//!
//! [`want`], [`want_strict`] and [`want_probe`] build a [`Want`] from the
//! matching [`Policy`] preset. Everything else (policy overrides, defaults,
//! capabilities, transform) is set per call on the builder.

use crate::capability::{Coerce, Lookup, ParamSource};
use crate::engine::{self, Outcome, Request};
use crate::error::WantResult;
use crate::param::{Param, ParamRef};
use crate::policy::{MissingPolicy, NotFoundPolicy, Policy};

/// Tolerant resolution: absence and failed lookup never fail
#[must_use]
pub fn want<'a, V>(reference: impl Into<ParamRef<V>>) -> Want<'a, V> {
    Want::with_policy(reference, Policy::TOLERANT)
}

/// Strict resolution: absence and failed lookup fail
#[must_use]
pub fn want_strict<'a, V>(reference: impl Into<ParamRef<V>>) -> Want<'a, V> {
    Want::with_policy(reference, Policy::STRICT)
}

/// Probing resolution: absence returns the default as-is
#[must_use]
pub fn want_probe<'a, V>(reference: impl Into<ParamRef<V>>) -> Want<'a, V> {
    Want::with_policy(reference, Policy::PROBING)
}

/// Builder for one parameter resolution
///
/// Borrows its capabilities for `'a`.
#[derive(Debug)]
pub struct Want<'a, V> {
    request: Request<'a, V>,
}

impl<'a, V> Want<'a, V> {
    /// Start from an explicit policy
    #[inline]
    #[must_use]
    pub fn with_policy(reference: impl Into<ParamRef<V>>, policy: Policy) -> Self {
        Self {
            request: Request::new(reference.into(), policy),
        }
    }

    /// Identifier reported in failures
    #[inline]
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.request.id = Some(id.into());
        self
    }

    /// Default used when the parameter is missing
    #[inline]
    #[must_use]
    pub fn default(self, value: impl Into<V>) -> Self {
        self.default_param(Param::Present(value.into()))
    }

    /// Default as a raw [`Param`]
    #[inline]
    #[must_use]
    pub fn default_param(mut self, value: Param<V>) -> Self {
        self.request.default = value;
        self
    }

    /// Replacement for a present key without a value
    #[inline]
    #[must_use]
    pub fn no_value(self, value: impl Into<V>) -> Self {
        self.no_value_param(Param::Present(value.into()))
    }

    /// No-value replacement as a raw [`Param`]
    #[inline]
    #[must_use]
    pub fn no_value_param(mut self, value: Param<V>) -> Self {
        self.request.no_value = value;
        self
    }

    /// Attach a coercion capability
    #[inline]
    #[must_use]
    pub fn coerce(mut self, coercer: &'a dyn Coerce<V>) -> Self {
        self.request.coercer = Some(coercer);
        self
    }

    /// Attach a lookup capability
    #[inline]
    #[must_use]
    pub fn lookup(mut self, getter: &'a dyn Lookup<V>) -> Self {
        self.request.getter = Some(getter);
        self
    }

    /// Post-process the final working value
    #[must_use]
    pub fn transform<F>(mut self, f: F) -> Self
    where
        F: FnOnce(Param<V>) -> Param<V> + 'a,
    {
        self.request.transform = Some(Box::new(f));
        self
    }

    /// Post-process the final value when present
    #[must_use]
    pub fn map<F>(self, f: F) -> Self
    where
        F: FnOnce(V) -> V + 'a,
        V: 'a,
    {
        self.transform(move |param| param.map(f))
    }

    /// Override missing handling
    #[inline]
    #[must_use]
    pub fn missing(mut self, missing: MissingPolicy) -> Self {
        self.request.policy.missing = missing;
        self
    }

    /// Override not-found handling
    #[inline]
    #[must_use]
    pub fn not_found(mut self, not_found: NotFoundPolicy) -> Self {
        self.request.policy.not_found = not_found;
        self
    }

    /// Replace the whole policy
    #[inline]
    #[must_use]
    pub fn policy(mut self, policy: Policy) -> Self {
        self.request.policy = policy;
        self
    }

    /// Policy this request will run with
    #[inline]
    #[must_use]
    pub fn current_policy(&self) -> Policy {
        self.request.policy
    }

    /// Underlying engine request
    #[inline]
    #[must_use]
    pub fn into_request(self) -> Request<'a, V> {
        self.request
    }

    /// Run the pipeline against `source`
    ///
    /// # Errors
    /// See [`engine::resolve`].
    pub fn resolve<S>(self, source: &S) -> WantResult<Outcome<V>, V>
    where
        V: std::fmt::Debug,
        S: ParamSource<V> + ?Sized,
    {
        engine::resolve(source, self.request)
    }
}
