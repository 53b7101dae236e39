//! Resolution engine
//!
//! Runs one [`Request`] through the fixed stages:
//!
//! 1. fetch (key lookup in the source, or the literal)
//! 2. missing check
//! 3. no-value substitution
//! 4. coercion
//! 5. object lookup
//! 6. transform
//!
//! A failure or a terminal outcome stops the pipeline; later stages never run.

use crate::capability::{Coerce, Lookup, ParamSource};
use crate::error::ParamError;
use crate::param::{Param, ParamRef};
use crate::policy::{MissingPolicy, NotFoundPolicy, Policy};
use serde::{Deserialize, Serialize};

/// Post-processing applied to the resolved value
pub type Transform<'a, V> = Box<dyn FnOnce(Param<V>) -> Param<V> + 'a>;

/// Host-framework action requested instead of a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Terminal {
    /// Render the host's not-found response
    NotFound,

    /// Hand the request to the next matching handler
    Pass,
}

impl Terminal {
    /// HTTP status the host would normally answer with
    #[inline]
    #[must_use]
    pub fn status_hint(self) -> Option<u16> {
        match self {
            Self::NotFound => Some(404),
            Self::Pass => None,
        }
    }
}

/// Result of a successful resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<V> {
    /// Final value
    Resolved(Param<V>),

    /// Host framework must take over
    Terminal(Terminal),
}

impl<V> Outcome<V> {
    /// Resolved value, `None` for terminal outcomes
    #[inline]
    #[must_use]
    pub fn into_resolved(self) -> Option<Param<V>> {
        match self {
            Self::Resolved(p) => Some(p),
            Self::Terminal(_) => None,
        }
    }

    /// Present value, `None` for markers and terminal outcomes
    #[inline]
    #[must_use]
    pub fn into_value(self) -> Option<V> {
        self.into_resolved().and_then(Param::into_option)
    }

    /// Terminal action, if any
    #[inline]
    #[must_use]
    pub fn terminal(&self) -> Option<Terminal> {
        match self {
            Self::Terminal(t) => Some(*t),
            Self::Resolved(_) => None,
        }
    }

    /// Check for a terminal outcome
    #[inline]
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminal(_))
    }
}

/// Everything one resolution needs
pub struct Request<'a, V> {
    /// Key or literal to resolve
    pub reference: ParamRef<V>,

    /// Identifier for failures; overrides the key when set
    pub id: Option<String>,

    /// Used by the missing check (`Return` and `Ignore`)
    pub default: Param<V>,

    /// Substituted for `NoValue` in stage 3
    pub no_value: Param<V>,

    /// Stage 4 capability
    pub coercer: Option<&'a dyn Coerce<V>>,

    /// Stage 5 capability
    pub getter: Option<&'a dyn Lookup<V>>,

    /// Missing and not-found handling
    pub policy: Policy,

    /// Stage 6 post-processing
    pub transform: Option<Transform<'a, V>>,
}

impl<V> Request<'_, V> {
    /// Request with no capabilities under `policy`
    #[must_use]
    pub fn new(reference: ParamRef<V>, policy: Policy) -> Self {
        Self {
            reference,
            id: None,
            default: Param::Missing,
            no_value: Param::NoValue,
            coercer: None,
            getter: None,
            policy,
            transform: None,
        }
    }
}

impl<V: std::fmt::Debug> std::fmt::Debug for Request<'_, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Request")
            .field("reference", &self.reference)
            .field("id", &self.id)
            .field("default", &self.default)
            .field("no_value", &self.no_value)
            .field("coercer", &self.coercer.is_some())
            .field("getter", &self.getter.is_some())
            .field("policy", &self.policy)
            .field("transform", &self.transform.is_some())
            .finish()
    }
}

/// Resolve one parameter against `source`
///
/// # Errors
/// - [`ParamError::Missing`] when absent under [`MissingPolicy::Raise`]
/// - [`ParamError::NotFound`] when lookup fails under [`NotFoundPolicy::Raise`]
/// - [`ParamError::Syntax`] when the coercer rejects the value
/// - [`ParamError::Coercer`] when the coercer fails otherwise
pub fn resolve<V, S>(source: &S, request: Request<'_, V>) -> Result<Outcome<V>, ParamError<V>>
where
    V: std::fmt::Debug,
    S: ParamSource<V> + ?Sized,
{
    let Request {
        reference,
        id,
        default,
        no_value,
        coercer,
        getter,
        policy,
        transform,
    } = request;

    // Stage 1: fetch
    let (mut value, id) = match reference {
        ParamRef::Key(key) => {
            let fetched = source.fetch(&key);
            (fetched, id.or(Some(key)))
        }
        ParamRef::Literal(param) => (param, id),
    };

    let span = tracing::debug_span!("want", id = id.as_deref().unwrap_or("<literal>"));
    let _guard = span.enter();
    tracing::trace!(%value, "fetched");

    // Stage 2: missing check
    if value.is_missing() {
        match policy.missing {
            MissingPolicy::Raise => {
                tracing::debug!("missing, raising");
                return Err(ParamError::missing(id));
            }
            MissingPolicy::Return => {
                tracing::trace!(%default, "missing, returning default");
                return Ok(Outcome::Resolved(default));
            }
            MissingPolicy::Ignore => {
                tracing::trace!(%default, "missing, continuing with default");
                value = default;
            }
        }
    }

    // Stage 3: no-value substitution
    if value.is_no_value() {
        value = no_value;
        if value.is_no_value() {
            if let Some(undefined) = coercer.and_then(|c| c.undefined()) {
                value = Param::Present(undefined);
            }
        }
        tracing::trace!(%value, "no value substituted");
    }

    // Stage 4: coercion
    if let Some(coercer) = coercer {
        value = match coercer.coerce_param(&value) {
            Ok(coerced) => coerced,
            Err(error) => {
                tracing::debug!(%value, %error, "coercion rejected value");
                return Err(ParamError::from_coercion(error, value, id));
            }
        };
        tracing::trace!(%value, "coerced");
    }

    // Stage 5: lookup
    if let Some(getter) = getter {
        if !value.is_missing() {
            value = match getter.get_param(&value) {
                Some(found) => found,
                None => match policy.not_found {
                    NotFoundPolicy::Raise => {
                        tracing::debug!(%value, "not found, raising");
                        return Err(ParamError::not_found(id, value));
                    }
                    NotFoundPolicy::Ignore => Param::Missing,
                    NotFoundPolicy::RenderNotFound => {
                        tracing::debug!(%value, "not found, rendering not-found");
                        return Ok(Outcome::Terminal(Terminal::NotFound));
                    }
                    NotFoundPolicy::Pass => {
                        tracing::debug!(%value, "not found, passing");
                        return Ok(Outcome::Terminal(Terminal::Pass));
                    }
                },
            };
            tracing::trace!(%value, "looked up");
        }
    }

    // Stage 6: transform
    if let Some(transform) = transform {
        value = transform(value);
    }

    Ok(Outcome::Resolved(value))
}
