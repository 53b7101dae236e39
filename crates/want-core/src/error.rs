//! Error types for parameter resolution
//!
//! Provides the failure taxonomy returned by the engine:
//! - Missing: a required parameter is absent
//! - NotFound: lookup yielded nothing for the coerced value
//! - Syntax: coercion rejected the value
//!
//! plus [`CoercionError`] (what capabilities return) and [`ConfigError`]
//! (programmer errors, never part of the taxonomy).

use std::fmt;

/// Parameter identifier rendered in messages
struct Ident<'a>(&'a Option<String>);

impl fmt::Display for Ident<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(id) => write!(f, " '{id}'"),
            None => Ok(()),
        }
    }
}

/// Resolution failure
#[derive(Debug, thiserror::Error)]
pub enum ParamError<V> {
    /// Required parameter absent
    #[error("missing parameter{}", Ident(.id))]
    Missing {
        /// Parameter identifier
        id: Option<String>,
    },

    /// Lookup returned nothing
    #[error("parameter{} not found: {value}", Ident(.id))]
    NotFound {
        /// Parameter identifier
        id: Option<String>,
        /// Post-coercion value that failed lookup
        value: crate::Param<V>,
    },

    /// Coercion rejected the value
    #[error("invalid parameter{}: {value}: {reason}", Ident(.id))]
    Syntax {
        /// Parameter identifier
        id: Option<String>,
        /// Value handed to the coercer
        value: crate::Param<V>,
        /// Coercer's explanation
        reason: String,
    },

    /// Coercer failed for a reason other than a rejected value
    #[error("coercer failed for parameter{}: {source}", Ident(.id))]
    Coercer {
        /// Parameter identifier
        id: Option<String>,
        /// Underlying failure
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

/// Failure kind without payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// See [`ParamError::Missing`]
    Missing,
    /// See [`ParamError::NotFound`]
    NotFound,
    /// See [`ParamError::Syntax`]
    Syntax,
    /// See [`ParamError::Coercer`]
    Coercer,
}

impl<V> ParamError<V> {
    /// Failure kind
    #[inline]
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Missing { .. } => FailureKind::Missing,
            Self::NotFound { .. } => FailureKind::NotFound,
            Self::Syntax { .. } => FailureKind::Syntax,
            Self::Coercer { .. } => FailureKind::Coercer,
        }
    }

    /// Parameter identifier carried by the failure
    #[inline]
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Missing { id }
            | Self::NotFound { id, .. }
            | Self::Syntax { id, .. }
            | Self::Coercer { id, .. } => id.as_deref(),
        }
    }

    /// Check for [`ParamError::Missing`]
    #[inline]
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing { .. })
    }

    /// Check for [`ParamError::NotFound`]
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check for [`ParamError::Syntax`]
    #[inline]
    #[must_use]
    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax { .. })
    }

    pub(crate) fn missing(id: Option<String>) -> Self {
        Self::Missing { id }
    }

    pub(crate) fn not_found(id: Option<String>, value: crate::Param<V>) -> Self {
        Self::NotFound { id, value }
    }

    /// Translate a coercer failure. Recognised rejections become `Syntax`,
    /// anything else is carried as `Coercer`.
    pub(crate) fn from_coercion(
        error: CoercionError,
        value: crate::Param<V>,
        id: Option<String>,
    ) -> Self {
        match error {
            CoercionError::Coercion(reason) | CoercionError::Constraint(reason) => {
                Self::Syntax { id, value, reason }
            }
            CoercionError::Other(source) => Self::Coercer { id, source },
        }
    }
}

/// Errors raised by coercion capabilities
#[derive(Debug, thiserror::Error)]
pub enum CoercionError {
    /// Value could not be converted
    #[error("coercion failed: {0}")]
    Coercion(String),

    /// Value converted but violates a constraint
    #[error("constraint violated: {0}")]
    Constraint(String),

    /// Unrelated failure inside the coercer
    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl CoercionError {
    /// Create coercion failure
    #[inline]
    pub fn coercion(message: impl Into<String>) -> Self {
        Self::Coercion(message.into())
    }

    /// Create constraint violation
    #[inline]
    pub fn constraint(message: impl Into<String>) -> Self {
        Self::Constraint(message.into())
    }

    /// Wrap an unrelated error
    #[inline]
    pub fn other(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Other(Box::new(error))
    }
}

/// Programmer errors: wiring and configuration, never data
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No capability registered under this name
    #[error("unknown {kind} capability: '{name}'")]
    UnknownCapability {
        /// "coercer" or "getter"
        kind: &'static str,
        /// Requested name
        name: String,
    },

    /// Unknown policy preset name
    #[error("unknown policy preset: '{0}'")]
    UnknownPreset(String),

    /// Configuration document could not be parsed
    #[error("configuration parse error: {0}")]
    Parse(String),
}

/// Result type alias for resolution
pub type WantResult<T, V> = Result<T, ParamError<V>>;
