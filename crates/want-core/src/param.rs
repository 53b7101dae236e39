//! Working values and parameter references
//!
//! [`Param`] replaces the usual "nil vs. empty marker" pair with a sum type so
//! every stage of the pipeline has to say what it does with each case.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A parameter value as seen by the resolution pipeline
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Param<V> {
    /// Absent (key not in the source, or an explicit null)
    #[default]
    Missing,

    /// Key present without an associated value (`?flag`)
    NoValue,

    /// A concrete value
    Present(V),
}

impl<V> Param<V> {
    /// Check for [`Param::Missing`]
    #[inline]
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Check for [`Param::NoValue`]
    #[inline]
    #[must_use]
    pub fn is_no_value(&self) -> bool {
        matches!(self, Self::NoValue)
    }

    /// Check for [`Param::Present`]
    #[inline]
    #[must_use]
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Borrow the present value, if any
    #[inline]
    #[must_use]
    pub fn present(&self) -> Option<&V> {
        match self {
            Self::Present(v) => Some(v),
            Self::Missing | Self::NoValue => None,
        }
    }

    /// Convert into an `Option`, folding `Missing` and `NoValue` into `None`
    #[inline]
    #[must_use]
    pub fn into_option(self) -> Option<V> {
        match self {
            Self::Present(v) => Some(v),
            Self::Missing | Self::NoValue => None,
        }
    }

    /// Map the present value, leaving the markers untouched
    #[inline]
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Param<U>
    where
        F: FnOnce(V) -> U,
    {
        match self {
            Self::Missing => Param::Missing,
            Self::NoValue => Param::NoValue,
            Self::Present(v) => Param::Present(f(v)),
        }
    }

    /// Present value or `fallback`
    #[inline]
    #[must_use]
    pub fn unwrap_or(self, fallback: V) -> V {
        self.into_option().unwrap_or(fallback)
    }

    /// Borrowing view of this param
    #[inline]
    #[must_use]
    pub fn as_ref(&self) -> Param<&V> {
        match self {
            Self::Missing => Param::Missing,
            Self::NoValue => Param::NoValue,
            Self::Present(v) => Param::Present(v),
        }
    }
}

impl<V> From<V> for Param<V> {
    fn from(value: V) -> Self {
        Self::Present(value)
    }
}

impl<V> From<Option<V>> for Param<V> {
    /// `None` maps to [`Param::Missing`]
    fn from(value: Option<V>) -> Self {
        value.map_or(Self::Missing, Self::Present)
    }
}

impl<V: fmt::Debug> fmt::Display for Param<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("<missing>"),
            Self::NoValue => f.write_str("<no value>"),
            Self::Present(v) => write!(f, "{v:?}"),
        }
    }
}

/// What a request resolves: a key in the parameter source, or a literal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamRef<V> {
    /// Look the key up in the parameter source
    Key(String),

    /// Use the value as-is
    Literal(Param<V>),
}

impl<V> ParamRef<V> {
    /// Key reference
    #[inline]
    #[must_use]
    pub fn key(key: impl Into<String>) -> Self {
        Self::Key(key.into())
    }

    /// Literal present value
    #[inline]
    #[must_use]
    pub fn literal(value: V) -> Self {
        Self::Literal(Param::Present(value))
    }

    /// Key name, if this is a key reference
    #[inline]
    #[must_use]
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Self::Key(k) => Some(k),
            Self::Literal(_) => None,
        }
    }
}

impl<V> From<&str> for ParamRef<V> {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl<V> From<String> for ParamRef<V> {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl<V> From<Param<V>> for ParamRef<V> {
    fn from(param: Param<V>) -> Self {
        Self::Literal(param)
    }
}
