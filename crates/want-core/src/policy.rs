//! Resolution policies and the three named presets
//!
//! A [`Policy`] decides what happens when a parameter is missing and when a
//! lookup finds nothing. The façade entry points differ only in which preset
//! they start from.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What to do when the parameter is absent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingPolicy {
    /// Fail with `ParamError::Missing`
    Raise,

    /// Stop immediately and return the default
    Return,

    /// Substitute the default and keep going
    Ignore,
}

/// What to do when lookup yields nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotFoundPolicy {
    /// Fail with `ParamError::NotFound`
    Raise,

    /// Continue with a missing value
    Ignore,

    /// Hand back `Terminal::NotFound`
    RenderNotFound,

    /// Hand back `Terminal::Pass`
    Pass,
}

/// Policy pair applied to one resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Policy {
    /// Missing-parameter handling
    pub missing: MissingPolicy,

    /// Failed-lookup handling
    pub not_found: NotFoundPolicy,
}

impl Policy {
    /// Never fails on absence or failed lookup
    pub const TOLERANT: Self = Self::new(MissingPolicy::Ignore, NotFoundPolicy::Ignore);

    /// Fails on absence and on failed lookup
    pub const STRICT: Self = Self::new(MissingPolicy::Raise, NotFoundPolicy::Raise);

    /// Returns the default when absent, ignores failed lookup
    pub const PROBING: Self = Self::new(MissingPolicy::Return, NotFoundPolicy::Ignore);

    /// Create policy
    #[inline]
    #[must_use]
    pub const fn new(missing: MissingPolicy, not_found: NotFoundPolicy) -> Self {
        Self { missing, not_found }
    }

    /// Replace missing handling
    #[inline]
    #[must_use]
    pub const fn with_missing(mut self, missing: MissingPolicy) -> Self {
        self.missing = missing;
        self
    }

    /// Replace not-found handling
    #[inline]
    #[must_use]
    pub const fn with_not_found(mut self, not_found: NotFoundPolicy) -> Self {
        self.not_found = not_found;
        self
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self::TOLERANT
    }
}

/// Named policy preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// [`Policy::TOLERANT`], used by `want`
    #[default]
    Tolerant,

    /// [`Policy::STRICT`], used by `want_strict`
    Strict,

    /// [`Policy::PROBING`], used by `want_probe`
    Probing,
}

impl Preset {
    /// Built-in policy for this preset
    #[inline]
    #[must_use]
    pub const fn policy(self) -> Policy {
        match self {
            Self::Tolerant => Policy::TOLERANT,
            Self::Strict => Policy::STRICT,
            Self::Probing => Policy::PROBING,
        }
    }

    /// Preset name
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tolerant => "tolerant",
            Self::Strict => "strict",
            Self::Probing => "probing",
        }
    }
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tolerant" => Ok(Self::Tolerant),
            "strict" => Ok(Self::Strict),
            "probing" => Ok(Self::Probing),
            other => Err(ConfigError::UnknownPreset(other.to_string())),
        }
    }
}
