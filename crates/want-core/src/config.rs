//! Application-level configuration
//!
//! [`WantConfig`] lets a host application re-tune what each façade entry
//! point means (e.g. strict lookups that render not-found instead of failing)
//! and load that from TOML.

use crate::error::ConfigError;
use crate::param::ParamRef;
use crate::policy::{Policy, Preset};
use crate::want::Want;
use serde::{Deserialize, Serialize};

/// Policies behind the three entry points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WantConfig {
    /// Policy for [`WantConfig::want`]
    pub tolerant: Policy,
    /// Policy for [`WantConfig::want_strict`]
    pub strict: Policy,
    /// Policy for [`WantConfig::want_probe`]
    pub probing: Policy,
}

impl WantConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With tolerant policy
    #[inline]
    #[must_use]
    pub fn with_tolerant(mut self, policy: Policy) -> Self {
        self.tolerant = policy;
        self
    }

    /// With strict policy
    #[inline]
    #[must_use]
    pub fn with_strict(mut self, policy: Policy) -> Self {
        self.strict = policy;
        self
    }

    /// With probing policy
    #[inline]
    #[must_use]
    pub fn with_probing(mut self, policy: Policy) -> Self {
        self.probing = policy;
        self
    }

    /// Parse from a TOML document; absent tables keep their defaults
    ///
    /// # Errors
    /// [`ConfigError::Parse`] on malformed TOML or unknown policy names.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Configured policy for a preset
    #[inline]
    #[must_use]
    pub fn policy_for(&self, preset: Preset) -> Policy {
        match preset {
            Preset::Tolerant => self.tolerant,
            Preset::Strict => self.strict,
            Preset::Probing => self.probing,
        }
    }

    /// Start a request under a preset looked up by name
    ///
    /// # Errors
    /// [`ConfigError::UnknownPreset`] if `preset` is not a preset name.
    pub fn want_named<'a, V>(
        &self,
        preset: &str,
        reference: impl Into<ParamRef<V>>,
    ) -> Result<Want<'a, V>, ConfigError> {
        let preset: Preset = preset.parse()?;
        Ok(Want::with_policy(reference, self.policy_for(preset)))
    }

    /// Tolerant request under this configuration
    #[must_use]
    pub fn want<'a, V>(&self, reference: impl Into<ParamRef<V>>) -> Want<'a, V> {
        Want::with_policy(reference, self.tolerant)
    }

    /// Strict request under this configuration
    #[must_use]
    pub fn want_strict<'a, V>(&self, reference: impl Into<ParamRef<V>>) -> Want<'a, V> {
        Want::with_policy(reference, self.strict)
    }

    /// Probing request under this configuration
    #[must_use]
    pub fn want_probe<'a, V>(&self, reference: impl Into<ParamRef<V>>) -> Want<'a, V> {
        Want::with_policy(reference, self.probing)
    }
}

impl Default for WantConfig {
    fn default() -> Self {
        Self {
            tolerant: Policy::TOLERANT,
            strict: Policy::STRICT,
            probing: Policy::PROBING,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{MissingPolicy, NotFoundPolicy};
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    #[test]
    fn default_matches_presets() {
        let config = WantConfig::new();
        assert_eq!(config.policy_for(Preset::Tolerant), Policy::TOLERANT);
        assert_eq!(config.policy_for(Preset::Strict), Policy::STRICT);
        assert_eq!(config.policy_for(Preset::Probing), Policy::PROBING);
    }

    #[test]
    fn from_toml_overrides_one_table() {
        let config = WantConfig::from_toml_str(
            r#"
            [strict]
            missing = "raise"
            not_found = "render_not_found"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.strict,
            Policy::new(MissingPolicy::Raise, NotFoundPolicy::RenderNotFound)
        );
        assert_eq!(config.tolerant, Policy::TOLERANT);
        assert_eq!(
            config.want_strict::<Value>("vm").current_policy(),
            config.strict
        );
    }

    #[test]
    fn from_toml_rejects_unknown_policy() {
        let err = WantConfig::from_toml_str("[probing]\nmissing = \"shrug\"\nnot_found = \"ignore\"\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn want_named_resolves_preset() {
        let config = WantConfig::new().with_probing(Policy::STRICT);
        let w = config.want_named::<Value>("probing", "vm").unwrap();
        assert_eq!(w.current_policy(), Policy::STRICT);
        assert!(matches!(
            config.want_named::<Value>("loose", "vm"),
            Err(ConfigError::UnknownPreset(_))
        ));
    }
}
