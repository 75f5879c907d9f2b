//! Configuration options for the conversions.

use serde::{Deserialize, Serialize};

use crate::error::{DqError, Result};

/// How the general (normalizing) conversion scales the recovered translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TranslationScaling {
    /// Divide the translation term once by the real-part norm.
    ///
    /// Matches the classic `DQ2QuatTrans` routine. For a real part of norm `k`
    /// the translation comes out scaled by `k`.
    #[default]
    SingleLength,
    /// Divide by the squared real-part norm, making the result invariant
    /// under positive scaling of the whole dual quaternion.
    SquaredLength,
}

/// Options controlling validation and normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionOptions {
    /// Real-part norms at or below this value are rejected as degenerate.
    pub degenerate_epsilon: f32,

    /// Tolerance for the unit-norm and orthogonality checks.
    pub unit_tolerance: f32,

    /// Whether the `try_*` conversions check their unit-length preconditions.
    pub validate_unit_inputs: bool,

    /// Translation normalization used by the general conversion.
    pub translation_scaling: TranslationScaling,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            degenerate_epsilon: 1e-6,
            unit_tolerance: 1e-4,
            validate_unit_inputs: false,
            translation_scaling: TranslationScaling::SingleLength,
        }
    }
}

impl ConversionOptions {
    /// Creates options with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the degenerate-norm threshold.
    #[must_use]
    pub fn with_degenerate_epsilon(mut self, epsilon: f32) -> Self {
        self.degenerate_epsilon = epsilon;
        self
    }

    /// Sets the unit-norm / orthogonality tolerance.
    #[must_use]
    pub fn with_unit_tolerance(mut self, tolerance: f32) -> Self {
        self.unit_tolerance = tolerance;
        self
    }

    /// Enables or disables precondition checks in the `try_*` conversions.
    #[must_use]
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate_unit_inputs = validate;
        self
    }

    /// Sets the translation normalization mode.
    #[must_use]
    pub fn with_translation_scaling(mut self, scaling: TranslationScaling) -> Self {
        self.translation_scaling = scaling;
        self
    }

    /// Checks that both tolerances are finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("degenerate_epsilon", self.degenerate_epsilon),
            ("unit_tolerance", self.unit_tolerance),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(DqError::InvalidOptions(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Parses options from JSON. Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        log::info!("loaded conversion options: {options:?}");
        Ok(options)
    }

    /// Serializes the options to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
