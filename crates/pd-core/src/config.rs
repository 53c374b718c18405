//! Malthusian model configuration.

use crate::{ValidationError, ValidationResult};

/// Parameters for a Malthusian population model.
///
/// Typically loaded from a JSON file by the application crate (with the
/// `serde` feature) and turned into a ready model by
/// `pd_model::ModelBuilder::from_config`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MalthusConfig {
    /// Population before the first step.  Also used as `p0` of the birth
    /// function.
    pub initial_population: f64,

    /// Exponent `r` of the birth function `p0 * e^(r * t)`.
    pub birth_rate: f64,

    /// Coefficient `d` of the death function `-d * p`.
    pub death_rate: f64,

    /// Steps to compute when describing the model.
    pub steps: u64,
}

impl Default for MalthusConfig {
    fn default() -> Self {
        Self {
            initial_population: 100.0,
            birth_rate:         0.1,
            death_rate:         0.1,
            steps:              5,
        }
    }
}

impl MalthusConfig {
    /// Reject non-finite parameters and an empty step range.
    ///
    /// The model itself never clamps numeric input; this check only guards
    /// values read from configuration files.
    pub fn validate(&self) -> ValidationResult<()> {
        let fields = [
            ("initial_population", self.initial_population),
            ("birth_rate",         self.birth_rate),
            ("death_rate",         self.death_rate),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(ValidationError::Config(format!("{name} must be finite, got {value}")));
            }
        }
        if self.steps == 0 {
            return Err(ValidationError::Config("steps must be positive".into()));
        }
        Ok(())
    }
}
