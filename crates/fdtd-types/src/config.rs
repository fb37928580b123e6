// ─────────────────────────────────────────────────────────────────────
// FDTD Types — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::constants::{derive_vacuum_permeability, SPEED_OF_LIGHT, VACUUM_PERMITTIVITY};
use crate::error::{FdtdError, FdtdResult};

/// Base vacuum constants for a simulation.
///
/// Either field may be omitted from JSON and falls back to the SI registry
/// value. Normalized-unit runs set both to 1.0.
/// The permeability is never stored; it is recomputed from the current
/// fields on every call to [`VacuumConfig::vacuum_permeability`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VacuumConfig {
    #[serde(default = "default_speed_of_light")]
    pub speed_of_light: f64,
    #[serde(default = "default_vacuum_permittivity")]
    pub vacuum_permittivity: f64,
}

const KNOWN_KEYS: [&str; 2] = ["speed_of_light", "vacuum_permittivity"];

/// Relative tolerance used by [`VacuumConfig::is_si`].
pub const SI_TOLERANCE: f64 = 1e-9;

fn default_speed_of_light() -> f64 {
    SPEED_OF_LIGHT
}
fn default_vacuum_permittivity() -> f64 {
    VACUUM_PERMITTIVITY
}

impl Default for VacuumConfig {
    fn default() -> Self {
        VacuumConfig::si()
    }
}

impl VacuumConfig {
    /// Registry values.
    pub fn si() -> Self {
        VacuumConfig {
            speed_of_light: default_speed_of_light(),
            vacuum_permittivity: default_vacuum_permittivity(),
        }
    }

    pub fn new(speed_of_light: f64, vacuum_permittivity: f64) -> FdtdResult<Self> {
        let config = VacuumConfig {
            speed_of_light,
            vacuum_permittivity,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn vacuum_permeability(&self) -> f64 {
        derive_vacuum_permeability(self.vacuum_permittivity, self.speed_of_light)
    }

    /// Wave impedance sqrt(permittivity / permeability) under the registry
    /// naming, i.e. √(μ₀/ε₀) in textbook notation. ≈ 376.73 Ω for SI.
    pub fn impedance(&self) -> f64 {
        (self.vacuum_permittivity / self.vacuum_permeability()).sqrt()
    }

    /// True when both base constants are within [`SI_TOLERANCE`] (relative)
    /// of the registry values, so rounded literals such as 1.2566370614e-6
    /// still count as SI.
    pub fn is_si(&self) -> bool {
        let close = |a: f64, b: f64| ((a - b) / b).abs() <= SI_TOLERANCE;
        close(self.speed_of_light, SPEED_OF_LIGHT)
            && close(self.vacuum_permittivity, VACUUM_PERMITTIVITY)
    }

    pub fn validate(&self) -> FdtdResult<()> {
        if !self.speed_of_light.is_finite() || self.speed_of_light <= 0.0 {
            return Err(FdtdError::PhysicsViolation(format!(
                "speed_of_light must be finite and > 0, got {}",
                self.speed_of_light
            )));
        }
        if !self.vacuum_permittivity.is_finite() || self.vacuum_permittivity <= 0.0 {
            return Err(FdtdError::PhysicsViolation(format!(
                "vacuum_permittivity must be finite and > 0, got {}",
                self.vacuum_permittivity
            )));
        }
        let mu = self.vacuum_permeability();
        if !mu.is_finite() || mu <= 0.0 {
            return Err(FdtdError::PhysicsViolation(format!(
                "derived vacuum_permeability is not representable ({mu}) for c={}, eps0={}",
                self.speed_of_light, self.vacuum_permittivity
            )));
        }
        Ok(())
    }

    /// Parse and validate. Unknown keys are rejected so a misspelled
    /// constant cannot silently fall back to its SI default.
    pub fn from_json(json: &str) -> FdtdResult<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if let Some(object) = value.as_object() {
            if let Some(key) = object.keys().find(|k| !KNOWN_KEYS.contains(&k.as_str())) {
                return Err(FdtdError::ConfigError(format!(
                    "unknown vacuum config key {key:?} (expected one of {KNOWN_KEYS:?})"
                )));
            }
        }
        let config: Self = serde_json::from_value(value)?;
        config.validate()?;
        if !config.is_si() {
            warn!(
                "vacuum constants override SI values: c={}, eps0={}",
                config.speed_of_light, config.vacuum_permittivity
            );
        }
        Ok(config)
    }

    /// Load from JSON file.
    pub fn from_file(path: &str) -> FdtdResult<Self> {
        debug!("loading vacuum config from {path}");
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }
}
