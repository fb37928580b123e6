// ─────────────────────────────────────────────────────────────────────
// FDTD Types — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Often used constants.
//!
//! NOTE: `VACUUM_PERMITTIVITY` holds 4π×10⁻⁷, which is the classical value
//! of the vacuum *permeability*, and `VACUUM_PERMEABILITY` is derived as
//! 1/(ε·c²), which numerically is the true permittivity (≈ 8.854e-12 F/m).
//! The source naming is preserved for compatibility.

use std::f64::consts::PI;

/// Speed of light in vacuum (m/s). Exact by SI definition.
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Vacuum permittivity, 4π×10⁻⁷ (see module note on naming).
pub const VACUUM_PERMITTIVITY: f64 = 4e-7 * PI;

/// Vacuum permeability, 1 / (VACUUM_PERMITTIVITY · SPEED_OF_LIGHT²).
/// Must stay in sync with [`derive_vacuum_permeability`].
pub const VACUUM_PERMEABILITY: f64 =
    1.0 / (VACUUM_PERMITTIVITY * (SPEED_OF_LIGHT * SPEED_OF_LIGHT));

/// Short alias for [`SPEED_OF_LIGHT`].
pub const C: f64 = SPEED_OF_LIGHT;
/// Short alias for [`VACUUM_PERMITTIVITY`].
pub const EPS0: f64 = VACUUM_PERMITTIVITY;
/// Short alias for [`VACUUM_PERMEABILITY`].
pub const MU0: f64 = VACUUM_PERMEABILITY;

#[inline]
#[must_use]
pub fn speed_of_light() -> f64 {
    SPEED_OF_LIGHT
}

#[inline]
#[must_use]
pub fn vacuum_permittivity() -> f64 {
    VACUUM_PERMITTIVITY
}

#[inline]
#[must_use]
pub fn vacuum_permeability() -> f64 {
    VACUUM_PERMEABILITY
}

/// Permeability from a permittivity and a speed of light: 1 / (eps0 · c²).
#[inline]
#[must_use]
pub fn derive_vacuum_permeability(eps0: f64, c: f64) -> f64 {
    1.0 / (eps0 * (c * c))
}
