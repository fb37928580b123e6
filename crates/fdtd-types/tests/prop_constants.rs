// ─────────────────────────────────────────────────────────────────────
// FDTD Types — Property-Based Tests (proptest) for fdtd-types
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for fdtd-types using proptest.
//!
//! Covers: derived permeability relationship under perturbed base
//! constants, axis name lookup, field component views.

use fdtd_types::axis::{field_component, Axis};
use fdtd_types::config::VacuumConfig;
use fdtd_types::constants::{
    derive_vacuum_permeability, speed_of_light, vacuum_permeability, vacuum_permittivity,
};
use fdtd_types::{axis_index, FdtdError};
use ndarray::Array4;
use proptest::prelude::*;

// ── Registry End-to-End ──────────────────────────────────────────────

#[test]
fn registry_end_to_end() {
    let c = 299792458.0_f64;
    let eps0 = 4.0 * std::f64::consts::PI * 1e-7;

    assert_eq!(speed_of_light(), c);
    assert!((vacuum_permittivity() - 1.2566370614e-6).abs() < 1e-15);

    let expected = 1.0 / (eps0 * c.powi(2));
    let rel_err = (vacuum_permeability() - expected).abs() / expected;
    assert!(rel_err < 1e-12, "mu0={:e}", vacuum_permeability());
}

// ── Derived Constant Consistency ─────────────────────────────────────

proptest! {
    /// Permeability follows 1/(eps0·c²) for any positive base constants.
    #[test]
    fn derived_permeability_relationship(
        c in 1.0e-3f64..1.0e10,
        eps0 in 1.0e-15f64..1.0e3,
    ) {
        let cfg = VacuumConfig::new(c, eps0).unwrap();
        let expected = 1.0 / (eps0 * c * c);
        let mu = cfg.vacuum_permeability();
        prop_assert!(((mu - expected) / expected).abs() < 1e-12,
            "mu={:e}, expected={:e}", mu, expected);
        prop_assert_eq!(mu, derive_vacuum_permeability(eps0, c));
    }

    /// Perturbing a base constant is reflected in the next read.
    #[test]
    fn derived_permeability_tracks_inputs(
        scale in 0.5f64..2.0,
    ) {
        let mut cfg = VacuumConfig::si();
        let base = cfg.vacuum_permeability();
        cfg.vacuum_permittivity *= scale;
        let scaled = cfg.vacuum_permeability();
        prop_assert!(((scaled * scale - base) / base).abs() < 1e-12);
    }

    /// eps0 · mu0 · c² == 1 up to rounding.
    #[test]
    fn derived_product_is_unity(
        c in 1.0e-3f64..1.0e10,
        eps0 in 1.0e-15f64..1.0e3,
    ) {
        let cfg = VacuumConfig::new(c, eps0).unwrap();
        let product = cfg.vacuum_permittivity * cfg.vacuum_permeability() * c * c;
        prop_assert!((product - 1.0).abs() < 1e-12, "product={}", product);
    }
}

// ── Axis Lookup ──────────────────────────────────────────────────────

proptest! {
    /// Only "x", "y", "z" resolve; everything else is InvalidAxis.
    #[test]
    fn axis_index_rejects_other_names(name in "\\PC{0,4}") {
        let result = axis_index(&name);
        match name.as_str() {
            "x" => prop_assert_eq!(result.unwrap(), 0),
            "y" => prop_assert_eq!(result.unwrap(), 1),
            "z" => prop_assert_eq!(result.unwrap(), 2),
            _ => prop_assert!(matches!(result, Err(FdtdError::InvalidAxis(ref n)) if *n == name)),
        }
    }

    /// Index conversions agree for every usize.
    #[test]
    fn axis_try_from_index(index in 0usize..1024) {
        match Axis::try_from(index) {
            Ok(axis) => {
                prop_assert!(index < 3);
                prop_assert_eq!(axis.index(), index);
                prop_assert_eq!(axis_index(axis.name()).unwrap(), index);
            }
            Err(_) => prop_assert!(index >= 3),
        }
    }
}

// ── Field Component Views ────────────────────────────────────────────

proptest! {
    /// Component views keep the spatial shape and read the right slot.
    #[test]
    fn field_component_shape_and_values(
        nx in 1usize..8,
        ny in 1usize..8,
        nz in 1usize..8,
    ) {
        let field = Array4::from_shape_fn((nx, ny, nz, 3), |(i, j, k, c)| {
            (c * 1000 + i * 100 + j * 10 + k) as f64
        });
        for axis in Axis::ALL {
            let comp = field_component(field.view(), axis).unwrap();
            prop_assert_eq!(comp.shape(), &[nx, ny, nz]);
            let (i, j, k) = (nx - 1, ny - 1, nz - 1);
            prop_assert_eq!(comp[[i, j, k]], field[[i, j, k, axis.index()]]);
        }
    }
}

// ── Thread Safety ────────────────────────────────────────────────────

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn shared_types_are_send_sync() {
    assert_send_sync::<VacuumConfig>();
    assert_send_sync::<Axis>();
    assert_send_sync::<FdtdError>();
}
