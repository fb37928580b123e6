// ─────────────────────────────────────────────────────────────────────
// FDTD Types — Axis
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Spatial axis indices.
//!
//! Vector fields are stored as `(Nx, Ny, Nz, 3)` arrays: the first three
//! dimensions follow x, y, z order and the last one holds the component,
//! indexed by the same [`X`], [`Y`], [`Z`] constants.

use std::fmt;
use std::str::FromStr;

use ndarray::{ArrayView3, ArrayView4, ArrayViewMut3, ArrayViewMut4};
use serde::{Deserialize, Serialize};

use crate::error::{FdtdError, FdtdResult};

/// x-index
pub const X: usize = 0;
/// y-index
pub const Y: usize = 1;
/// z-index
pub const Z: usize = 2;

/// Number of vector components per grid cell.
pub const N_COMPONENTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn index(self) -> usize {
        match self {
            Axis::X => X,
            Axis::Y => Y,
            Axis::Z => Z,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }

    /// Remaining two axes in cyclic order (x → y, z; y → z, x; z → x, y).
    /// This is the ordering of the curl terms in the Yee update.
    pub fn others(self) -> (Axis, Axis) {
        match self {
            Axis::X => (Axis::Y, Axis::Z),
            Axis::Y => (Axis::Z, Axis::X),
            Axis::Z => (Axis::X, Axis::Y),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Axis {
    type Err = FdtdError;

    fn from_str(name: &str) -> FdtdResult<Self> {
        match name {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            other => Err(FdtdError::InvalidAxis(other.to_string())),
        }
    }
}

impl TryFrom<usize> for Axis {
    type Error = FdtdError;

    fn try_from(index: usize) -> FdtdResult<Self> {
        Axis::ALL
            .get(index)
            .copied()
            .ok_or_else(|| FdtdError::InvalidAxis(index.to_string()))
    }
}

impl From<Axis> for usize {
    fn from(axis: Axis) -> usize {
        axis.index()
    }
}

/// Array index for an axis name: "x" → 0, "y" → 1, "z" → 2.
pub fn axis_index(name: &str) -> FdtdResult<usize> {
    name.parse::<Axis>().map(Axis::index)
}

fn check_components(found: usize) -> FdtdResult<()> {
    if found != N_COMPONENTS {
        return Err(FdtdError::ShapeMismatch {
            expected: N_COMPONENTS,
            found,
        });
    }
    Ok(())
}

/// One component of a `(Nx, Ny, Nz, 3)` vector field.
pub fn field_component(
    field: ArrayView4<'_, f64>,
    axis: Axis,
) -> FdtdResult<ArrayView3<'_, f64>> {
    check_components(field.shape()[3])?;
    Ok(field.index_axis_move(ndarray::Axis(3), axis.index()))
}

/// Mutable counterpart of [`field_component`].
pub fn field_component_mut(
    field: ArrayViewMut4<'_, f64>,
    axis: Axis,
) -> FdtdResult<ArrayViewMut3<'_, f64>> {
    check_components(field.shape()[3])?;
    Ok(field.index_axis_move(ndarray::Axis(3), axis.index()))
}
