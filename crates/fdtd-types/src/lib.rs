// ─────────────────────────────────────────────────────────────────────
// FDTD Types
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Physical constants and spatial axis indices shared by the FDTD engine.

pub mod axis;
pub mod config;
pub mod constants;
pub mod error;

pub use axis::{axis_index, Axis, X, Y, Z};
pub use error::{FdtdError, FdtdResult};
