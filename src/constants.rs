//! Baseline physical constants.
//!
//! These are the classroom values the field laws in this crate are defined
//! against, not the latest CODATA refinements: ε₀ is carried to four
//! significant figures and μ₀ is the pre-2019 defined value 4π × 10⁻⁷ H/m.
//! Downstream results depend on these exact literals; do not "improve" them.

use std::f64::consts::PI;

/// Vacuum permittivity ε₀ in farads per meter (F/m).
pub const VACUUM_PERMITTIVITY: f64 = 8.854e-12;
/// Vacuum permeability μ₀ in henries per meter (H/m), defined as 4π × 10⁻⁷.
pub const VACUUM_PERMEABILITY: f64 = 4.0 * PI * 1.0e-7;
