//! Scalar field laws shared by the field vector variants.

use std::f64::consts::PI;

use crate::constants::{VACUUM_PERMEABILITY, VACUUM_PERMITTIVITY};
use crate::math::Scalar;

/// Electric field magnitude of a point charge `charge_c` (C) at `distance_m`
/// (m), per Gauss's law: E = Q / (4π r² ε₀). Result in N/C.
///
/// `distance_m == 0` yields ±∞ or NaN per IEEE 754; see
/// [`crate::fields::ElectricFieldVector::try_calculate_field`] for the checked
/// variant.
#[inline]
#[must_use]
pub fn gauss_point_charge(charge_c: Scalar, distance_m: Scalar) -> Scalar {
    charge_c / (4.0 * PI * distance_m * distance_m * VACUUM_PERMITTIVITY)
}

/// Magnetic field magnitude at `distance_m` (m) from a long straight wire
/// carrying `current_a` (A): B = I / (2π r μ₀). Result in T.
///
/// `distance_m == 0` yields ±∞ or NaN per IEEE 754; see
/// [`crate::fields::MagneticFieldVector::try_calculate_field`] for the checked
/// variant.
#[inline]
#[must_use]
pub fn ampere_long_wire(current_a: Scalar, distance_m: Scalar) -> Scalar {
    current_a / (2.0 * PI * distance_m * VACUUM_PERMEABILITY)
}
