use crate::errors::FieldError;
use crate::fields::FieldVector;
use crate::laws::ampere_long_wire;
use crate::math::Scalar;

/// Magnetic field vector with a derived scalar magnitude in T.
///
/// Structurally mirrors [`crate::fields::ElectricFieldVector`] with Ampere's
/// long-wire law in place of Gauss's law.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagneticFieldVector {
    vector: FieldVector,
    calculated_b: Scalar,
}

impl MagneticFieldVector {
    /// Creates a magnetic field vector with zero components.
    #[must_use]
    pub fn zero() -> Self {
        Self::from_vector(FieldVector::zero())
    }

    /// Creates a magnetic field vector with the given components.
    #[must_use]
    pub fn new(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self::from_vector(FieldVector::new(x, y, z))
    }

    /// Wraps an existing [`FieldVector`].
    #[must_use]
    pub fn from_vector(vector: FieldVector) -> Self {
        Self { vector, calculated_b: 0.0 }
    }

    /// Borrows the underlying component vector.
    #[must_use]
    pub fn vector(&self) -> &FieldVector {
        &self.vector
    }

    /// Sets the derived scalar to the Ampere-law field of a long straight
    /// wire carrying `current_a` (A) at `distance_m` (m).
    ///
    /// Zero distance silently yields an infinite or NaN scalar per IEEE 754.
    pub fn calculate_field(&mut self, current_a: Scalar, distance_m: Scalar) {
        self.calculated_b = ampere_long_wire(current_a, distance_m);
    }

    /// Checked variant of [`Self::calculate_field`]: rejects zero distance
    /// and returns the computed scalar otherwise.
    ///
    /// # Errors
    /// [`FieldError::InvalidDistance`] when `distance_m == 0`.
    pub fn try_calculate_field(
        &mut self,
        current_a: Scalar,
        distance_m: Scalar,
    ) -> Result<Scalar, FieldError> {
        if distance_m == 0.0 {
            return Err(FieldError::InvalidDistance(distance_m));
        }
        self.calculate_field(current_a, distance_m);
        Ok(self.calculated_b)
    }

    /// Last computed field magnitude in T; 0.0 if never computed.
    #[must_use]
    pub fn calculated_b(&self) -> Scalar {
        self.calculated_b
    }

    /// Returns a new instance whose components are the element-wise sum of
    /// `self` and `other`; the resulting scalar is reset to 0.0.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        Self::from_vector(self.vector.add(&other.vector))
    }

    /// Renders `Magnetic Field Components: (x, y, z)` (no trailing newline).
    #[must_use]
    pub fn format(&self) -> String {
        format!("Magnetic Field Components: {}", self.vector.component_tuple())
    }

    /// Prints the component line to standard output.
    pub fn print_magnitude(&self) {
        self.vector.print_magnitude();
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    use crate::constants::VACUUM_PERMEABILITY;

    use super::*;

    #[test]
    fn fresh_instance_reports_zero_scalar() {
        assert_eq!(MagneticFieldVector::new(1.0e-3, 0.0, 2.0e-3).calculated_b(), 0.0);
    }

    #[test]
    fn calculate_field_applies_ampere_law() {
        let mut b = MagneticFieldVector::zero();
        b.calculate_field(10.0, 0.1);
        let reference = 10.0 / (2.0 * PI * 0.1 * VACUUM_PERMEABILITY);
        assert_relative_eq!(b.calculated_b(), reference, max_relative = 1.0e-12);
    }

    #[test]
    fn try_calculate_field_rejects_zero_distance() {
        let mut b = MagneticFieldVector::zero();
        assert_eq!(
            b.try_calculate_field(10.0, 0.0),
            Err(FieldError::InvalidDistance(0.0))
        );
        assert_eq!(b.calculated_b(), 0.0);
    }

    #[test]
    fn add_sums_components_and_resets_scalar() {
        let mut b1 = MagneticFieldVector::new(1.0e-3, 0.0, 2.0e-3);
        b1.calculate_field(10.0, 0.1);
        let b2 = MagneticFieldVector::new(2.0e-3, 1.0e-3, 3.0e-3);

        let b3 = b1.add(&b2);
        assert_relative_eq!(b3.vector().x(), 0.003, max_relative = 1.0e-12);
        assert_relative_eq!(b3.vector().y(), 0.001, max_relative = 1.0e-12);
        assert_relative_eq!(b3.vector().z(), 0.005, max_relative = 1.0e-12);
        assert_eq!(b3.calculated_b(), 0.0);
        assert_eq!(b3.vector().components(), b2.add(&b1).vector().components());
    }

    #[test]
    fn format_renders_labeled_components() {
        let b = MagneticFieldVector::new(0.003, 0.001, 0.005);
        assert_eq!(b.format(), "Magnetic Field Components: (0.003, 0.001, 0.005)");
    }
}
