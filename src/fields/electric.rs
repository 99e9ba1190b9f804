use crate::errors::FieldError;
use crate::fields::FieldVector;
use crate::laws::gauss_point_charge;
use crate::math::Scalar;

/// Electric field vector with a derived scalar magnitude in N/C.
///
/// Owns a [`FieldVector`] for the Cartesian components; the scalar is 0.0
/// until [`Self::calculate_field`] runs.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElectricFieldVector {
    vector: FieldVector,
    calculated_e: Scalar,
}

impl ElectricFieldVector {
    /// Creates an electric field vector with zero components.
    #[must_use]
    pub fn zero() -> Self {
        Self::from_vector(FieldVector::zero())
    }

    /// Creates an electric field vector with the given components.
    #[must_use]
    pub fn new(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self::from_vector(FieldVector::new(x, y, z))
    }

    /// Wraps an existing [`FieldVector`].
    #[must_use]
    pub fn from_vector(vector: FieldVector) -> Self {
        Self { vector, calculated_e: 0.0 }
    }

    /// Borrows the underlying component vector.
    #[must_use]
    pub fn vector(&self) -> &FieldVector {
        &self.vector
    }

    /// Sets the derived scalar to the Gauss-law field of a point charge
    /// `charge_c` (C) at `distance_m` (m).
    ///
    /// Zero distance silently yields an infinite or NaN scalar per IEEE 754.
    pub fn calculate_field(&mut self, charge_c: Scalar, distance_m: Scalar) {
        self.calculated_e = gauss_point_charge(charge_c, distance_m);
    }

    /// Checked variant of [`Self::calculate_field`]: rejects zero distance
    /// and returns the computed scalar otherwise.
    ///
    /// # Errors
    /// [`FieldError::InvalidDistance`] when `distance_m == 0`.
    pub fn try_calculate_field(
        &mut self,
        charge_c: Scalar,
        distance_m: Scalar,
    ) -> Result<Scalar, FieldError> {
        if distance_m == 0.0 {
            return Err(FieldError::InvalidDistance(distance_m));
        }
        self.calculate_field(charge_c, distance_m);
        Ok(self.calculated_e)
    }

    /// Last computed field magnitude in N/C; 0.0 if never computed.
    #[must_use]
    pub fn calculated_e(&self) -> Scalar {
        self.calculated_e
    }

    /// Returns a new instance whose components are the element-wise sum of
    /// `self` and `other`.
    ///
    /// The resulting scalar is reset to 0.0 rather than carried over from
    /// either operand; a sum describes a new field whose magnitude has not
    /// been computed yet.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        Self::from_vector(self.vector.add(&other.vector))
    }

    /// Renders `Electric Field Components: (x, y, z)` (no trailing newline).
    #[must_use]
    pub fn format(&self) -> String {
        format!("Electric Field Components: {}", self.vector.component_tuple())
    }

    /// Prints the component line to standard output.
    pub fn print_magnitude(&self) {
        self.vector.print_magnitude();
    }
}
