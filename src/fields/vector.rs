use crate::math::{R3, Scalar};

/// Cartesian field vector with three SI-scalar components.
///
/// Plain value type: copies are deep and independent, components are fixed at
/// construction.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldVector {
    components: R3,
}

impl FieldVector {
    /// Creates the zero vector (0, 0, 0).
    #[must_use]
    pub fn zero() -> Self {
        Self { components: R3::zeros() }
    }

    /// Creates a vector with the given components.
    #[must_use]
    pub fn new(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self { components: R3::new(x, y, z) }
    }

    /// Returns the components as a vector.
    #[must_use]
    pub fn components(&self) -> R3 {
        self.components
    }

    /// Returns the x component.
    #[must_use]
    pub fn x(&self) -> Scalar {
        self.components.x
    }

    /// Returns the y component.
    #[must_use]
    pub fn y(&self) -> Scalar {
        self.components.y
    }

    /// Returns the z component.
    #[must_use]
    pub fn z(&self) -> Scalar {
        self.components.z
    }

    /// Euclidean norm of the vector.
    #[must_use]
    pub fn norm(&self) -> Scalar {
        self.components.norm()
    }

    /// Returns a new vector holding the element-wise sum of `self` and
    /// `other`.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        Self { components: self.components + other.components }
    }

    /// Renders the components as `(x, y, z)`.
    pub(crate) fn component_tuple(&self) -> String {
        format!("({}, {}, {})", self.x(), self.y(), self.z())
    }

    /// Renders the line `components: (x, y, z)` (no trailing newline).
    ///
    /// The name is historical: this reports the raw components, not the
    /// Euclidean norm. Use [`Self::norm`] for the latter.
    #[must_use]
    pub fn component_line(&self) -> String {
        format!("components: {}", self.component_tuple())
    }

    /// Prints the component line to standard output.
    pub fn print_magnitude(&self) {
        println!("{}", self.component_line());
    }
}
