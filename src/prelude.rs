//! Convenience re-exports for working with field vectors.

pub use crate::constants::*;
pub use crate::demo::run_demo;
pub use crate::errors::FieldError;
pub use crate::fields::{ElectricFieldVector, FieldVector, MagneticFieldVector};
pub use crate::laws::{ampere_long_wire, gauss_point_charge};
pub use crate::math::{R3, Scalar};
