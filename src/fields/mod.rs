//! Field vector representations and their derived-scalar variants.

mod vector;
mod electric;
mod magnetic;

pub use vector::FieldVector;
pub use electric::ElectricFieldVector;
pub use magnetic::MagneticFieldVector;
