#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Fundamental physical constants used throughout the library.
pub mod constants;
/// Shared mathematical primitives (scalar and vector aliases).
pub mod math;
/// Scalar field laws (Gauss point charge, Ampere long wire).
pub mod laws;
/// Field vector representations and their derived-scalar variants.
pub mod fields;
/// Error types for checked field computations.
pub mod errors;
/// Fixed demonstration sequence used by the `field_demo` binary.
pub mod demo;

/// Common exports for downstream users.
pub mod prelude;
