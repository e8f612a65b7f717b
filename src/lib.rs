//! Fixed-dimension numeric vectors for a 3D game engine
//!
//! This crate provides [`math::Vector`], a value type holding `D` components
//! of a primitive numeric type, with componentwise arithmetic, dot and cross
//! products, interpolation and random sampling. [`math::PackedVector`] is its
//! padding-free twin for filling GPU vertex and uniform buffers.
//!
//! # Example
//! ```
//! use engine_math::math::{cross_product, Vec3};
//!
//! let normal = cross_product(&Vec3::new(1.0, 0.0, 0.0), &Vec3::new(0.0, 1.0, 0.0));
//! assert_eq!(normal, Vec3::new(0.0, 0.0, 1.0));
//! ```

pub mod error;
pub mod math;

pub use error::VectorError;
