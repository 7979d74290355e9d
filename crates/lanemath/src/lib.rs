//! Aligned SIMD-lane vector and quaternion math for real-time graphics and
//! physics.

#[macro_use]
mod macros;

#[cfg(feature = "benchmark")]
pub mod benchmark;
pub mod consts;
pub mod error;
mod lanes;
pub mod matrix;
pub mod num;
pub mod point;
pub mod quaternion;
pub mod random;
mod text;
pub mod vector;

pub use error::MathError;
pub use lanes::LaneVector;
pub use matrix::Matrix4;
pub use point::{IntPoint2, IntPoint3, UIntPoint2};
pub use quaternion::Quaternion;
pub use random::RandomSampler;
pub use vector::{Vector2, Vector3, Vector4};
