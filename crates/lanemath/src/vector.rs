//! Vectors.
//!
//! [`Vector2`], [`Vector3`] and [`Vector4`] share one physical layout: four
//! packed `f32` lanes in a 128-bit SIMD register with 16-byte alignment. The
//! lanes beyond a type's logical width are always zero, so widening and
//! narrowing conversions are plain lane copies.
//!
//! Arithmetic operators act lane by lane: `a * b` multiplies corresponding
//! lanes and is neither a dot nor a cross product. A scalar operand is
//! broadcast to every lane.
//!
//! Ordering is also lane by lane and never by magnitude. `a < b` holds only
//! when every lane of `a` is less than the corresponding lane of `b`, so two
//! vectors that differ in opposite directions in different lanes are
//! unordered. The `all_le` and `all_ge` methods give the non-strict lane-wise
//! relations.
//!
//! Division by zero and normalization of the zero vector are not trapped.
//! They give NaN or infinite lanes per IEEE 754, which `is_valid` detects.

mod vector2;
mod vector3;
mod vector4;

pub use vector2::Vector2;
pub use vector3::Vector3;
pub use vector4::Vector4;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lanes::LaneVector;
    use std::mem::{align_of, size_of};

    #[test]
    fn all_vector_widths_use_aligned_four_lane_storage() {
        assert_eq!(size_of::<Vector2>(), 16);
        assert_eq!(size_of::<Vector3>(), 16);
        assert_eq!(size_of::<Vector4>(), 16);
        assert_eq!(align_of::<Vector2>(), 16);
        assert_eq!(align_of::<Vector3>(), 16);
        assert_eq!(align_of::<Vector4>(), 16);
    }

    #[test]
    fn logical_widths_are_reported_per_type() {
        assert_eq!(Vector2::WIDTH, 2);
        assert_eq!(Vector3::WIDTH, 3);
        assert_eq!(Vector4::WIDTH, 4);
    }

    #[test]
    fn widening_then_narrowing_preserves_components() {
        let v2 = Vector2::new(1.5, -2.0);
        let v4 = Vector4::from(Vector3::from(v2));
        assert_eq!(v4, Vector4::new(1.5, -2.0, 0.0, 0.0));
        assert_eq!(v4.xyz().xy(), v2);
        assert_eq!(v4.xy(), v2);
    }

    #[test]
    fn unused_lanes_stay_zero_after_lane_operations() {
        let v = Vector2::new(1.0, 2.0) / Vector2::zeros();
        assert_eq!(v._lanes().z, 0.0);
        assert_eq!(v._lanes().w, 0.0);

        let v = (Vector3::new(1.0, 2.0, 3.0) + 1.0) / 0.0;
        assert_eq!(v._lanes().w, 0.0);
    }
}
