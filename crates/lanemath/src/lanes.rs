//! Packed four-lane storage shared by all vector widths.
//!
//! Every vector type wraps a single [`glam::Vec4`], which is four packed
//! `f32` lanes with 16-byte alignment. A vector with logical width `N` keeps
//! the lanes at index `N` and above at exactly zero, which is restored after
//! every operation that could disturb them. Full-width reductions such as
//! the dot product therefore give the correct result for every width
//! without branching on it.

use glam::{BVec4A, Vec4};

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// A vector type backed by four packed `f32` lanes, of which the first
/// [`WIDTH`](Self::WIDTH) are meaningful.
///
/// Implemented by [`Vector2`](crate::Vector2), [`Vector3`](crate::Vector3)
/// and [`Vector4`](crate::Vector4). Functions generic over this trait are
/// monomorphized per width.
pub trait LaneVector: Copy + sealed::Sealed {
    /// Number of logical lanes.
    const WIDTH: usize;

    #[doc(hidden)]
    fn _lanes(&self) -> Vec4;

    #[doc(hidden)]
    fn _from_lanes(lanes: Vec4) -> Self;
}

/// Sets the lanes at index `width` and above to zero.
#[inline]
pub(crate) fn clear_unused_lanes(lanes: Vec4, width: usize) -> Vec4 {
    match width {
        2 => Vec4::select(BVec4A::new(true, true, false, false), lanes, Vec4::ZERO),
        3 => Vec4::select(BVec4A::new(true, true, true, false), lanes, Vec4::ZERO),
        _ => lanes,
    }
}

/// Whether the bits of a lane comparison mask are set for all of the first
/// `width` lanes.
#[inline]
pub(crate) const fn all_lanes(mask_bits: u32, width: usize) -> bool {
    let required = (1_u32 << width) - 1;
    mask_bits & required == required
}

/// Full-width dot product. In debug builds, flags a NaN result caused by a
/// NaN or infinite input lane. Finite inputs whose products overflow with
/// opposite signs also give NaN, and are not flagged.
#[inline]
pub(crate) fn dot(a: Vec4, b: Vec4) -> f32 {
    let dot = a.dot(b);
    debug_assert!(
        !dot.is_nan() || (a.is_finite() && b.is_finite()),
        "dot product of {a} and {b} is NaN"
    );
    dot
}

/// Divides the lanes by their Euclidean length. The lanes are first scaled
/// by the largest absolute lane, so the squared length can neither overflow
/// nor underflow for finite non-zero input. All-zero lanes give NaN.
#[inline]
pub(crate) fn normalize(lanes: Vec4) -> Vec4 {
    let scaled = lanes / lanes.abs().max_element();
    scaled / scaled.length()
}

#[inline]
pub(crate) fn is_valid(lanes: Vec4) -> bool {
    lanes.is_finite()
}

#[inline]
pub(crate) fn is_zero_or_near_zero(lanes: Vec4, epsilon: f32) -> bool {
    lanes.abs().cmple(Vec4::splat(epsilon)).all()
}

#[inline]
pub(crate) fn zeroed_if_near_zero(lanes: Vec4, epsilon: f32) -> Vec4 {
    Vec4::select(lanes.abs().cmple(Vec4::splat(epsilon)), Vec4::ZERO, lanes)
}

/// Applies a scalar function to every lane.
#[inline]
pub(crate) fn map(lanes: Vec4, f: impl Fn(f32) -> f32) -> Vec4 {
    Vec4::from_array(lanes.to_array().map(f))
}

/// Length computed from a reciprocal square root estimate refined by one
/// Newton-Raphson step. Relative error is below 0.2%.
#[inline]
pub(crate) fn length_estimate(lanes: Vec4) -> f32 {
    let length_squared = lanes.length_squared();
    length_squared * recip_sqrt_estimate(length_squared)
}

#[inline]
fn recip_sqrt_estimate(value: f32) -> f32 {
    let estimate = f32::from_bits(0x5f37_5a86 - (value.to_bits() >> 1));
    estimate * (1.5 - 0.5 * value * estimate * estimate)
}
