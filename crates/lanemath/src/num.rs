//! Lane-wise numeric functions.
//!
//! The generic functions accept any of the vector types through
//! [`LaneVector`] and are compiled separately for each width. Lanes beyond
//! the logical width stay zero in every result, also for functions such as
//! [`recip`] that would map a zero lane to something else.
//!
//! The functional forms [`magnitude`], [`dot`], [`normal`] and friends give
//! bit-identical results to the corresponding methods on the vector types.

use crate::{
    error::MathError,
    lanes::{self, LaneVector},
    vector::{Vector2, Vector3, Vector4},
};
use glam::Vec4;

/// Lane-wise square root.
#[inline]
pub fn sqrt<T: LaneVector>(v: &T) -> T {
    T::_from_lanes(lanes::map(v._lanes(), f32::sqrt))
}

/// Lane-wise reciprocal.
#[inline]
pub fn recip<T: LaneVector>(v: &T) -> T {
    T::_from_lanes(v._lanes().recip())
}

/// Lane-wise reciprocal square root.
#[inline]
pub fn recip_sqrt<T: LaneVector>(v: &T) -> T {
    T::_from_lanes(lanes::map(v._lanes(), |lane| lane.sqrt().recip()))
}

/// Lane-wise rounding toward negative infinity.
#[inline]
pub fn floor<T: LaneVector>(v: &T) -> T {
    T::_from_lanes(v._lanes().floor())
}

/// Lane-wise rounding toward positive infinity.
#[inline]
pub fn ceil<T: LaneVector>(v: &T) -> T {
    T::_from_lanes(v._lanes().ceil())
}

/// Lane-wise rounding to the nearest integer, with halfway cases rounded
/// away from zero.
#[inline]
pub fn round<T: LaneVector>(v: &T) -> T {
    T::_from_lanes(v._lanes().round())
}

/// Lane-wise absolute value.
#[inline]
pub fn abs<T: LaneVector>(v: &T) -> T {
    T::_from_lanes(v._lanes().abs())
}

/// Lane-wise natural exponential.
#[inline]
pub fn exp<T: LaneVector>(v: &T) -> T {
    T::_from_lanes(lanes::map(v._lanes(), f32::exp))
}

/// Raises each lane of `base` to the power in the corresponding lane of
/// `exponent`.
#[inline]
pub fn pow<T: LaneVector>(base: &T, exponent: &T) -> T {
    let base = base._lanes().to_array();
    let exponent = exponent._lanes().to_array();
    T::_from_lanes(Vec4::from_array(std::array::from_fn(|idx| {
        base[idx].powf(exponent[idx])
    })))
}

/// Lane-wise minimum.
#[inline]
pub fn min<T: LaneVector>(a: &T, b: &T) -> T {
    T::_from_lanes(a._lanes().min(b._lanes()))
}

/// Lane-wise maximum.
#[inline]
pub fn max<T: LaneVector>(a: &T, b: &T) -> T {
    T::_from_lanes(a._lanes().max(b._lanes()))
}

/// Clamps each lane of `v` to the range given by the corresponding lanes of
/// `min` and `max`.
#[inline]
pub fn clamp<T: LaneVector>(v: &T, min: &T, max: &T) -> T {
    T::_from_lanes(v._lanes().max(min._lanes()).min(max._lanes()))
}

/// Linear interpolation from `a` to `b`, with a separate weight for each lane
/// in `t`.
#[inline]
pub fn lerp<T: LaneVector>(a: &T, b: &T, t: &T) -> T {
    let a = a._lanes();
    T::_from_lanes(a + (b._lanes() - a) * t._lanes())
}

/// Clamps a scalar to the range `[min, max]`. Unlike [`f32::clamp`], this
/// does not panic when `min > max`, and gives `max` in that case.
#[inline]
pub fn clamp_scalar(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Functional form of the `magnitude` method.
#[inline]
pub fn magnitude<T: LaneVector>(v: &T) -> f32 {
    v._lanes().length()
}

/// Functional form of the `magnitude_estimate` method.
#[inline]
pub fn magnitude_estimate<T: LaneVector>(v: &T) -> f32 {
    lanes::length_estimate(v._lanes())
}

/// Functional form of the `dot` method.
///
/// # Panics
/// In debug builds, if the result is NaN because a lane of either input
/// is NaN or infinite.
#[inline]
pub fn dot<T: LaneVector>(a: &T, b: &T) -> f32 {
    lanes::dot(a._lanes(), b._lanes())
}

/// Functional form of the `normalized` method.
#[inline]
pub fn normal<T: LaneVector>(v: &T) -> T {
    T::_from_lanes(lanes::normalize(v._lanes()))
}

/// Functional form of the `multiply_add` method.
#[inline]
pub fn multiply_add<T: LaneVector>(v: &T, multiplier: &T, addend: &T) -> T {
    T::_from_lanes(v._lanes() * multiplier._lanes() + addend._lanes())
}

/// Functional form of [`Vector2::cross`].
#[inline]
pub fn cross2(a: &Vector2, b: &Vector2) -> f32 {
    a.cross(b)
}

/// Functional form of [`Vector3::cross`].
#[inline]
pub fn cross3(a: &Vector3, b: &Vector3) -> Vector3 {
    a.cross(b)
}

/// Functional form of [`Vector4::cross`].
#[inline]
pub fn cross4(a: &Vector4, b: &Vector4, c: &Vector4) -> Vector4 {
    a.cross(b, c)
}

/// Computes the mean of the given vectors.
///
/// # Errors
/// Returns [`MathError::EmptyCollection`] if `vectors` is empty.
pub fn average<T: LaneVector>(vectors: &[T]) -> Result<T, MathError> {
    if vectors.is_empty() {
        return Err(MathError::EmptyCollection);
    }
    let sum = vectors
        .iter()
        .fold(Vec4::ZERO, |sum, vector| sum + vector._lanes());
    Ok(T::_from_lanes(sum / vectors.len() as f32))
}
