//! Two-dimensional vectors.

use crate::{
    error::MathError,
    lanes,
    matrix::Matrix4,
    point::{IntPoint2, UIntPoint2},
    text,
    vector::Vector3,
};
use bytemuck::{Pod, Zeroable};
use glam::{Vec4, Vec4Swizzles};
use std::{fmt, str::FromStr};

/// A 2-dimensional vector.
///
/// The components occupy the two lowest lanes of a 128-bit SIMD register.
/// The two remaining lanes are kept at zero.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "Vector2Record", from = "Vector2Record")
)]
#[derive(Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Vector2 {
    inner: Vec4,
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct Vector2Record {
    x: f32,
    y: f32,
}

impl Vector2 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self {
            inner: Vec4::new(x, y, 0.0, 0.0),
        }
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Creates a new vector with the same value for both components.
    #[inline]
    pub const fn same(value: f32) -> Self {
        Self::new(value, value)
    }

    /// The unit vector along the x-axis.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0)
    }

    /// The unit vector along the y-axis.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Loads a vector from a slice holding exactly two floats.
    pub fn from_slice(components: &[f32]) -> Result<Self, MathError> {
        match *components {
            [x, y] => Ok(Self::new(x, y)),
            _ => Err(MathError::ComponentCount {
                expected: 2,
                found: components.len(),
            }),
        }
    }

    /// Loads a vector from the native-endian bytes of two floats, without any
    /// value conversion.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MathError> {
        if bytes.len() != size_of::<[f32; 2]>() {
            return Err(MathError::ByteCount {
                expected: size_of::<[f32; 2]>(),
                found: bytes.len(),
            });
        }
        Ok(Self::from(bytemuck::pod_read_unaligned::<[f32; 2]>(bytes)))
    }

    /// The native-endian bytes of the two components.
    #[inline]
    pub fn to_bytes(&self) -> [u8; 8] {
        bytemuck::cast(<[f32; 2]>::from(*self))
    }

    /// Writes the components to the start of the given slice.
    pub fn write_to_slice(&self, destination: &mut [f32]) -> Result<(), MathError> {
        let found = destination.len();
        let Some(destination) = destination.get_mut(..2) else {
            return Err(MathError::ComponentCount { expected: 2, found });
        };
        destination.copy_from_slice(&<[f32; 2]>::from(*self));
        Ok(())
    }

    /// The x-component.
    #[inline]
    pub fn x(&self) -> f32 {
        self.inner.x
    }

    /// The y-component.
    #[inline]
    pub fn y(&self) -> f32 {
        self.inner.y
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub fn x_mut(&mut self) -> &mut f32 {
        &mut self.inner.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub fn y_mut(&mut self) -> &mut f32 {
        &mut self.inner.y
    }

    /// Converts the vector to 3D by appending the given z-component.
    #[inline]
    pub fn extended(&self, z: f32) -> Vector3 {
        Vector3::new(self.x(), self.y(), z)
    }

    /// Computes the z-component of the cross product of the two vectors
    /// embedded in 3D with zero z-components.
    #[inline]
    pub fn cross(&self, other: &Self) -> f32 {
        self.inner.xy().perp_dot(other.inner.xy())
    }

    /// Transforms the vector as a direction by the given matrix, ignoring
    /// translation.
    #[inline]
    pub fn transformed_normal(&self, matrix: &Matrix4) -> Self {
        let transformed = matrix.unwrap().transform_vector3(self.inner.truncate());
        Self::new(transformed.x, transformed.y)
    }

    /// Returns a vector with the given closure applied to each component.
    #[inline]
    pub fn mapped(&self, mut f: impl FnMut(f32) -> f32) -> Self {
        Self::new(f(self.x()), f(self.y()))
    }

    /// Returns the smallest component in the vector.
    #[inline]
    pub fn min_component(&self) -> f32 {
        self.inner.xy().min_element()
    }

    /// Returns the largest component in the vector.
    #[inline]
    pub fn max_component(&self) -> f32 {
        self.inner.xy().max_element()
    }

    /// Converts to an integer point by truncating each component toward
    /// zero. Out-of-range values saturate.
    #[inline]
    pub fn to_int_point(&self) -> IntPoint2 {
        IntPoint2::wrap(self.inner.xy().as_ivec2())
    }

    /// Converts to an unsigned integer point by truncating each component
    /// toward zero. Negative values become zero and out-of-range values
    /// saturate.
    #[inline]
    pub fn to_uint_point(&self) -> UIntPoint2 {
        UIntPoint2::wrap(self.inner.xy().as_uvec2())
    }

    #[inline]
    pub(crate) fn wrap(inner: Vec4) -> Self {
        Self {
            inner: lanes::clear_unused_lanes(inner, 2),
        }
    }
}

impl_lane_vector!(Vector2, 2);

impl From<[f32; 2]> for Vector2 {
    #[inline]
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2> for [f32; 2] {
    #[inline]
    fn from(vector: Vector2) -> Self {
        [vector.x(), vector.y()]
    }
}

impl From<IntPoint2> for Vector2 {
    #[inline]
    fn from(point: IntPoint2) -> Self {
        let point = point.unwrap().as_vec2();
        Self::new(point.x, point.y)
    }
}

impl From<UIntPoint2> for Vector2 {
    #[inline]
    fn from(point: UIntPoint2) -> Self {
        let point = point.unwrap().as_vec2();
        Self::new(point.x, point.y)
    }
}

#[cfg(feature = "serde")]
impl From<Vector2> for Vector2Record {
    fn from(vector: Vector2) -> Self {
        Self {
            x: vector.x(),
            y: vector.y(),
        }
    }
}

#[cfg(feature = "serde")]
impl From<Vector2Record> for Vector2 {
    fn from(Vector2Record { x, y }: Vector2Record) -> Self {
        Self::new(x, y)
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for Vector2 {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(Self::new(u.arbitrary()?, u.arbitrary()?))
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        <[f32; 2] as arbitrary::Arbitrary<'a>>::size_hint(depth)
    }
}

impl fmt::Debug for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector2")
            .field("x", &self.x())
            .field("y", &self.y())
            .finish()
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        text::write_components(f, &<[f32; 2]>::from(*self))
    }
}

impl FromStr for Vector2 {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        text::parse_components(s).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use crate::consts::DEFAULT_NEAR_ZERO_EPSILON;
    use approx::assert_abs_diff_eq;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn computing_vector2_magnitude_works() {
        let v = Vector2::new(3.0, 4.0);
        assert_abs_diff_eq!(v.magnitude(), 5.0, epsilon = EPSILON);
        assert_abs_diff_eq!(v.magnitude_squared(), 25.0, epsilon = EPSILON);
        assert_abs_diff_eq!(v.magnitude_estimate(), 5.0, epsilon = 1e-2);
    }

    #[test]
    fn normalizing_vector2_gives_unit_vector() {
        let v = Vector2::new(3.0, 4.0);
        let normalized = v.normalized();
        assert_abs_diff_eq!(normalized.magnitude(), 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(normalized, Vector2::new(0.6, 0.8), epsilon = EPSILON);

        let mut v = v;
        v.normalize();
        assert_eq!(v, normalized);
    }

    #[test]
    fn normalizing_zero_vector2_gives_nan() {
        let normalized = Vector2::zeros().normalized();
        assert!(normalized.x().is_nan() && normalized.y().is_nan());
        assert!(normalized.is_invalid());
    }

    #[test]
    fn vector2_dot_product_works() {
        let v1 = Vector2::new(1.0, 2.0);
        let v2 = Vector2::new(3.0, 4.0);
        assert_abs_diff_eq!(v1.dot(&v2), 11.0, epsilon = EPSILON);
        assert_eq!(v1.dot(&v2), v2.dot(&v1));
    }

    #[test]
    fn vector2_cross_product_is_z_of_3d_cross_product() {
        let a = Vector2::new(2.0, 1.0);
        let b = Vector2::new(-1.0, 3.0);
        assert_abs_diff_eq!(a.cross(&b), 7.0, epsilon = EPSILON);
        assert_abs_diff_eq!(
            a.cross(&b),
            a.extended(0.0).cross(&b.extended(0.0)).z(),
            epsilon = EPSILON
        );
        assert_eq!(a.cross(&b), -b.cross(&a));
    }

    #[test]
    fn vector2_arithmetic_is_lane_wise() {
        let a = Vector2::new(1.0, -2.0);
        let b = Vector2::new(3.0, 4.0);
        assert_eq!(a + b, Vector2::new(4.0, 2.0));
        assert_eq!(a - b, Vector2::new(-2.0, -6.0));
        assert_eq!(a * b, Vector2::new(3.0, -8.0));
        assert_eq!(b / Vector2::new(2.0, 8.0), Vector2::new(1.5, 0.5));
        assert_eq!(a * 2.0, Vector2::new(2.0, -4.0));
        assert_eq!(2.0 * a, Vector2::new(2.0, -4.0));
        assert_eq!(a + 1.0, Vector2::new(2.0, -1.0));
        assert_eq!(a - 1.0, Vector2::new(0.0, -3.0));
        assert_eq!(b / 2.0, Vector2::new(1.5, 2.0));
        assert_eq!(-a, Vector2::new(-1.0, 2.0));
        assert_eq!(&a + &b, a + b);
    }

    #[test]
    fn vector2_compound_assignment_mutates_in_place() {
        let mut v = Vector2::new(1.0, 2.0);
        v += Vector2::new(1.0, 1.0);
        v *= 3.0;
        v -= 1.0;
        v /= Vector2::new(5.0, 4.0);
        assert_eq!(v, Vector2::new(1.0, 2.0));
    }

    #[test]
    fn dividing_vector2_by_zero_gives_invalid_vector() {
        let v = Vector2::new(1.0, 2.0) / 0.0;
        assert!(v.is_invalid());
    }

    #[test]
    fn vector2_with_infinite_lane_is_invalid() {
        assert!(Vector2::new(1.0, f32::INFINITY).is_invalid());
        assert!(Vector2::new(f32::NAN, 0.0).is_invalid());
        assert!(Vector2::new(1.0, 2.0).is_valid());
    }

    #[test]
    fn vector2_zero_tests_distinguish_exact_and_near_zero() {
        assert!(Vector2::zeros().is_zero());
        assert!(!Vector2::new(0.00001, 0.0).is_zero());
        assert!(Vector2::new(0.00001, 0.00001).is_zero_or_near_zero(DEFAULT_NEAR_ZERO_EPSILON));
        assert!(!Vector2::new(0.0001, 0.0).is_zero_or_near_zero(DEFAULT_NEAR_ZERO_EPSILON));
    }

    #[test]
    fn zeroing_near_zero_vector2_snaps_small_lanes() {
        let mut v = Vector2::new(0.00001, 3.0);
        v.zero_if_near_zero(DEFAULT_NEAR_ZERO_EPSILON);
        assert_eq!(v, Vector2::new(0.0, 3.0));
    }

    #[test]
    fn vector2_ordering_is_lane_wise() {
        assert!(Vector2::new(1.0, 5.0) < Vector2::new(2.0, 10.0));
        assert!(!(Vector2::new(1.0, 5.0) < Vector2::new(2.0, 3.0)));
        assert!(!(Vector2::new(1.0, 5.0) > Vector2::new(2.0, 3.0)));
        assert_eq!(
            Vector2::new(1.0, 5.0).partial_cmp(&Vector2::new(2.0, 3.0)),
            None
        );
        assert!(Vector2::new(2.0, 10.0) > Vector2::new(1.0, 5.0));
        assert!(Vector2::new(1.0, 5.0).all_le(&Vector2::new(1.0, 6.0)));
        assert!(!Vector2::new(1.0, 5.0).all_lt(&Vector2::new(1.0, 6.0)));
        assert!(Vector2::new(1.0, 6.0).all_ge(&Vector2::new(1.0, 5.0)));
        assert!(Vector2::new(1.0, 5.0) != Vector2::new(1.0, 6.0));
    }

    #[test]
    fn vector2_non_strict_operators_hold_when_every_lane_does() {
        let a = Vector2::new(1.0, 5.0);
        let b = Vector2::new(1.0, 6.0);
        assert!(a <= b);
        assert!(b >= a);
        assert!(!(a < b));
        assert!(!(b <= a));
        assert!(!(Vector2::new(1.0, 5.0) <= Vector2::new(2.0, 3.0)));
        assert_eq!(a.partial_cmp(&b), None);
    }

    #[test]
    fn projecting_vector2_onto_direction_works() {
        let v = Vector2::new(2.0, 3.0);
        assert_abs_diff_eq!(
            v.project_onto(&Vector2::new(5.0, 0.0)),
            Vector2::new(2.0, 0.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn projecting_vector2_onto_zero_vector_gives_zero() {
        let v = Vector2::new(2.0, 3.0);
        assert!(v.project_onto(&Vector2::zeros()).is_zero());
    }

    #[test]
    fn vector2_component_operations_work() {
        let v1 = Vector2::new(-1.0, 2.0);
        let v2 = Vector2::new(3.0, -4.0);
        assert_eq!(v1.absolute(), Vector2::new(1.0, 2.0));
        assert_eq!(v1.component_min(&v2), Vector2::new(-1.0, -4.0));
        assert_eq!(v1.component_max(&v2), Vector2::new(3.0, 2.0));
        assert_eq!(v1.min_component(), -1.0);
        assert_eq!(v2.max_component(), 3.0);
        assert_eq!(v1.sum_components(), 1.0);
        assert_eq!(v1.mapped(|c| c * 10.0), Vector2::new(-10.0, 20.0));
        assert_eq!(
            v1.multiply_add(&v2, &Vector2::same(1.0)),
            Vector2::new(-2.0, -7.0)
        );

        let mut v = v1;
        v.make_absolute();
        assert_eq!(v, Vector2::new(1.0, 2.0));
    }

    #[test]
    fn vector2_transform_normal_ignores_translation() {
        let matrix = Matrix4::from_translation(&Vector3::new(10.0, 20.0, 30.0))
            * Matrix4::from_scale(&Vector3::new(2.0, 3.0, 4.0));
        assert_abs_diff_eq!(
            Vector2::new(1.0, 1.0).transformed_normal(&matrix),
            Vector2::new(2.0, 3.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn vector2_indexing_reads_and_writes_components() {
        let mut v = Vector2::new(1.0, 2.0);
        v[1] = 5.0;
        *v.x_mut() = 4.0;
        assert_eq!(v[0], 4.0);
        assert_eq!(v.y(), 5.0);
    }

    #[test]
    #[should_panic]
    fn indexing_vector2_beyond_width_panics() {
        let v = Vector2::new(1.0, 2.0);
        let _lane = v[2];
    }

    #[test]
    fn vector2_loads_from_slices_and_bytes() {
        assert_eq!(
            Vector2::from_slice(&[1.0, 2.0]).unwrap(),
            Vector2::new(1.0, 2.0)
        );
        assert_eq!(
            Vector2::from_slice(&[1.0]),
            Err(MathError::ComponentCount {
                expected: 2,
                found: 1
            })
        );

        let v = Vector2::new(-1.25, 7.5);
        assert_eq!(Vector2::from_bytes(&v.to_bytes()).unwrap(), v);
        assert!(matches!(
            Vector2::from_bytes(&[0; 12]),
            Err(MathError::ByteCount {
                expected: 8,
                found: 12
            })
        ));

        let mut buffer = [0.0; 3];
        v.write_to_slice(&mut buffer).unwrap();
        assert_eq!(buffer, [-1.25, 7.5, 0.0]);
        assert!(v.write_to_slice(&mut [0.0; 1]).is_err());
    }

    #[test]
    fn vector2_converts_to_and_from_integer_points() {
        let v = Vector2::new(-2.7, 3.9);
        assert_eq!(v.to_int_point(), IntPoint2::new(-2, 3));
        assert_eq!(v.to_uint_point(), UIntPoint2::new(0, 3));
        assert_eq!(Vector2::from(IntPoint2::new(-4, 5)), Vector2::new(-4.0, 5.0));
        assert_eq!(Vector2::from(UIntPoint2::new(4, 5)), Vector2::new(4.0, 5.0));
    }

    #[test]
    fn vector2_text_form_uses_component_order() {
        let v = Vector2::new(1.5, -2.0);
        assert_eq!(v.to_string(), "1.5 -2");
        assert_eq!(v.to_string().parse::<Vector2>().unwrap(), v);
        assert_eq!("(1.5, -2)".parse::<Vector2>().unwrap(), v);
    }

    #[test]
    fn vector2_sums_over_iterators() {
        let vectors = [Vector2::new(1.0, 2.0), Vector2::new(3.0, 4.0)];
        assert_eq!(vectors.iter().sum::<Vector2>(), Vector2::new(4.0, 6.0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn vector2_serializes_as_named_components() {
        let v = Vector2::new(1.0, 2.0);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#"{"x":1.0,"y":2.0}"#);
        assert_eq!(serde_json::from_str::<Vector2>(&json).unwrap(), v);
    }
}
