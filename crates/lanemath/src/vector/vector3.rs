//! Three-dimensional vectors.

use crate::{
    error::MathError,
    lanes,
    matrix::Matrix4,
    point::IntPoint3,
    text,
    vector::{Vector2, Vector4},
};
use bytemuck::{Pod, Zeroable};
use glam::{Vec4, Vec4Swizzles};
use std::{fmt, str::FromStr};

/// A 3-dimensional vector.
///
/// The components occupy the three lowest lanes of a 128-bit SIMD register.
/// The fourth lane is kept at zero, which costs an extra 4 bytes compared to
/// three packed floats.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "Vector3Record", from = "Vector3Record")
)]
#[derive(Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Vector3 {
    inner: Vec4,
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct Vector3Record {
    x: f32,
    y: f32,
    z: f32,
}

impl Vector3 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            inner: Vec4::new(x, y, z, 0.0),
        }
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f32) -> Self {
        Self::new(value, value, value)
    }

    /// The unit vector along the x-axis.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// The unit vector along the y-axis.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// The unit vector along the z-axis.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Loads a vector from a slice holding exactly three floats.
    pub fn from_slice(components: &[f32]) -> Result<Self, MathError> {
        match *components {
            [x, y, z] => Ok(Self::new(x, y, z)),
            _ => Err(MathError::ComponentCount {
                expected: 3,
                found: components.len(),
            }),
        }
    }

    /// Loads a vector from the native-endian bytes of three floats, without
    /// any value conversion.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MathError> {
        if bytes.len() != size_of::<[f32; 3]>() {
            return Err(MathError::ByteCount {
                expected: size_of::<[f32; 3]>(),
                found: bytes.len(),
            });
        }
        Ok(Self::from(bytemuck::pod_read_unaligned::<[f32; 3]>(bytes)))
    }

    /// The native-endian bytes of the three components.
    #[inline]
    pub fn to_bytes(&self) -> [u8; 12] {
        bytemuck::cast(<[f32; 3]>::from(*self))
    }

    /// Writes the components to the start of the given slice.
    pub fn write_to_slice(&self, destination: &mut [f32]) -> Result<(), MathError> {
        let found = destination.len();
        let Some(destination) = destination.get_mut(..3) else {
            return Err(MathError::ComponentCount { expected: 3, found });
        };
        destination.copy_from_slice(&<[f32; 3]>::from(*self));
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

    /// The z-component.
    #[inline]
    pub fn z(&self) -> f32 {
        self.inner.z
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

    /// A mutable reference to the z-component.
    #[inline]
    pub fn z_mut(&mut self) -> &mut f32 {
        &mut self.inner.z
    }

    /// The projection onto the xy-plane.
    #[inline]
    pub fn xy(&self) -> Vector2 {
        Vector2::wrap(self.inner)
    }

    /// The projection onto the xz-plane, as a 2D vector (x, z).
    #[inline]
    pub fn xz(&self) -> Vector2 {
        Vector2::wrap(self.inner.xzyw())
    }

    /// The projection onto the yz-plane, as a 2D vector (y, z).
    #[inline]
    pub fn yz(&self) -> Vector2 {
        Vector2::wrap(self.inner.yzxw())
    }

    /// Converts the vector to 4D by appending the given w-component.
    #[inline]
    pub fn extended(&self, w: f32) -> Vector4 {
        Vector4::new(self.x(), self.y(), self.z(), w)
    }

    /// Computes the cross product of this vector with another, using the
    /// right-hand rule.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::wrap(self.inner.truncate().cross(other.inner.truncate()).extend(0.0))
    }

    /// Transforms the vector as a direction by the given matrix, ignoring
    /// translation.
    #[inline]
    pub fn transformed_normal(&self, matrix: &Matrix4) -> Self {
        Self::wrap(
            matrix
                .unwrap()
                .transform_vector3(self.inner.truncate())
                .extend(0.0),
        )
    }

    /// Returns a vector with the given closure applied to each component.
    #[inline]
    pub fn mapped(&self, mut f: impl FnMut(f32) -> f32) -> Self {
        Self::new(f(self.x()), f(self.y()), f(self.z()))
    }

    /// Returns the smallest component in the vector.
    #[inline]
    pub fn min_component(&self) -> f32 {
        self.inner.truncate().min_element()
    }

    /// Returns the largest component in the vector.
    #[inline]
    pub fn max_component(&self) -> f32 {
        self.inner.truncate().max_element()
    }

    /// Converts to an integer point by truncating each component toward
    /// zero. Out-of-range values saturate.
    #[inline]
    pub fn to_int_point(&self) -> IntPoint3 {
        IntPoint3::wrap(self.inner.truncate().as_ivec3())
    }

    #[inline]
    pub(crate) fn wrap(inner: Vec4) -> Self {
        Self {
            inner: lanes::clear_unused_lanes(inner, 3),
        }
    }

    #[inline]
    pub(crate) fn unwrap(self) -> glam::Vec3 {
        self.inner.truncate()
    }
}

impl_lane_vector!(Vector3, 3);

impl From<Vector2> for Vector3 {
    /// Widens the vector with a zero z-component.
    #[inline]
    fn from(vector: Vector2) -> Self {
        vector.extended(0.0)
    }
}

impl From<[f32; 3]> for Vector3 {
    #[inline]
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [f32; 3] {
    #[inline]
    fn from(vector: Vector3) -> Self {
        [vector.x(), vector.y(), vector.z()]
    }
}

impl From<IntPoint3> for Vector3 {
    #[inline]
    fn from(point: IntPoint3) -> Self {
        Self::wrap(point.unwrap().as_vec3().extend(0.0))
    }
}

#[cfg(feature = "serde")]
impl From<Vector3> for Vector3Record {
    fn from(vector: Vector3) -> Self {
        Self {
            x: vector.x(),
            y: vector.y(),
            z: vector.z(),
        }
    }
}

#[cfg(feature = "serde")]
impl From<Vector3Record> for Vector3 {
    fn from(Vector3Record { x, y, z }: Vector3Record) -> Self {
        Self::new(x, y, z)
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for Vector3 {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(Self::new(u.arbitrary()?, u.arbitrary()?, u.arbitrary()?))
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        <[f32; 3] as arbitrary::Arbitrary<'a>>::size_hint(depth)
    }
}

impl fmt::Debug for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector3")
            .field("x", &self.x())
            .field("y", &self.y())
            .field("z", &self.z())
            .finish()
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        text::write_components(f, &<[f32; 3]>::from(*self))
    }
}

impl FromStr for Vector3 {
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
    use proptest::prelude::*;

    const EPSILON: f32 = 1e-6;

    prop_compose! {
        fn vector3_strategy(max_component: f32)(
            x in -max_component..max_component,
            y in -max_component..max_component,
            z in -max_component..max_component,
        ) -> Vector3 {
            Vector3::new(x, y, z)
        }
    }

    #[test]
    fn computing_vector3_magnitude_works() {
        let v = Vector3::new(2.0, 3.0, 6.0);
        assert_abs_diff_eq!(v.magnitude(), 7.0, epsilon = EPSILON);
        assert_abs_diff_eq!(v.magnitude_squared(), 49.0, epsilon = EPSILON);
        assert_abs_diff_eq!(v.magnitude_estimate(), 7.0, epsilon = 2e-2);
    }

    #[test]
    fn normalizing_huge_and_tiny_vector3_gives_unit_vector() {
        let huge = Vector3::new(1e20, 0.0, 0.0);
        assert_abs_diff_eq!(huge.normalized(), Vector3::unit_x(), epsilon = EPSILON);
        assert_abs_diff_eq!(
            Vector3::new(3.0, 4.0, 0.0).project_onto(&huge),
            Vector3::new(3.0, 0.0, 0.0),
            epsilon = EPSILON
        );

        let tiny = Vector3::new(0.0, -1e-25, 0.0);
        assert_abs_diff_eq!(tiny.normalized(), -Vector3::unit_y(), epsilon = EPSILON);

        let mixed = Vector3::new(3e30, 4e30, 0.0);
        assert_abs_diff_eq!(mixed.normalized(), Vector3::new(0.6, 0.8, 0.0), epsilon = EPSILON);
        assert!(mixed.normalized().is_valid());
    }

    #[test]
    fn normalizing_zero_vector3_gives_nan() {
        let normalized = Vector3::zeros().normalized();
        assert!(normalized.x().is_nan() && normalized.y().is_nan() && normalized.z().is_nan());
    }

    #[test]
    fn vector3_cross_product_is_right_handed() {
        assert_abs_diff_eq!(
            Vector3::unit_x().cross(&Vector3::unit_y()),
            Vector3::unit_z(),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            Vector3::unit_y().cross(&Vector3::unit_z()),
            Vector3::unit_x(),
            epsilon = EPSILON
        );
    }

    #[test]
    fn vector3_cross_product_is_orthogonal_to_inputs() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(-2.0, 0.5, 4.0);
        let c = a.cross(&b);
        assert_abs_diff_eq!(c.dot(&a), 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(c.dot(&b), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn vector3_plane_slices_pick_components() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.xy(), Vector2::new(1.0, 2.0));
        assert_eq!(v.xz(), Vector2::new(1.0, 3.0));
        assert_eq!(v.yz(), Vector2::new(2.0, 3.0));
    }

    #[test]
    fn widening_vector2_to_vector3_zero_fills() {
        assert_eq!(
            Vector3::from(Vector2::new(1.0, 2.0)),
            Vector3::new(1.0, 2.0, 0.0)
        );
        assert_eq!(
            Vector2::new(1.0, 2.0).extended(5.0),
            Vector3::new(1.0, 2.0, 5.0)
        );
    }

    #[test]
    fn vector3_validity_checks_nan_and_infinity() {
        assert!(Vector3::new(1.0, 2.0, 3.0).is_valid());
        assert!(Vector3::new(1.0, 2.0, f32::NEG_INFINITY).is_invalid());
        assert!(Vector3::new(f32::NAN, 2.0, 3.0).is_invalid());
    }

    #[test]
    fn vector3_zero_tests_consider_all_three_lanes() {
        assert!(!Vector3::new(0.0, 0.0, 1.0).is_zero());
        assert!(!Vector3::new(0.0, 0.0, 0.001).is_zero_or_near_zero(DEFAULT_NEAR_ZERO_EPSILON));
        assert!(Vector3::new(1e-5, -1e-5, 4e-5).is_zero_or_near_zero(DEFAULT_NEAR_ZERO_EPSILON));
        assert_eq!(
            Vector3::new(1e-5, 2.0, -3e-5).zeroed_if_near_zero(DEFAULT_NEAR_ZERO_EPSILON),
            Vector3::new(0.0, 2.0, 0.0)
        );
    }

    #[test]
    fn vector3_ordering_is_lane_wise() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        assert!(a < Vector3::new(2.0, 3.0, 4.0));
        assert!(!(a < Vector3::new(2.0, 3.0, 3.0)));
        assert!(a.all_le(&Vector3::new(2.0, 3.0, 3.0)));
        assert!(a > Vector3::new(0.0, 1.0, 2.0));
        assert!(a <= a);
        assert!(a <= Vector3::new(2.0, 3.0, 3.0));
        assert!(Vector3::new(2.0, 3.0, 3.0) >= a);
        assert!(!(a >= Vector3::new(2.0, 3.0, 3.0)));
    }

    #[test]
    fn projecting_vector3_onto_direction_works() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_abs_diff_eq!(
            v.project_onto(&Vector3::new(0.0, 0.0, -2.0)),
            Vector3::new(0.0, 0.0, 3.0),
            epsilon = EPSILON
        );
        assert!(v.project_onto(&Vector3::zeros()).is_zero());
    }

    #[test]
    fn vector3_transform_normal_applies_linear_part() {
        let matrix = Matrix4::from_translation(&Vector3::new(5.0, 5.0, 5.0))
            * Matrix4::from_scale(&Vector3::new(2.0, 3.0, 4.0));
        assert_abs_diff_eq!(
            Vector3::new(1.0, 1.0, 1.0).transformed_normal(&matrix),
            Vector3::new(2.0, 3.0, 4.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn vector3_component_operations_work() {
        let v = Vector3::new(-1.0, 4.0, 2.0);
        assert_eq!(v.min_component(), -1.0);
        assert_eq!(v.max_component(), 4.0);
        assert_eq!(v.sum_components(), 5.0);
        assert_eq!(v.absolute(), Vector3::new(1.0, 4.0, 2.0));
        assert_eq!(v.mapped(|c| c + 1.0), Vector3::new(0.0, 5.0, 3.0));
    }

    #[test]
    fn negative_vector3_min_component_ignores_padding_lane() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.min_component(), 1.0);
        let v = Vector3::new(-1.0, -2.0, -3.0);
        assert_eq!(v.max_component(), -1.0);
    }

    #[test]
    fn vector3_loads_from_slices_and_bytes() {
        let v = Vector3::new(1.0, -2.0, 3.5);
        assert_eq!(Vector3::from_slice(&[1.0, -2.0, 3.5]).unwrap(), v);
        assert!(Vector3::from_slice(&[1.0, 2.0, 3.0, 4.0]).is_err());
        assert_eq!(Vector3::from_bytes(&v.to_bytes()).unwrap(), v);
        assert_eq!(v.to_bytes().len(), 12);
    }

    #[test]
    fn vector3_converts_to_and_from_integer_points() {
        let v = Vector3::new(-1.5, 2.9, 100.1);
        assert_eq!(v.to_int_point(), IntPoint3::new(-1, 2, 100));
        assert_eq!(
            Vector3::from(IntPoint3::new(-1, 2, 3)),
            Vector3::new(-1.0, 2.0, 3.0)
        );
    }

    #[test]
    fn vector3_text_form_round_trips() {
        let v = Vector3::new(0.25, -8.0, 3.0);
        assert_eq!(v.to_string(), "0.25 -8 3");
        assert_eq!(v.to_string().parse::<Vector3>().unwrap(), v);
        assert!("1 2".parse::<Vector3>().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn vector3_serializes_as_named_components() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#"{"x":1.0,"y":2.0,"z":3.0}"#);
        assert_eq!(serde_json::from_str::<Vector3>(&json).unwrap(), v);
    }

    proptest! {
        #[test]
        fn normalized_vector3_has_unit_magnitude(
            v in vector3_strategy(1.0),
            exponent in -37_i32..=37,
        ) {
            prop_assume!(!v.is_zero());
            let v = v * 10_f32.powi(exponent);
            prop_assume!(!v.is_zero());
            prop_assert!((v.normalized().magnitude() - 1.0).abs() < 1e-5);
        }
    }

    proptest! {
        #[test]
        fn vector3_cross_product_is_anticommutative(
            a in vector3_strategy(1e2),
            b in vector3_strategy(1e2),
        ) {
            prop_assert_eq!(a.cross(&b), -b.cross(&a));
        }
    }

    proptest! {
        #[test]
        fn vector3_dot_product_is_commutative(
            a in vector3_strategy(1e2),
            b in vector3_strategy(1e2),
        ) {
            prop_assert_eq!(a.dot(&b), b.dot(&a));
        }
    }
}
