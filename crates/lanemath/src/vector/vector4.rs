//! Four-dimensional vectors.

use crate::{
    error::MathError,
    matrix::Matrix4,
    text,
    vector::{Vector2, Vector3},
};
use bytemuck::{Pod, Zeroable};
use glam::Vec4;
use std::{fmt, str::FromStr};

/// A 4-dimensional vector, usable as a point in homogeneous coordinates.
///
/// The components fill a 128-bit SIMD register, which gives an alignment of
/// 16 bytes.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "Vector4Record", from = "Vector4Record")
)]
#[derive(Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Vector4 {
    inner: Vec4,
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct Vector4Record {
    x: f32,
    y: f32,
    z: f32,
    w: f32,
}

impl Vector4 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self::wrap(Vec4::new(x, y, z, w))
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::wrap(Vec4::ZERO)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f32) -> Self {
        Self::wrap(Vec4::splat(value))
    }

    /// The unit vector along the x-axis.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::wrap(Vec4::X)
    }

    /// The unit vector along the y-axis.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::wrap(Vec4::Y)
    }

    /// The unit vector along the z-axis.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::wrap(Vec4::Z)
    }

    /// The unit vector along the w-axis.
    #[inline]
    pub const fn unit_w() -> Self {
        Self::wrap(Vec4::W)
    }

    /// Loads a vector from a slice holding exactly four floats.
    pub fn from_slice(components: &[f32]) -> Result<Self, MathError> {
        match *components {
            [x, y, z, w] => Ok(Self::new(x, y, z, w)),
            _ => Err(MathError::ComponentCount {
                expected: 4,
                found: components.len(),
            }),
        }
    }

    /// Loads a vector from the native-endian bytes of four floats, without
    /// any value conversion.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MathError> {
        if bytes.len() != size_of::<[f32; 4]>() {
            return Err(MathError::ByteCount {
                expected: size_of::<[f32; 4]>(),
                found: bytes.len(),
            });
        }
        Ok(Self::from(bytemuck::pod_read_unaligned::<[f32; 4]>(bytes)))
    }

    /// The native-endian bytes of the four components.
    #[inline]
    pub fn to_bytes(&self) -> [u8; 16] {
        bytemuck::cast(self.inner.to_array())
    }

    /// Writes the components to the start of the given slice.
    pub fn write_to_slice(&self, destination: &mut [f32]) -> Result<(), MathError> {
        let found = destination.len();
        let Some(destination) = destination.get_mut(..4) else {
            return Err(MathError::ComponentCount { expected: 4, found });
        };
        self.inner.write_to_slice(destination);
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

    /// The w-component.
    #[inline]
    pub fn w(&self) -> f32 {
        self.inner.w
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

    /// A mutable reference to the w-component.
    #[inline]
    pub fn w_mut(&mut self) -> &mut f32 {
        &mut self.inner.w
    }

    /// The first three components.
    #[inline]
    pub fn xyz(&self) -> Vector3 {
        Vector3::wrap(self.inner)
    }

    /// The first two components.
    #[inline]
    pub fn xy(&self) -> Vector2 {
        Vector2::wrap(self.inner)
    }

    /// Computes the 4D cross product of this vector with two others, which
    /// is orthogonal to all three.
    pub fn cross(&self, second: &Self, third: &Self) -> Self {
        let [v1x, v1y, v1z, v1w] = self.inner.to_array();
        let [v2x, v2y, v2z, v2w] = second.inner.to_array();
        let [v3x, v3y, v3z, v3w] = third.inner.to_array();

        // 2x2 minors of the second and third vectors
        let zw = v2z * v3w - v2w * v3z;
        let yw = v2y * v3w - v2w * v3y;
        let yz = v2y * v3z - v2z * v3y;
        let xw = v2x * v3w - v2w * v3x;
        let xz = v2x * v3z - v2z * v3x;
        let xy = v2x * v3y - v2y * v3x;

        Self::new(
            zw * v1y - yw * v1z + yz * v1w,
            -(zw * v1x) + xw * v1z - xz * v1w,
            yw * v1x - xw * v1y + xy * v1w,
            -(yz * v1x) + xz * v1y - xy * v1z,
        )
    }

    /// Transforms the vector by the given matrix, including translation for
    /// a non-zero w-component.
    #[inline]
    pub fn transformed(&self, matrix: &Matrix4) -> Self {
        Self::wrap(matrix.unwrap().mul_vec4(self.inner))
    }

    /// Returns a vector with the given closure applied to each component.
    #[inline]
    pub fn mapped(&self, mut f: impl FnMut(f32) -> f32) -> Self {
        Self::new(f(self.x()), f(self.y()), f(self.z()), f(self.w()))
    }

    /// Returns the smallest component in the vector.
    #[inline]
    pub fn min_component(&self) -> f32 {
        self.inner.min_element()
    }

    /// Returns the largest component in the vector.
    #[inline]
    pub fn max_component(&self) -> f32 {
        self.inner.max_element()
    }

    #[inline]
    pub(crate) const fn wrap(inner: Vec4) -> Self {
        Self { inner }
    }

    #[inline]
    pub(crate) const fn unwrap(self) -> Vec4 {
        self.inner
    }
}

impl_lane_vector!(Vector4, 4);

impl From<Vector3> for Vector4 {
    /// Widens the vector with a zero w-component.
    #[inline]
    fn from(vector: Vector3) -> Self {
        vector.extended(0.0)
    }
}

impl From<Vector2> for Vector4 {
    /// Widens the vector with zero z- and w-components.
    #[inline]
    fn from(vector: Vector2) -> Self {
        Self::new(vector.x(), vector.y(), 0.0, 0.0)
    }
}

impl From<[f32; 4]> for Vector4 {
    #[inline]
    fn from(components: [f32; 4]) -> Self {
        Self::wrap(Vec4::from_array(components))
    }
}

impl From<Vector4> for [f32; 4] {
    #[inline]
    fn from(vector: Vector4) -> Self {
        vector.inner.to_array()
    }
}

#[cfg(feature = "serde")]
impl From<Vector4> for Vector4Record {
    fn from(vector: Vector4) -> Self {
        Self {
            x: vector.x(),
            y: vector.y(),
            z: vector.z(),
            w: vector.w(),
        }
    }
}

#[cfg(feature = "serde")]
impl From<Vector4Record> for Vector4 {
    fn from(Vector4Record { x, y, z, w }: Vector4Record) -> Self {
        Self::new(x, y, z, w)
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for Vector4 {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(Self::from(u.arbitrary::<[f32; 4]>()?))
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        <[f32; 4] as arbitrary::Arbitrary<'a>>::size_hint(depth)
    }
}

impl fmt::Debug for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector4")
            .field("x", &self.x())
            .field("y", &self.y())
            .field("z", &self.z())
            .field("w", &self.w())
            .finish()
    }
}

impl fmt::Display for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        text::write_components(f, &self.inner.to_array())
    }
}

impl FromStr for Vector4 {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        text::parse_components(s).map(Self::from)
    }
}
