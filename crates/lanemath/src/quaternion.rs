//! Quaternions.

use crate::{
    consts::NO_ROTATION_THRESHOLD,
    error::MathError,
    matrix::Matrix4,
    text,
    vector::{Vector2, Vector3, Vector4},
};
use bytemuck::{Pod, Zeroable};
use glam::{EulerRot, Quat, Vec4};
use std::{
    f32::consts::{PI, TAU},
    fmt,
    str::FromStr,
};

/// Rotation deltas whose vector part is shorter than this are treated as no
/// rotation when estimating angular velocity.
const MIN_SIN_HALF_ANGLE: f32 = 1e-6;

/// A rotation in 3D space.
///
/// The lanes hold (x, y, z, w) = (axis * sin(θ/2), cos(θ/2)) for a rotation
/// of angle θ about a unit axis, in the same 16-byte aligned four-lane
/// layout as [`Vector4`]. Construction and composition keep the magnitude
/// close to one. Direct lane mutation does not, and callers doing it must
/// renormalize with [`normalize`](Self::normalize).
///
/// Rotations follow the right-hand rule, and `q2 * q1` applies `q1` first.
///
/// There is deliberately no conversion from a quaternion to a scalar:
///
/// ```compile_fail
/// use lanemath::Quaternion;
///
/// let angle: f32 = Quaternion::identity().into();
/// ```
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "QuaternionRecord", from = "QuaternionRecord")
)]
#[derive(Clone, Copy, PartialEq, Zeroable, Pod)]
pub struct Quaternion {
    inner: Quat,
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct QuaternionRecord {
    x: f32,
    y: f32,
    z: f32,
    w: f32,
}

impl Quaternion {
    /// Creates a quaternion with the given lanes, without normalizing.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self::wrap(Quat::from_xyzw(x, y, z, w))
    }

    /// The quaternion representing no rotation.
    #[inline]
    pub const fn identity() -> Self {
        Self::wrap(Quat::IDENTITY)
    }

    /// Creates a quaternion from its scalar part `w` and vector part `xyz`,
    /// without normalizing.
    #[inline]
    pub fn from_parts(w: f32, xyz: &Vector3) -> Self {
        Self::new(xyz.x(), xyz.y(), xyz.z(), w)
    }

    /// Creates the rotation by `angle` radians about `axis`. The axis is
    /// normalized first, so a zero axis gives an invalid quaternion.
    #[inline]
    pub fn from_axis_angle(axis: &Vector3, angle: f32) -> Self {
        Self::wrap(Quat::from_axis_angle(axis.unwrap().normalize(), angle))
    }

    /// Creates a zero-angle rotation about `axis`, which is the identity for
    /// any non-zero axis.
    #[inline]
    pub fn from_axis(axis: &Vector3) -> Self {
        Self::from_axis_angle(axis, 0.0)
    }

    /// Creates the rotation that first rolls about the z-axis, then pitches
    /// about the x-axis and finally yaws about the y-axis. Angles are in
    /// radians.
    #[inline]
    pub fn from_pitch_yaw_roll(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self::wrap(Quat::from_euler(EulerRot::YXZ, yaw, pitch, roll))
    }

    /// Like [`from_pitch_yaw_roll`](Self::from_pitch_yaw_roll), with the
    /// angles given as (pitch, yaw, roll) in the x, y and z components.
    #[inline]
    pub fn from_euler_angles(pitch_yaw_roll: &Vector3) -> Self {
        Self::from_pitch_yaw_roll(pitch_yaw_roll.x(), pitch_yaw_roll.y(), pitch_yaw_roll.z())
    }

    /// Extracts the rotation from the upper left 3x3 part of the given
    /// matrix, which must be a pure rotation.
    #[inline]
    pub fn from_rotation_matrix(matrix: &Matrix4) -> Self {
        Self::wrap(Quat::from_mat4(&matrix.unwrap()))
    }

    /// Creates the shortest rotation that turns the direction of `from` into
    /// the direction of `to`.
    ///
    /// The rotation is built from the half-angle form, which stays accurate
    /// for nearly parallel directions. Opposite directions give a half turn
    /// about some axis orthogonal to `from`. Zero input vectors give an
    /// invalid quaternion.
    #[inline]
    pub fn from_rotation_between(from: &Vector3, to: &Vector3) -> Self {
        Self::wrap(Quat::from_rotation_arc(
            from.unwrap().normalize(),
            to.unwrap().normalize(),
        ))
    }

    /// The x-lane of the vector part.
    #[inline]
    pub fn x(&self) -> f32 {
        self.inner.x
    }

    /// The y-lane of the vector part.
    #[inline]
    pub fn y(&self) -> f32 {
        self.inner.y
    }

    /// The z-lane of the vector part.
    #[inline]
    pub fn z(&self) -> f32 {
        self.inner.z
    }

    /// The scalar part.
    #[inline]
    pub fn w(&self) -> f32 {
        self.inner.w
    }

    #[inline]
    pub fn x_mut(&mut self) -> &mut f32 {
        &mut self.inner.x
    }

    #[inline]
    pub fn y_mut(&mut self) -> &mut f32 {
        &mut self.inner.y
    }

    #[inline]
    pub fn z_mut(&mut self) -> &mut f32 {
        &mut self.inner.z
    }

    #[inline]
    pub fn w_mut(&mut self) -> &mut f32 {
        &mut self.inner.w
    }

    /// The vector part (x, y, z).
    #[inline]
    pub fn xyz(&self) -> Vector3 {
        Vector3::wrap(Vec4::from(self.inner))
    }

    /// The signed full rotation angle in radians, in [-π, π].
    ///
    /// This is the whole angle turned about the axis, not the half angle
    /// stored in the quaternion: `atan2(|xyz|, w)` gives the half angle,
    /// which is doubled and folded into range. A quaternion in the
    /// negative-w hemisphere therefore reports a negative angle.
    #[inline]
    pub fn angle_euler(&self) -> f32 {
        let angle = 2.0 * self.inner.xyz().length().atan2(self.inner.w);
        if angle > PI { angle - TAU } else { angle }
    }

    /// The unsigned rotation angle in radians, in [0, π], computed as
    /// `2 * acos(|w|)`.
    #[inline]
    pub fn angle_quaternion(&self) -> f32 {
        2.0 * self.inner.w.abs().min(1.0).acos()
    }

    /// The unit rotation axis matching
    /// [`angle_quaternion`](Self::angle_quaternion), obtained by normalizing
    /// the vector part and flipping it for a negative `w`.
    ///
    /// Without rotation the axis is undefined and the result has NaN lanes.
    #[inline]
    pub fn axis(&self) -> Vector3 {
        let mut axis = self.inner.xyz().normalize();
        if self.inner.w < 0.0 {
            axis = -axis;
        }
        Vector3::wrap(axis.extend(0.0))
    }

    /// Replaces the rotation axis, keeping the unsigned angle.
    #[inline]
    pub fn set_axis(&mut self, axis: &Vector3) {
        *self = Self::from_axis_angle(axis, self.angle_quaternion());
    }

    /// Replaces the rotation angle, keeping the axis. A quaternion without
    /// rotation has no axis and becomes invalid.
    #[inline]
    pub fn set_angle(&mut self, angle: f32) {
        *self = Self::from_axis_angle(&self.axis(), angle);
    }

    /// Replaces both the axis and the angle.
    #[inline]
    pub fn set_axis_angle(&mut self, axis: &Vector3, angle: f32) {
        *self = Self::from_axis_angle(axis, angle);
    }

    /// Replaces the rotation with the one given by the Euler angles (pitch,
    /// yaw, roll).
    #[inline]
    pub fn set_euler_angles(&mut self, pitch_yaw_roll: &Vector3) {
        *self = Self::from_euler_angles(pitch_yaw_roll);
    }

    /// Decomposes the rotation into (pitch, yaw, roll) in the convention of
    /// [`from_pitch_yaw_roll`](Self::from_pitch_yaw_roll). The pitch is in
    /// [-π/2, π/2].
    #[inline]
    pub fn euler_angles(&self) -> Vector3 {
        let (yaw, pitch, roll) = self.inner.to_euler(EulerRot::YXZ);
        Vector3::new(pitch, yaw, roll)
    }

    /// Estimates the angular velocity (axis times angular speed) that turns
    /// `previous` into this rotation over `delta_time`, following the
    /// shortest path.
    pub fn angular_velocity(&self, previous: &Self, delta_time: f32) -> Vector3 {
        let mut delta = self.inner * previous.inverse().inner;
        if delta.w < 0.0 {
            delta = -delta;
        }

        let sin_half_angle = delta.xyz().length();
        if sin_half_angle < MIN_SIN_HALF_ANGLE {
            return Vector3::zeros();
        }

        let angle = 2.0 * sin_half_angle.atan2(delta.w);
        let axis = delta.xyz() / sin_half_angle;
        Vector3::wrap((axis * (angle / delta_time)).extend(0.0))
    }

    /// Computes the conjugate, which negates the vector part. Equals the
    /// inverse only for a unit quaternion.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::wrap(self.inner.conjugate())
    }

    /// Computes the rotation that undoes this one. This is the conjugate
    /// divided by the squared magnitude, so it stays exact when the
    /// magnitude has drifted away from one.
    #[inline]
    pub fn inverse(&self) -> Self {
        Self::wrap(Quat::from_vec4(
            Vec4::from(self.inner.conjugate()) / self.inner.length_squared(),
        ))
    }

    /// The magnitude of the four lanes.
    #[inline]
    pub fn magnitude(&self) -> f32 {
        self.inner.length()
    }

    /// Returns the quaternion scaled to unit magnitude.
    #[inline]
    pub fn normalized(&self) -> Self {
        Self::wrap(self.inner.normalize())
    }

    /// Scales the quaternion to unit magnitude in place.
    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Whether no lane is NaN or infinite.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.inner.is_finite()
    }

    /// Whether any lane is NaN or infinite.
    #[inline]
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Whether the quaternion rotates at all, meaning that `|w|` is below
    /// [`NO_ROTATION_THRESHOLD`].
    #[inline]
    pub fn has_rotation(&self) -> bool {
        self.inner.w.abs() < NO_ROTATION_THRESHOLD
    }

    /// Resets the quaternion to the identity if any lane is NaN.
    pub fn validate(&mut self) {
        if self.inner.is_nan() {
            log::warn!("Resetting NaN-contaminated quaternion {self:?} to identity");
            *self = Self::identity();
        }
    }

    /// Returns this quaternion, or the identity if any lane is NaN.
    #[inline]
    pub fn validated(mut self) -> Self {
        self.validate();
        self
    }

    /// Rotates the given vector.
    #[inline]
    pub fn rotate_vector(&self, vector: &Vector3) -> Vector3 {
        Vector3::wrap(self.inner.mul_vec3(vector.unwrap()).extend(0.0))
    }

    /// Rotates the given vector by the inverse of this rotation.
    #[inline]
    pub fn inverse_rotate_vector(&self, vector: &Vector3) -> Vector3 {
        self.inverse().rotate_vector(vector)
    }

    /// Converts the rotation to a homogeneous 4x4 matrix.
    #[inline]
    pub fn to_rotation_matrix(&self) -> Matrix4 {
        Matrix4::from_rotation(self)
    }

    #[inline]
    pub(crate) const fn wrap(inner: Quat) -> Self {
        Self { inner }
    }

    #[inline]
    pub(crate) const fn unwrap(self) -> Quat {
        self.inner
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl_binop!(Mul, mul, Quaternion, Quaternion, Quaternion, |a, b| {
    Quaternion::wrap(a.inner * b.inner)
});

impl_binop!(Add, add, Quaternion, Quaternion, Quaternion, |a, b| { a * b });

impl_binop!(Div, div, Quaternion, Quaternion, Quaternion, |a, b| {
    a * b.inverse()
});

impl_binop!(Sub, sub, Quaternion, Quaternion, Quaternion, |a, b| {
    a * b.inverse()
});

impl_binop!(Mul, mul, Quaternion, f32, Quaternion, |a, b| {
    let canonical = if a.w() < 0.0 { -a } else { *a };
    if !canonical.has_rotation() {
        return *a;
    }
    Quaternion::from_axis_angle(&canonical.axis(), canonical.angle_quaternion() * *b)
});

impl_binop!(Mul, mul, Quaternion, Vector3, Vector3, |a, b| {
    a.rotate_vector(b)
});

impl_binop!(Mul, mul, Quaternion, Vector2, Vector2, |a, b| {
    a.rotate_vector(&Vector3::from(*b)).xy()
});

impl_binop_assign!(MulAssign, mul_assign, Quaternion, Quaternion, |a, b| {
    *a = &*a * b;
});

impl_binop_assign!(AddAssign, add_assign, Quaternion, Quaternion, |a, b| {
    *a = &*a * b;
});

impl_binop_assign!(DivAssign, div_assign, Quaternion, Quaternion, |a, b| {
    *a = &*a / b;
});

impl_binop_assign!(SubAssign, sub_assign, Quaternion, Quaternion, |a, b| {
    *a = &*a / b;
});

impl_binop_assign!(MulAssign, mul_assign, Quaternion, f32, |a, b| {
    *a = &*a * b;
});

impl_unary_op!(Neg, neg, Quaternion, Quaternion, |val| {
    Quaternion::wrap(-val.inner)
});

impl_abs_diff_eq!(Quaternion, |a, b, epsilon| {
    a.inner.abs_diff_eq(b.inner, epsilon)
});

impl_relative_eq!(Quaternion, |a, b, epsilon, max_relative| {
    ::approx::RelativeEq::relative_eq(&a.inner, &b.inner, epsilon, max_relative)
});

impl From<Vector4> for Quaternion {
    /// Reinterprets the (x, y, z, w) lanes as a quaternion.
    #[inline]
    fn from(vector: Vector4) -> Self {
        Self::wrap(Quat::from_vec4(vector.unwrap()))
    }
}

impl From<Quaternion> for Vector4 {
    #[inline]
    fn from(quaternion: Quaternion) -> Self {
        Vector4::wrap(Vec4::from(quaternion.inner))
    }
}

impl From<[f32; 4]> for Quaternion {
    /// Lanes in (x, y, z, w) order.
    #[inline]
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<Quaternion> for [f32; 4] {
    #[inline]
    fn from(quaternion: Quaternion) -> Self {
        quaternion.inner.to_array()
    }
}

#[cfg(feature = "serde")]
impl From<Quaternion> for QuaternionRecord {
    fn from(quaternion: Quaternion) -> Self {
        Self {
            x: quaternion.x(),
            y: quaternion.y(),
            z: quaternion.z(),
            w: quaternion.w(),
        }
    }
}

#[cfg(feature = "serde")]
impl From<QuaternionRecord> for Quaternion {
    fn from(QuaternionRecord { x, y, z, w }: QuaternionRecord) -> Self {
        Self::new(x, y, z, w)
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for Quaternion {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let axis = Vector3::new(u.arbitrary()?, u.arbitrary()?, u.arbitrary()?);
        let angle: f32 = u.arbitrary()?;
        Ok(Self::from_axis_angle(&axis, angle).validated())
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        <[f32; 4] as arbitrary::Arbitrary<'a>>::size_hint(depth)
    }
}

impl fmt::Debug for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quaternion")
            .field("x", &self.x())
            .field("y", &self.y())
            .field("z", &self.z())
            .field("w", &self.w())
            .finish()
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        text::write_components(f, &self.inner.to_array())
    }
}

impl FromStr for Quaternion {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        text::parse_components(s).map(Self::from)
    }
}
