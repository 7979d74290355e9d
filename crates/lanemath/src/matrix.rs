//! Matrices.

use crate::{
    quaternion::Quaternion,
    vector::{Vector3, Vector4},
};
use bytemuck::{Pod, Zeroable};
use glam::Mat4;

/// A 4x4 matrix with column-major storage.
///
/// Only the operations needed to transform vectors and to convert to and
/// from rotation quaternions are provided.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct Matrix4 {
    inner: Mat4,
}

impl Matrix4 {
    /// Creates the identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::wrap(Mat4::IDENTITY)
    }

    /// Creates a matrix with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::wrap(Mat4::ZERO)
    }

    /// Creates a matrix with the given columns.
    #[inline]
    pub const fn from_columns(
        column_1: Vector4,
        column_2: Vector4,
        column_3: Vector4,
        column_4: Vector4,
    ) -> Self {
        Self::wrap(Mat4::from_cols(
            column_1.unwrap(),
            column_2.unwrap(),
            column_3.unwrap(),
            column_4.unwrap(),
        ))
    }

    /// Creates a homogeneous transform that translates by the given
    /// displacement.
    #[inline]
    pub fn from_translation(translation: &Vector3) -> Self {
        Self::wrap(Mat4::from_translation(translation.unwrap()))
    }

    /// Creates a homogeneous transform that scales each axis by the
    /// corresponding component of `scaling`.
    #[inline]
    pub fn from_scale(scaling: &Vector3) -> Self {
        Self::wrap(Mat4::from_scale(scaling.unwrap()))
    }

    /// Creates a homogeneous transform that applies the given rotation.
    #[inline]
    pub fn from_rotation(rotation: &Quaternion) -> Self {
        Self::wrap(Mat4::from_quat(rotation.unwrap()))
    }

    /// The first column of the matrix.
    #[inline]
    pub fn column_1(&self) -> Vector4 {
        Vector4::wrap(self.inner.x_axis)
    }

    /// The second column of the matrix.
    #[inline]
    pub fn column_2(&self) -> Vector4 {
        Vector4::wrap(self.inner.y_axis)
    }

    /// The third column of the matrix.
    #[inline]
    pub fn column_3(&self) -> Vector4 {
        Vector4::wrap(self.inner.z_axis)
    }

    /// The fourth column of the matrix.
    #[inline]
    pub fn column_4(&self) -> Vector4 {
        Vector4::wrap(self.inner.w_axis)
    }

    /// Returns the element at row `i` and column `j`.
    ///
    /// # Panics
    /// If the indices are outside the matrix.
    #[inline]
    pub fn element(&self, i: usize, j: usize) -> f32 {
        self.inner.col(j)[i]
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub fn transposed(&self) -> Self {
        Self::wrap(self.inner.transpose())
    }

    /// Returns the inverse of this matrix. If the matrix is not invertible,
    /// the result will be non-finite.
    #[inline]
    pub fn inverted(&self) -> Self {
        Self::wrap(self.inner.inverse())
    }

    #[inline]
    pub(crate) const fn wrap(inner: Mat4) -> Self {
        Self { inner }
    }

    #[inline]
    pub(crate) const fn unwrap(&self) -> Mat4 {
        self.inner
    }
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl_binop!(Mul, mul, Matrix4, Matrix4, Matrix4, |a, b| {
    Matrix4::wrap(a.inner * b.inner)
});

impl_binop!(Mul, mul, Matrix4, Vector4, Vector4, |a, b| {
    b.transformed(a)
});

impl_binop_assign!(MulAssign, mul_assign, Matrix4, Matrix4, |a, b| {
    a.inner *= b.inner;
});

impl_abs_diff_eq!(Matrix4, |a, b, epsilon| {
    a.inner.abs_diff_eq(b.inner, epsilon)
});

impl_relative_eq!(Matrix4, |a, b, epsilon, max_relative| {
    ::approx::RelativeEq::relative_eq(&a.inner, &b.inner, epsilon, max_relative)
});
