//! Utility macros.

macro_rules! impl_binop {
    ($op:ident, $method:ident, $tl:ty, $tr:ty, $to:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl<'a> ::std::ops::$op<&'a $tr> for &'a $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl ::std::ops::$op<$tr> for &$tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                self.$method(&rhs)
            }
        }

        impl<'a> ::std::ops::$op<&'a $tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                (&self).$method(rhs)
            }
        }

        impl ::std::ops::$op<$tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                (&self).$method(&rhs)
            }
        }
    };
}

macro_rules! impl_unary_op {
    ($op:ident, $method:ident, $t:ty, $to:ty, |$this:ident| $body:block) => {
        impl ::std::ops::$op for &$t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                let $this = self;
                $body
            }
        }

        impl ::std::ops::$op for $t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                (&self).$method()
            }
        }
    };
}

macro_rules! impl_binop_assign {
    ($op:ident, $method:ident, $tl:ty, $tr:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl ::std::ops::$op<&$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: &$tr) {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl ::std::ops::$op<$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: $tr) {
                self.$method(&rhs);
            }
        }
    };
}

macro_rules! impl_abs_diff_eq {
    ($t:ty, |$arg1:ident, $arg2:ident, $arg3:ident| $body:block) => {
        impl ::approx::AbsDiffEq for $t {
            type Epsilon = f32;

            fn default_epsilon() -> Self::Epsilon {
                <f32 as ::approx::AbsDiffEq>::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                let $arg1 = self;
                let $arg2 = other;
                let $arg3 = epsilon;
                $body
            }
        }
    };
}

macro_rules! impl_relative_eq {
    ($t:ty, |$arg1:ident, $arg2:ident, $arg3:ident, $arg4:ident| $body:block) => {
        impl ::approx::RelativeEq for $t {
            fn default_max_relative() -> Self::Epsilon {
                <f32 as ::approx::RelativeEq>::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                let $arg1 = self;
                let $arg2 = other;
                let $arg3 = epsilon;
                let $arg4 = max_relative;
                $body
            }
        }
    };
}

/// Implements the lane-wise behavior shared by every vector width: storage
/// access for [`LaneVector`](crate::lanes::LaneVector), per-lane arithmetic
/// with vectors and broadcast scalars, per-lane ordering, indexing, summing
/// and approximate equality.
///
/// The type must have an `inner: glam::Vec4` field and a `wrap` constructor
/// that clears the lanes beyond the logical width.
macro_rules! impl_lane_vector {
    ($t:ident, $width:literal) => {
        impl $crate::lanes::sealed::Sealed for $t {}

        impl $crate::lanes::LaneVector for $t {
            const WIDTH: usize = $width;

            #[inline]
            fn _lanes(&self) -> ::glam::Vec4 {
                self.inner
            }

            #[inline]
            fn _from_lanes(lanes: ::glam::Vec4) -> Self {
                $t::wrap(lanes)
            }
        }

        impl_binop!(Add, add, $t, $t, $t, |a, b| { $t::wrap(a.inner + b.inner) });

        impl_binop!(Sub, sub, $t, $t, $t, |a, b| { $t::wrap(a.inner - b.inner) });

        impl_binop!(Mul, mul, $t, $t, $t, |a, b| { $t::wrap(a.inner * b.inner) });

        impl_binop!(Div, div, $t, $t, $t, |a, b| { $t::wrap(a.inner / b.inner) });

        impl_binop!(Add, add, $t, f32, $t, |a, b| {
            $t::wrap(a.inner + ::glam::Vec4::splat(*b))
        });

        impl_binop!(Sub, sub, $t, f32, $t, |a, b| {
            $t::wrap(a.inner - ::glam::Vec4::splat(*b))
        });

        impl_binop!(Mul, mul, $t, f32, $t, |a, b| { $t::wrap(a.inner * *b) });

        impl_binop!(Mul, mul, f32, $t, $t, |a, b| {
            ::std::ops::Mul::mul(b, *a)
        });

        impl_binop!(Div, div, $t, f32, $t, |a, b| { $t::wrap(a.inner / *b) });

        impl_binop_assign!(AddAssign, add_assign, $t, $t, |a, b| {
            *a = &*a + b;
        });

        impl_binop_assign!(SubAssign, sub_assign, $t, $t, |a, b| {
            *a = &*a - b;
        });

        impl_binop_assign!(MulAssign, mul_assign, $t, $t, |a, b| {
            *a = &*a * b;
        });

        impl_binop_assign!(DivAssign, div_assign, $t, $t, |a, b| {
            *a = &*a / b;
        });

        impl_binop_assign!(AddAssign, add_assign, $t, f32, |a, b| {
            *a = &*a + b;
        });

        impl_binop_assign!(SubAssign, sub_assign, $t, f32, |a, b| {
            *a = &*a - b;
        });

        impl_binop_assign!(MulAssign, mul_assign, $t, f32, |a, b| {
            *a = &*a * b;
        });

        impl_binop_assign!(DivAssign, div_assign, $t, f32, |a, b| {
            *a = &*a / b;
        });

        impl_unary_op!(Neg, neg, $t, $t, |val| { $t::wrap(-val.inner) });

        impl $t {
            /// Whether no lane is NaN or infinite.
            #[inline]
            pub fn is_valid(&self) -> bool {
                $crate::lanes::is_valid(self.inner)
            }

            /// Whether any lane is NaN or infinite.
            #[inline]
            pub fn is_invalid(&self) -> bool {
                !self.is_valid()
            }

            /// Whether every lane is exactly zero.
            #[inline]
            pub fn is_zero(&self) -> bool {
                self.inner == ::glam::Vec4::ZERO
            }

            /// Whether the absolute value of every lane is at most `epsilon`.
            #[inline]
            pub fn is_zero_or_near_zero(&self, epsilon: f32) -> bool {
                $crate::lanes::is_zero_or_near_zero(self.inner, epsilon)
            }

            /// Returns a copy where every lane with absolute value at most
            /// `epsilon` is replaced by exactly zero.
            #[inline]
            pub fn zeroed_if_near_zero(&self, epsilon: f32) -> Self {
                Self::wrap($crate::lanes::zeroed_if_near_zero(self.inner, epsilon))
            }

            /// Replaces every lane with absolute value at most `epsilon` by
            /// exactly zero.
            #[inline]
            pub fn zero_if_near_zero(&mut self, epsilon: f32) {
                *self = self.zeroed_if_near_zero(epsilon);
            }

            /// Computes the dot product of this vector with another.
            ///
            /// # Panics
            /// In debug builds, if the result is NaN because a lane of either
            /// input is NaN or infinite.
            #[inline]
            pub fn dot(&self, other: &Self) -> f32 {
                $crate::lanes::dot(self.inner, other.inner)
            }

            /// Computes the magnitude (length) of the vector.
            #[inline]
            pub fn magnitude(&self) -> f32 {
                self.inner.length()
            }

            /// Computes the square of the magnitude of the vector.
            #[inline]
            pub fn magnitude_squared(&self) -> f32 {
                self.inner.length_squared()
            }

            /// Computes a lower-precision estimate of the magnitude, with
            /// relative error below 0.2%.
            #[inline]
            pub fn magnitude_estimate(&self) -> f32 {
                $crate::lanes::length_estimate(self.inner)
            }

            /// Computes the normalized version of the vector. Any vector
            /// with a non-zero finite lane gives unit magnitude, also when
            /// its squared magnitude is not representable. The zero vector
            /// gives NaN lanes.
            #[inline]
            pub fn normalized(&self) -> Self {
                Self::wrap($crate::lanes::normalize(self.inner))
            }

            /// Normalizes the vector in place. The zero vector gives NaN
            /// lanes.
            #[inline]
            pub fn normalize(&mut self) {
                *self = self.normalized();
            }

            /// Projects this vector onto the direction of `direction`. Gives
            /// the zero vector if `direction` has no well-defined direction.
            #[inline]
            pub fn project_onto(&self, direction: &Self) -> Self {
                let unit = direction.normalized();
                if unit.is_invalid() {
                    return Self::zeros();
                }
                unit * self.dot(&unit)
            }

            /// Returns a vector with the absolute value of each lane.
            #[inline]
            pub fn absolute(&self) -> Self {
                Self::wrap(self.inner.abs())
            }

            /// Replaces each lane by its absolute value.
            #[inline]
            pub fn make_absolute(&mut self) {
                *self = self.absolute();
            }

            /// Computes `self * multiplier + addend` lane by lane.
            #[inline]
            pub fn multiply_add(&self, multiplier: &Self, addend: &Self) -> Self {
                Self::wrap(self.inner * multiplier.inner + addend.inner)
            }

            /// Returns a vector where each lane is the minimum of the
            /// corresponding lane in this and another vector.
            #[inline]
            pub fn component_min(&self, other: &Self) -> Self {
                Self::wrap(self.inner.min(other.inner))
            }

            /// Returns a vector where each lane is the maximum of the
            /// corresponding lane in this and another vector.
            #[inline]
            pub fn component_max(&self, other: &Self) -> Self {
                Self::wrap(self.inner.max(other.inner))
            }

            /// Computes the sum of the lanes.
            #[inline]
            pub fn sum_components(&self) -> f32 {
                self.inner.element_sum()
            }
        }

        impl $t {
            /// Whether every lane of this vector is strictly less than the
            /// corresponding lane of `other`.
            #[inline]
            pub fn all_lt(&self, other: &Self) -> bool {
                $crate::lanes::all_lanes(self.inner.cmplt(other.inner).bitmask(), $width)
            }

            /// Whether every lane of this vector is less than or equal to the
            /// corresponding lane of `other`.
            #[inline]
            pub fn all_le(&self, other: &Self) -> bool {
                $crate::lanes::all_lanes(self.inner.cmple(other.inner).bitmask(), $width)
            }

            /// Whether every lane of this vector is strictly greater than the
            /// corresponding lane of `other`.
            #[inline]
            pub fn all_gt(&self, other: &Self) -> bool {
                $crate::lanes::all_lanes(self.inner.cmpgt(other.inner).bitmask(), $width)
            }

            /// Whether every lane of this vector is greater than or equal to
            /// the corresponding lane of `other`.
            #[inline]
            pub fn all_ge(&self, other: &Self) -> bool {
                $crate::lanes::all_lanes(self.inner.cmpge(other.inner).bitmask(), $width)
            }
        }

        impl PartialOrd for $t {
            /// Orders vectors lane by lane. One vector is less than another
            /// only if every lane is less, and equal only if every lane is
            /// equal. Any other combination is unordered.
            ///
            /// The comparison operators are lane-wise: `a <= b` holds when
            /// every lane of `a` is less than or equal to that of `b`, even
            /// if `partial_cmp` reports the pair as unordered. This departs
            /// from the usual consistency between `le` and `partial_cmp`.
            #[inline]
            fn partial_cmp(&self, other: &Self) -> Option<::std::cmp::Ordering> {
                if self == other {
                    Some(::std::cmp::Ordering::Equal)
                } else if self.all_lt(other) {
                    Some(::std::cmp::Ordering::Less)
                } else if self.all_gt(other) {
                    Some(::std::cmp::Ordering::Greater)
                } else {
                    None
                }
            }

            #[inline]
            fn lt(&self, other: &Self) -> bool {
                self.all_lt(other)
            }

            #[inline]
            fn le(&self, other: &Self) -> bool {
                self.all_le(other)
            }

            #[inline]
            fn gt(&self, other: &Self) -> bool {
                self.all_gt(other)
            }

            #[inline]
            fn ge(&self, other: &Self) -> bool {
                self.all_ge(other)
            }
        }

        impl ::std::ops::Index<usize> for $t {
            type Output = f32;

            #[inline]
            fn index(&self, index: usize) -> &Self::Output {
                assert!(
                    index < $width,
                    "lane index {index} out of range for {}",
                    stringify!($t)
                );
                &self.inner[index]
            }
        }

        impl ::std::ops::IndexMut<usize> for $t {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                assert!(
                    index < $width,
                    "lane index {index} out of range for {}",
                    stringify!($t)
                );
                &mut self.inner[index]
            }
        }

        impl ::std::iter::Sum for $t {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold($t::zeros(), |acc, v| acc + v)
            }
        }

        impl<'a> ::std::iter::Sum<&'a $t> for $t {
            fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
                iter.fold($t::zeros(), |acc, v| acc + v)
            }
        }

        impl_abs_diff_eq!($t, |a, b, epsilon| {
            a.inner.abs_diff_eq(b.inner, epsilon)
        });

        impl_relative_eq!($t, |a, b, epsilon, max_relative| {
            ::approx::RelativeEq::relative_eq(&a.inner, &b.inner, epsilon, max_relative)
        });
    };
}
