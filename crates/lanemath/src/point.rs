//! Integer points.
//!
//! Conversions from the float vectors truncate toward zero, saturating at the
//! integer range. Lane-wise division follows integer semantics and panics on
//! a zero divisor.

use bytemuck::{Pod, Zeroable};
use glam::{IVec2, IVec3, UVec2};
use std::fmt;

/// A 2-dimensional point with unsigned integer coordinates.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "UIntPoint2Record", from = "UIntPoint2Record")
)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Zeroable, Pod)]
pub struct UIntPoint2 {
    inner: UVec2,
}

/// A 2-dimensional point with signed integer coordinates.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "IntPoint2Record", from = "IntPoint2Record")
)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Zeroable, Pod)]
pub struct IntPoint2 {
    inner: IVec2,
}

/// A 3-dimensional point with signed integer coordinates.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "IntPoint3Record", from = "IntPoint3Record")
)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Zeroable, Pod)]
pub struct IntPoint3 {
    inner: IVec3,
}

macro_rules! impl_int_point {
    (
        $t:ident,
        $inner:ty,
        $scalar:ty,
        $record:ident,
        [$(($c:ident, $c_mut:ident)),+]
    ) => {
        impl $t {
            /// Creates a new point with the given coordinates.
            #[inline]
            pub const fn new($($c: $scalar),+) -> Self {
                Self {
                    inner: <$inner>::new($($c),+),
                }
            }

            /// Creates a point with the same value for all coordinates.
            #[inline]
            pub const fn same(value: $scalar) -> Self {
                Self {
                    inner: <$inner>::splat(value),
                }
            }

            /// The point with all coordinates zero.
            #[inline]
            pub const fn origin() -> Self {
                Self::same(0)
            }

            $(
                #[inline]
                pub fn $c(&self) -> $scalar {
                    self.inner.$c
                }

                #[inline]
                pub fn $c_mut(&mut self) -> &mut $scalar {
                    &mut self.inner.$c
                }
            )+

            /// Lane-wise minimum of this point and another.
            #[inline]
            pub fn min(&self, other: &Self) -> Self {
                Self::wrap(self.inner.min(other.inner))
            }

            /// Lane-wise maximum of this point and another.
            #[inline]
            pub fn max(&self, other: &Self) -> Self {
                Self::wrap(self.inner.max(other.inner))
            }

            /// Clamps each coordinate to the range given by the corresponding
            /// coordinates of `min` and `max`.
            #[inline]
            pub fn clamp(&self, min: &Self, max: &Self) -> Self {
                Self::wrap(self.inner.max(min.inner).min(max.inner))
            }

            /// Whether every coordinate is strictly less than the
            /// corresponding coordinate of `other`.
            #[inline]
            pub fn all_lt(&self, other: &Self) -> bool {
                self.inner.cmplt(other.inner).all()
            }

            /// Whether every coordinate is less than or equal to the
            /// corresponding coordinate of `other`.
            #[inline]
            pub fn all_le(&self, other: &Self) -> bool {
                self.inner.cmple(other.inner).all()
            }

            /// Whether every coordinate is strictly greater than the
            /// corresponding coordinate of `other`.
            #[inline]
            pub fn all_gt(&self, other: &Self) -> bool {
                self.inner.cmpgt(other.inner).all()
            }

            /// Whether every coordinate is greater than or equal to the
            /// corresponding coordinate of `other`.
            #[inline]
            pub fn all_ge(&self, other: &Self) -> bool {
                self.inner.cmpge(other.inner).all()
            }

            #[inline]
            pub(crate) const fn wrap(inner: $inner) -> Self {
                Self { inner }
            }

            #[inline]
            pub(crate) const fn unwrap(self) -> $inner {
                self.inner
            }
        }

        impl_binop!(Add, add, $t, $t, $t, |a, b| { $t::wrap(a.inner + b.inner) });

        impl_binop!(Sub, sub, $t, $t, $t, |a, b| { $t::wrap(a.inner - b.inner) });

        impl_binop!(Mul, mul, $t, $t, $t, |a, b| { $t::wrap(a.inner * b.inner) });

        impl_binop!(Div, div, $t, $t, $t, |a, b| { $t::wrap(a.inner / b.inner) });

        impl_binop!(Add, add, $t, $scalar, $t, |a, b| { $t::wrap(a.inner + *b) });

        impl_binop!(Sub, sub, $t, $scalar, $t, |a, b| { $t::wrap(a.inner - *b) });

        impl_binop!(Mul, mul, $t, $scalar, $t, |a, b| { $t::wrap(a.inner * *b) });

        impl_binop!(Div, div, $t, $scalar, $t, |a, b| { $t::wrap(a.inner / *b) });

        impl_binop_assign!(AddAssign, add_assign, $t, $t, |a, b| {
            a.inner += b.inner;
        });

        impl_binop_assign!(SubAssign, sub_assign, $t, $t, |a, b| {
            a.inner -= b.inner;
        });

        impl_binop_assign!(MulAssign, mul_assign, $t, $t, |a, b| {
            a.inner *= b.inner;
        });

        impl_binop_assign!(DivAssign, div_assign, $t, $t, |a, b| {
            a.inner /= b.inner;
        });

        impl_binop_assign!(AddAssign, add_assign, $t, $scalar, |a, b| {
            a.inner += *b;
        });

        impl_binop_assign!(SubAssign, sub_assign, $t, $scalar, |a, b| {
            a.inner -= *b;
        });

        impl_binop_assign!(MulAssign, mul_assign, $t, $scalar, |a, b| {
            a.inner *= *b;
        });

        impl_binop_assign!(DivAssign, div_assign, $t, $scalar, |a, b| {
            a.inner /= *b;
        });

        #[cfg(feature = "serde")]
        #[derive(serde::Serialize, serde::Deserialize)]
        struct $record {
            $($c: $scalar),+
        }

        #[cfg(feature = "serde")]
        impl From<$t> for $record {
            fn from(point: $t) -> Self {
                Self {
                    $($c: point.$c()),+
                }
            }
        }

        #[cfg(feature = "serde")]
        impl From<$record> for $t {
            fn from(record: $record) -> Self {
                Self::new($(record.$c),+)
            }
        }

        #[cfg(feature = "arbitrary")]
        impl<'a> arbitrary::Arbitrary<'a> for $t {
            fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
                Ok(Self::new($({
                    let $c: $scalar = u.arbitrary()?;
                    $c
                }),+))
            }
        }

        impl fmt::Debug for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($t))
                    $(.field(stringify!($c), &self.$c()))+
                    .finish()
            }
        }

        impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let coords = [$(self.$c()),+];
                for (idx, coord) in coords.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(" ")?;
                    }
                    fmt::Display::fmt(coord, f)?;
                }
                Ok(())
            }
        }
    };
}

impl_int_point!(UIntPoint2, UVec2, u32, UIntPoint2Record, [(x, x_mut), (y, y_mut)]);

impl_int_point!(IntPoint2, IVec2, i32, IntPoint2Record, [(x, x_mut), (y, y_mut)]);

impl_int_point!(
    IntPoint3,
    IVec3,
    i32,
    IntPoint3Record,
    [(x, x_mut), (y, y_mut), (z, z_mut)]
);

impl_unary_op!(Neg, neg, IntPoint2, IntPoint2, |val| {
    IntPoint2::wrap(-val.inner)
});

impl_unary_op!(Neg, neg, IntPoint3, IntPoint3, |val| {
    IntPoint3::wrap(-val.inner)
});

impl IntPoint2 {
    /// Converts to an unsigned point, clamping negative coordinates to zero.
    #[inline]
    pub fn to_uint_point(&self) -> UIntPoint2 {
        UIntPoint2::wrap(self.inner.max(IVec2::ZERO).as_uvec2())
    }
}

impl From<UIntPoint2> for IntPoint2 {
    /// Converts to a signed point. Coordinates above `i32::MAX` wrap.
    #[inline]
    fn from(point: UIntPoint2) -> Self {
        Self::wrap(point.inner.as_ivec2())
    }
}

impl From<[u32; 2]> for UIntPoint2 {
    #[inline]
    fn from([x, y]: [u32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<[i32; 2]> for IntPoint2 {
    #[inline]
    fn from([x, y]: [i32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<[i32; 3]> for IntPoint3 {
    #[inline]
    fn from([x, y, z]: [i32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use crate::vector::{Vector2, Vector3};

    #[test]
    fn int_point_arithmetic_is_lane_wise() {
        let a = IntPoint2::new(3, -4);
        let b = IntPoint2::new(2, 2);
        assert_eq!(a + b, IntPoint2::new(5, -2));
        assert_eq!(a - b, IntPoint2::new(1, -6));
        assert_eq!(a * b, IntPoint2::new(6, -8));
        assert_eq!(a / b, IntPoint2::new(1, -2));
        assert_eq!(&a * 3, IntPoint2::new(9, -12));
        assert_eq!(-a, IntPoint2::new(-3, 4));
    }

    #[test]
    fn int_point_assign_operators_work() {
        let mut p = IntPoint3::new(1, 2, 3);
        p += IntPoint3::same(1);
        assert_eq!(p, IntPoint3::new(2, 3, 4));
        p *= 2;
        assert_eq!(p, IntPoint3::new(4, 6, 8));
        p /= IntPoint3::new(2, 3, 4);
        assert_eq!(p, IntPoint3::same(2));
        p -= 2;
        assert_eq!(p, IntPoint3::origin());
    }

    #[test]
    #[should_panic]
    fn dividing_int_point_by_zero_panics() {
        let _quotient = IntPoint2::new(1, 1) / IntPoint2::new(1, 0);
    }

    #[test]
    fn int_point_comparisons_are_lane_wise() {
        let a = UIntPoint2::new(1, 5);
        assert!(a.all_lt(&UIntPoint2::new(2, 10)));
        assert!(!a.all_lt(&UIntPoint2::new(2, 3)));
        assert!(a.all_le(&UIntPoint2::new(1, 5)));
        assert!(a.all_gt(&UIntPoint2::new(0, 4)));
        assert!(!a.all_ge(&UIntPoint2::new(0, 6)));
    }

    #[test]
    fn int_point_min_max_and_clamp_work() {
        let a = IntPoint3::new(-5, 0, 10);
        let b = IntPoint3::new(0, -1, 20);
        assert_eq!(a.min(&b), IntPoint3::new(-5, -1, 10));
        assert_eq!(a.max(&b), IntPoint3::new(0, 0, 20));
        assert_eq!(
            a.clamp(&IntPoint3::same(-2), &IntPoint3::same(5)),
            IntPoint3::new(-2, 0, 5)
        );
    }

    #[test]
    fn int_point_accessors_work() {
        let mut p = IntPoint3::new(1, 2, 3);
        *p.z_mut() = 7;
        assert_eq!((p.x(), p.y(), p.z()), (1, 2, 7));
    }

    #[test]
    fn converting_between_signed_and_unsigned_points_works() {
        assert_eq!(IntPoint2::new(-3, 4).to_uint_point(), UIntPoint2::new(0, 4));
        assert_eq!(IntPoint2::from(UIntPoint2::new(3, 4)), IntPoint2::new(3, 4));
    }

    #[test]
    fn float_vectors_truncate_toward_zero() {
        assert_eq!(
            Vector2::new(-0.9, 0.9).to_int_point(),
            IntPoint2::origin()
        );
        assert_eq!(
            Vector3::new(-2.5, 2.5, 1e12).to_int_point(),
            IntPoint3::new(-2, 2, i32::MAX)
        );
    }

    #[test]
    fn int_point_text_and_debug_forms_list_coordinates() {
        assert_eq!(IntPoint3::new(1, -2, 3).to_string(), "1 -2 3");
        assert_eq!(
            format!("{:?}", UIntPoint2::new(1, 2)),
            "UIntPoint2 { x: 1, y: 2 }"
        );
    }
}
