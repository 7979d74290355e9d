//! Tolerances used by the kernel.

/// Default tolerance for treating a lane as zero in
/// `is_zero_or_near_zero` and `zeroed_if_near_zero`.
pub const DEFAULT_NEAR_ZERO_EPSILON: f32 = 0.00005;

/// A quaternion whose scalar part has an absolute value at or above this
/// threshold is considered to apply no rotation.
pub const NO_ROTATION_THRESHOLD: f32 = 0.999998;
