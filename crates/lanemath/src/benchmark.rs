pub mod benchmarks;

lanemath_profiling::define_target_enum! {
    Target,
    crate::benchmark::benchmarks,
    vector => {
        add_vector3,
        add_vector3_scalar,
        dot_vector3,
        cross_vector3,
        normalize_vector3,
        magnitude_vector3,
        magnitude_estimate_vector3,
        dot_vector4,
        normalize_vector4,
        transform_vector4,
        average_vector3,
    },
    quaternion => {
        mul_quaternion,
        inverse_quaternion,
        rotate_vector3,
        rotate_vector2,
        from_axis_angle,
        from_pitch_yaw_roll,
        euler_angles,
        angular_velocity,
    }
}

/// Runs the given target for `duration` seconds after waiting until `delay`
/// seconds have passed since the call.
pub fn benchmark(target: Target, duration: f64, delay: f64) {
    lanemath_profiling::benchmark::benchmark(
        target.name(),
        |benchmarker| target.execute(benchmarker),
        duration,
        delay,
    );
}

/// Runs every target in turn, each for `duration` seconds.
pub fn benchmark_all(duration: f64, delay: f64) {
    for (idx, target) in Target::ALL.iter().enumerate() {
        benchmark(*target, duration, if idx == 0 { delay } else { 0.0 });
    }
}
