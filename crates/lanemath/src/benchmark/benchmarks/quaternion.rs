use crate::{
    quaternion::Quaternion,
    vector::{Vector2, Vector3},
};
use lanemath_profiling::benchmark::Benchmarker;

pub fn mul_quaternion(benchmarker: impl Benchmarker) {
    let a = create_quaternion();
    let b = create_other_quaternion();
    benchmarker.benchmark(&mut || a * b);
}

pub fn inverse_quaternion(benchmarker: impl Benchmarker) {
    let a = create_quaternion();
    benchmarker.benchmark(&mut || a.inverse());
}

pub fn rotate_vector3(benchmarker: impl Benchmarker) {
    let a = create_quaternion();
    let v = Vector3::new(1.0, 2.0, 3.0);
    benchmarker.benchmark(&mut || a * v);
}

pub fn rotate_vector2(benchmarker: impl Benchmarker) {
    let a = create_quaternion();
    let v = Vector2::new(1.0, 2.0);
    benchmarker.benchmark(&mut || a * v);
}

pub fn from_axis_angle(benchmarker: impl Benchmarker) {
    let axis = Vector3::new(1.0, 1.0, 0.0);
    benchmarker.benchmark(&mut || Quaternion::from_axis_angle(&axis, 0.4));
}

pub fn from_pitch_yaw_roll(benchmarker: impl Benchmarker) {
    benchmarker.benchmark(&mut || Quaternion::from_pitch_yaw_roll(0.1, 0.2, 0.3));
}

pub fn euler_angles(benchmarker: impl Benchmarker) {
    let a = create_quaternion();
    benchmarker.benchmark(&mut || a.euler_angles());
}

pub fn angular_velocity(benchmarker: impl Benchmarker) {
    let a = create_quaternion();
    let b = create_other_quaternion();
    benchmarker.benchmark(&mut || a.angular_velocity(&b, 1.0 / 60.0));
}

fn create_quaternion() -> Quaternion {
    Quaternion::from_axis_angle(&Vector3::new(0.0, 1.0, 1.0), 0.8)
}

fn create_other_quaternion() -> Quaternion {
    Quaternion::from_pitch_yaw_roll(0.3, -0.2, 1.1)
}
