use crate::{
    matrix::Matrix4,
    num,
    quaternion::Quaternion,
    vector::{Vector3, Vector4},
};
use lanemath_profiling::benchmark::Benchmarker;

pub fn add_vector3(benchmarker: impl Benchmarker) {
    let a = create_vector3();
    let b = create_other_vector3();
    benchmarker.benchmark(&mut || a + b);
}

pub fn add_vector3_scalar(benchmarker: impl Benchmarker) {
    let a = create_vector3();
    benchmarker.benchmark(&mut || a + 2.5);
}

pub fn dot_vector3(benchmarker: impl Benchmarker) {
    let a = create_vector3();
    let b = create_other_vector3();
    benchmarker.benchmark(&mut || a.dot(&b));
}

pub fn cross_vector3(benchmarker: impl Benchmarker) {
    let a = create_vector3();
    let b = create_other_vector3();
    benchmarker.benchmark(&mut || a.cross(&b));
}

pub fn normalize_vector3(benchmarker: impl Benchmarker) {
    let a = create_vector3();
    benchmarker.benchmark(&mut || a.normalized());
}

pub fn magnitude_vector3(benchmarker: impl Benchmarker) {
    let a = create_vector3();
    benchmarker.benchmark(&mut || a.magnitude());
}

pub fn magnitude_estimate_vector3(benchmarker: impl Benchmarker) {
    let a = create_vector3();
    benchmarker.benchmark(&mut || a.magnitude_estimate());
}

pub fn dot_vector4(benchmarker: impl Benchmarker) {
    let a = create_vector4();
    let b = create_vector4() * 0.5;
    benchmarker.benchmark(&mut || a.dot(&b));
}

pub fn normalize_vector4(benchmarker: impl Benchmarker) {
    let a = create_vector4();
    benchmarker.benchmark(&mut || a.normalized());
}

pub fn transform_vector4(benchmarker: impl Benchmarker) {
    let a = create_vector4();
    let matrix = create_matrix4();
    benchmarker.benchmark(&mut || a.transformed(&matrix));
}

pub fn average_vector3(benchmarker: impl Benchmarker) {
    let vectors: Vec<_> = (0..64)
        .map(|idx| create_vector3() * idx as f32)
        .collect();
    benchmarker.benchmark(&mut || num::average(&vectors));
}

fn create_vector3() -> Vector3 {
    Vector3::new(1.0, -2.0, 3.5)
}

fn create_other_vector3() -> Vector3 {
    Vector3::new(-0.5, 4.0, 2.0)
}

fn create_vector4() -> Vector4 {
    Vector4::new(1.0, -2.0, 3.5, 1.0)
}

fn create_matrix4() -> Matrix4 {
    Matrix4::from_translation(&create_other_vector3())
        * Matrix4::from_rotation(&Quaternion::from_axis_angle(&create_vector3(), 0.7))
}
