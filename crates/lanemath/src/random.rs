//! Random sampling of scalars and vectors.

use crate::vector::{Vector2, Vector3};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use std::f32::consts::TAU;

/// A caller-owned pseudo-random generator for sampling scalars and vectors.
///
/// The generator is seeded once on construction, and every subsequent call
/// continues the same stream. There is no shared global state, so a sampler
/// used from several threads must be wrapped in a lock by the caller.
#[derive(Clone, Debug)]
pub struct RandomSampler {
    rng: Pcg64Mcg,
}

impl RandomSampler {
    /// Creates a sampler whose stream is fully determined by `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Creates a sampler seeded from the operating system's entropy source.
    pub fn from_entropy() -> Self {
        Self {
            rng: Pcg64Mcg::from_rng(&mut rand::rng()),
        }
    }

    /// Samples a value uniformly from [-1, 1].
    pub fn unit_interval(&mut self) -> f32 {
        self.rng.random_range(-1.0..=1.0)
    }

    /// Samples a value uniformly from [`min`, `max`].
    ///
    /// # Panics
    /// If `min > max` or either bound is not finite.
    pub fn scalar_in_range(&mut self, min: f32, max: f32) -> f32 {
        self.rng.random_range(min..=max)
    }

    /// Samples each component uniformly between the corresponding components
    /// of `min` and `max`.
    ///
    /// # Panics
    /// If any component of `min` is greater than the one in `max`.
    pub fn vector2_in_range(&mut self, min: &Vector2, max: &Vector2) -> Vector2 {
        Vector2::new(
            self.scalar_in_range(min.x(), max.x()),
            self.scalar_in_range(min.y(), max.y()),
        )
    }

    /// Samples each component uniformly between the corresponding components
    /// of `min` and `max`.
    ///
    /// # Panics
    /// If any component of `min` is greater than the one in `max`.
    pub fn vector3_in_range(&mut self, min: &Vector3, max: &Vector3) -> Vector3 {
        Vector3::new(
            self.scalar_in_range(min.x(), max.x()),
            self.scalar_in_range(min.y(), max.y()),
            self.scalar_in_range(min.z(), max.z()),
        )
    }

    /// Samples a direction uniformly distributed over the unit sphere.
    pub fn unit_vector3(&mut self) -> Vector3 {
        let cos_theta: f32 = self.rng.random_range(-1.0..=1.0);
        let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();
        let phi: f32 = self.rng.random_range(0.0..TAU);
        Vector3::new(sin_theta * phi.cos(), sin_theta * phi.sin(), cos_theta)
    }
}
