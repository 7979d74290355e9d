//! Benchmarking using `criterion`.

pub use criterion::*;

use crate::benchmark::Benchmarker;
use std::time::Duration;

/// Defines a criterion benchmark function for the benchmark target `$name`
/// in module `$module`. The measurement is reported as `$module/$name`.
///
/// An optional third argument overrides the number of samples.
#[macro_export]
macro_rules! define_criterion_target {
    ($module:ident, $name:ident) => {
        $crate::define_criterion_target!(@define $module, $name, None);
    };
    ($module:ident, $name:ident, $sample_count:expr) => {
        $crate::define_criterion_target!(@define $module, $name, Some($sample_count));
    };
    (@define $module:ident, $name:ident, $sample_count:expr) => {
        pub fn $name(c: &mut $crate::benchmark::criterion::Criterion) {
            $module::$name($crate::benchmark::criterion::CriterionTargetBenchmarker {
                criterion: c,
                module: stringify!($module),
                name: stringify!($name),
                sample_count: $sample_count,
            });
        }
    };
}

/// Measures one benchmark target in the criterion group named after its
/// module. Each invocation of the closure counts as one processed element,
/// so criterion reports kernel calls per second alongside the timing.
#[allow(missing_debug_implementations)]
pub struct CriterionTargetBenchmarker<'a> {
    pub criterion: &'a mut Criterion,
    pub module: &'static str,
    pub name: &'static str,
    pub sample_count: Option<usize>,
}

impl Benchmarker for CriterionTargetBenchmarker<'_> {
    fn benchmark<T>(self, f: &mut impl FnMut() -> T) {
        let mut group = self.criterion.benchmark_group(self.module);
        group.throughput(Throughput::Elements(1));

        if let Some(sample_count) = self.sample_count {
            group.sample_size(sample_count);
        }

        group.bench_function(BenchmarkId::from_parameter(self.name), |b| {
            b.iter(&mut *f);
        });
        group.finish();
    }
}

/// Criterion configuration for the kernel's benchmarks. Every target runs
/// in nanoseconds, so short warm-up and measurement windows suffice.
pub fn config() -> Criterion {
    Criterion::default()
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_secs(2))
        .noise_threshold(0.03)
}
