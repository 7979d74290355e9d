//! Running benchmark targets for a fixed wall-clock duration.

#[cfg(feature = "criterion")]
pub mod criterion;

use std::{
    hint::black_box,
    time::{Duration, Instant},
};

/// Something that can repeatedly invoke a closure and measure it.
pub trait Benchmarker {
    fn benchmark<T>(self, f: &mut impl FnMut() -> T);
}

/// Runs the benchmarked closure in a loop until the configured duration has
/// elapsed. The closure always runs at least once.
#[derive(Clone, Debug)]
pub struct BasicBenchmarker {
    label: &'static str,
    duration: Duration,
    delayer: Delayer,
}

/// Postpones a benchmark until a given time has passed since program start,
/// so that an external profiler can be attached first.
#[derive(Clone, Debug)]
pub struct Delayer {
    program_start: Instant,
    delay: Duration,
}

/// Iteration count and wall-clock time of one benchmark run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IterationStats {
    pub iterations: u64,
    pub elapsed: Duration,
}

impl BasicBenchmarker {
    pub fn new(label: &'static str, duration: Duration, delayer: Delayer) -> Self {
        Self {
            label,
            duration,
            delayer,
        }
    }

    /// Runs the closure like [`Benchmarker::benchmark`] and returns the
    /// statistics instead of only logging them.
    pub fn run<T>(self, f: &mut impl FnMut() -> T) -> IterationStats {
        self.delayer.wait();

        let start = Instant::now();
        let mut iterations = 0;
        loop {
            black_box(f());
            iterations += 1;

            if start.elapsed() > self.duration {
                break;
            }
        }

        IterationStats {
            iterations,
            elapsed: start.elapsed(),
        }
    }
}

impl Benchmarker for BasicBenchmarker {
    fn benchmark<T>(self, f: &mut impl FnMut() -> T) {
        let label = self.label;
        let stats = self.run(f);
        log::info!(
            "{label}: {} iterations in {:.3} s ({:.1} ns/iteration)",
            stats.iterations,
            stats.elapsed.as_secs_f64(),
            stats.nanos_per_iteration()
        );
    }
}

impl IterationStats {
    pub fn nanos_per_iteration(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1e9 / self.iterations.max(1) as f64
    }
}

impl Delayer {
    pub fn new(program_start: Instant, delay_seconds: f64) -> Self {
        Self {
            program_start,
            delay: Duration::from_secs_f64(delay_seconds),
        }
    }

    fn wait(self) {
        let remaining = self.delay.saturating_sub(self.program_start.elapsed());
        if remaining > Duration::ZERO {
            log::debug!(
                "Waiting {:.3} s before starting benchmark",
                remaining.as_secs_f64()
            );
            std::thread::sleep(remaining);
        }
    }
}

/// Defines an enum with one variant per benchmark function, grouped by
/// module.
///
/// Variant names are the camel-cased concatenation of module and function
/// name. The enum gets a `name` method giving `module/function`, an `ALL`
/// constant listing every variant, and a private `execute` method
/// dispatching to the function. With the `cli` feature enabled in the
/// invoking crate, the enum derives [`clap::ValueEnum`](https://docs.rs/clap).
#[macro_export]
macro_rules! define_target_enum {
(
    $name:ident,
    $benchmarks_mod:path,
    $(
        $module:ident => {
            $($func:ident),* $(,)?
        }
    ),* $(,)?
) => {
    $crate::pastey::paste! {
        #[allow(clippy::enum_variant_names)]
        #[cfg_attr(feature = "cli", derive(::clap::ValueEnum))]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
        pub enum $name {
            $(
                $( [<$module:camel $func:camel>] ),*
            ),*
        }

        impl $name {
            pub const ALL: &'static [Self] = &[
                $(
                    $( Self::[<$module:camel $func:camel>], )*
                )*
            ];

            pub fn name(&self) -> &'static str {
                match self {
                    $(
                        $( Self::[<$module:camel $func:camel>] => concat!(stringify!($module), "/", stringify!($func)), )*
                    )*
                }
            }

            fn execute(&self, benchmarker: impl $crate::benchmark::Benchmarker) {
                match self {
                    $(
                        $( Self::[<$module:camel $func:camel>] => $benchmarks_mod::$module::$func(benchmarker), )*
                    )*
                }
            }
        }
    }};
}

/// Runs the given target executor with a [`BasicBenchmarker`] labelled
/// `label` and configured for the given duration and start delay (both in
/// seconds).
pub fn benchmark(
    label: &'static str,
    execute: impl Fn(BasicBenchmarker),
    duration: f64,
    delay: f64,
) {
    let start = Instant::now();

    let delayer = Delayer::new(start, delay);
    let duration = Duration::from_secs_f64(duration);

    let benchmarker = BasicBenchmarker::new(label, duration, delayer);

    execute(benchmarker);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    mod benchmarks {
        pub mod arithmetic {
            use crate::benchmark::Benchmarker;

            pub fn add(benchmarker: impl Benchmarker) {
                benchmarker.benchmark(&mut || 1 + 1);
            }

            pub fn multiply(benchmarker: impl Benchmarker) {
                benchmarker.benchmark(&mut || 2 * 3);
            }
        }
    }

    crate::define_target_enum! {
        TestTarget,
        self::benchmarks,
        arithmetic => {
            add,
            multiply,
        }
    }

    fn immediate_benchmarker() -> BasicBenchmarker {
        BasicBenchmarker::new("test", Duration::ZERO, Delayer::new(Instant::now(), 0.0))
    }

    #[test]
    fn basic_benchmarker_runs_closure_at_least_once_for_zero_duration() {
        let calls = Cell::new(0_u64);
        let stats = immediate_benchmarker().run(&mut || calls.set(calls.get() + 1));
        assert!(calls.get() >= 1);
        assert_eq!(stats.iterations, calls.get());
    }

    #[test]
    fn nanos_per_iteration_divides_elapsed_time() {
        let stats = IterationStats {
            iterations: 4,
            elapsed: Duration::from_micros(2),
        };
        assert!((stats.nanos_per_iteration() - 500.0).abs() < 1e-6);
    }

    #[test]
    fn benchmark_passes_configured_benchmarker_to_executor() {
        let executed = Cell::new(false);
        benchmark(
            "test",
            |benchmarker| {
                benchmarker.benchmark(&mut || 1 + 1);
                executed.set(true);
            },
            0.0,
            0.0,
        );
        assert!(executed.get());
    }

    #[test]
    fn target_enum_lists_and_names_every_function() {
        assert_eq!(
            TestTarget::ALL,
            &[TestTarget::ArithmeticAdd, TestTarget::ArithmeticMultiply]
        );
        assert_eq!(TestTarget::ArithmeticMultiply.name(), "arithmetic/multiply");

        for target in TestTarget::ALL {
            target.execute(immediate_benchmarker());
        }
    }
}
