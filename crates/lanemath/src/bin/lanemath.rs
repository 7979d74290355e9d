use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use clap::{Parser, Subcommand};
    use lanemath::{Quaternion, Vector3};

    #[derive(Debug, Parser)]
    #[command(about = "The lanemath vector and quaternion kernel", long_about = None)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        #[cfg(feature = "benchmark")]
        /// Run a benchmarking target
        Benchmark {
            /// Benchmarking target to run (all targets are run if omitted)
            #[arg(short, long, value_enum)]
            target: Option<lanemath::benchmark::Target>,

            /// Number of seconds to run the target for (it will always be run at least
            /// once)
            #[arg(short, long, default_value_t = 0.0)]
            duration: f64,

            /// Minimum number of seconds from the program is started until the target
            /// is run
            #[arg(long, default_value_t = 0.0)]
            delay: f64,
        },
        #[cfg(not(feature = "benchmark"))]
        /// Run a benchmarking target (requires the `benchmark` feature)
        Benchmark,
        /// Rotate a vector about an axis and print the result
        Rotate {
            /// Vector to rotate, as three components separated by spaces or commas
            #[arg(short, long, allow_hyphen_values = true)]
            vector: Vector3,

            /// Rotation axis, as three components separated by spaces or commas
            #[arg(short, long, allow_hyphen_values = true)]
            axis: Vector3,

            /// Rotation angle in degrees
            #[arg(long, allow_negative_numbers = true)]
            angle: f32,
        },
    }

    pub fn main() -> Result<()> {
        env_logger::init();

        let cli = Cli::parse();

        match cli.command {
            #[cfg(feature = "benchmark")]
            Command::Benchmark {
                target,
                duration,
                delay,
            } => {
                match target {
                    Some(target) => lanemath::benchmark::benchmark(target, duration, delay),
                    None => lanemath::benchmark::benchmark_all(duration, delay),
                }
                Ok(())
            }
            #[cfg(not(feature = "benchmark"))]
            Command::Benchmark => {
                anyhow::bail!(
                    "The `benchmark` subcommand requires the `benchmark` feature to be enabled."
                )
            }
            Command::Rotate {
                vector,
                axis,
                angle,
            } => {
                if axis.is_zero() {
                    anyhow::bail!("The rotation axis must be non-zero");
                }
                let rotation = Quaternion::from_axis_angle(&axis, angle.to_radians());
                log::debug!("Rotating {vector:?} by {rotation:?}");
                println!("{}", rotation * vector);
                Ok(())
            }
        }
    }
}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}
