//! Bachelier CLI - Command Line Driver for the Diffusion Simulator
//!
//! This is the operational entry point for the arithmetic Brownian motion
//! simulator.
//!
//! # Commands
//!
//! - `bachelier simulate` - Simulate paths and compare terminal moments with theory
//! - `bachelier density` - Print the theoretical density curve as CSV
//! - `bachelier bands` - Print the mean path and σ bands as CSV
//! - `bachelier check` - Validate and print the effective configuration

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use config::{OutputFormat, Settings, SimulationSettings};

/// Bachelier diffusion simulator CLI
#[derive(Parser, Debug)]
#[command(name = "bachelier")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path [default: bachelier.toml if present]
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Flags overriding the `[simulation]` section.
#[derive(Args, Debug, Clone, Default)]
struct ParameterArgs {
    /// Starting value S0
    #[arg(long, allow_negative_numbers = true)]
    initial_value: Option<f64>,

    /// Drift μ (enables drift)
    #[arg(long, allow_negative_numbers = true)]
    drift: Option<f64>,

    /// Ignore drift entirely
    #[arg(long, conflicts_with = "drift")]
    no_drift: bool,

    /// Volatility σ
    #[arg(long, allow_negative_numbers = true)]
    volatility: Option<f64>,

    /// Horizon T
    #[arg(long, allow_negative_numbers = true)]
    horizon: Option<f64>,

    /// Step size dt
    #[arg(long, allow_negative_numbers = true)]
    step_size: Option<f64>,

    /// Number of paths
    #[arg(short = 'n', long)]
    paths: Option<usize>,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Draw a fresh seed instead of the configured one
    #[arg(long, conflicts_with = "seed")]
    unseeded: bool,
}

impl ParameterArgs {
    fn apply(&self, simulation: &mut SimulationSettings) {
        if let Some(v) = self.initial_value {
            simulation.initial_value = v;
        }
        if let Some(v) = self.drift {
            simulation.drift = v;
            simulation.drift_enabled = true;
        }
        if self.no_drift {
            simulation.drift_enabled = false;
        }
        if let Some(v) = self.volatility {
            simulation.volatility = v;
        }
        if let Some(v) = self.horizon {
            simulation.horizon = v;
        }
        if let Some(v) = self.step_size {
            simulation.step_size = v;
        }
        if let Some(v) = self.paths {
            simulation.path_count = v;
        }
        if let Some(v) = self.seed {
            simulation.seed = Some(v);
            simulation.unseeded = false;
        }
        if self.unseeded {
            simulation.unseeded = true;
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Simulate paths and compare terminal moments with the closed form
    Simulate {
        #[command(flatten)]
        params: ParameterArgs,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Write every path to a CSV file (columns t, path_0, path_1, ...)
        #[arg(short, long)]
        export: Option<PathBuf>,
    },

    /// Print the theoretical density curve as CSV
    Density {
        #[command(flatten)]
        params: ParameterArgs,

        /// Evaluation time [default: horizon]
        #[arg(short, long, allow_negative_numbers = true)]
        time: Option<f64>,

        /// Lower end of the range [default: mean - 4σ]
        #[arg(long, allow_negative_numbers = true)]
        lower: Option<f64>,

        /// Upper end of the range [default: mean + 4σ]
        #[arg(long, allow_negative_numbers = true)]
        upper: Option<f64>,

        /// Number of points [default: output.density_points]
        #[arg(short, long)]
        points: Option<usize>,
    },

    /// Print the mean path and mean ± kσ bands over the time grid as CSV
    Bands {
        #[command(flatten)]
        params: ParameterArgs,

        /// Band multipliers k
        #[arg(short = 'k', long = "multiplier", value_delimiter = ',', default_values_t = [1.0, 2.0])]
        multipliers: Vec<f64>,
    },

    /// Validate and print the effective configuration
    Check {
        #[command(flatten)]
        params: ParameterArgs,
    },
}

impl Commands {
    fn params(&self) -> &ParameterArgs {
        match self {
            Commands::Simulate { params, .. }
            | Commands::Density { params, .. }
            | Commands::Bands { params, .. }
            | Commands::Check { params } => params,
        }
    }
}

fn init_tracing(verbose: bool, default_level: &str) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn run(cli: Cli, settings: Settings, out: &mut impl Write) -> Result<()> {
    let mut settings = settings;
    cli.command.params().apply(&mut settings.simulation);

    match cli.command {
        Commands::Simulate { format, export, .. } => commands::simulate::run(
            &settings,
            format.unwrap_or(settings.output.format),
            export.as_deref(),
            out,
        ),
        Commands::Density {
            time,
            lower,
            upper,
            points,
            ..
        } => commands::density::run(&settings, time, lower, upper, points, out),
        Commands::Bands { multipliers, .. } => commands::bands::run(&settings, &multipliers, out),
        Commands::Check { .. } => commands::check::run(&settings, cli.config.as_deref(), out),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    init_tracing(cli.verbose, &settings.output.log_level);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli, settings, &mut out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("bachelier").chain(args.iter().copied())).unwrap()
    }

    fn run_to_string(args: &[&str]) -> String {
        let mut out = Vec::new();
        run(parse(args), Settings::default(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_overrides_apply_to_settings() {
        let cli = parse(&[
            "simulate",
            "--drift",
            "-5",
            "--volatility",
            "30",
            "-n",
            "250",
            "--seed",
            "7",
            "--initial-value",
            "-10",
        ]);
        let mut simulation = SimulationSettings {
            drift_enabled: false,
            ..Default::default()
        };
        cli.command.params().apply(&mut simulation);

        assert_eq!(simulation.drift, -5.0);
        assert!(simulation.drift_enabled);
        assert_eq!(simulation.volatility, 30.0);
        assert_eq!(simulation.path_count, 250);
        assert_eq!(simulation.seed, Some(7));
        assert_eq!(simulation.initial_value, -10.0);
    }

    #[test]
    fn test_no_drift_and_unseeded() {
        let cli = parse(&["check", "--no-drift", "--unseeded"]);
        let mut simulation = SimulationSettings::default();
        cli.command.params().apply(&mut simulation);
        assert!(!simulation.drift_enabled);
        assert!(simulation.unseeded);
        let settings = Settings {
            simulation,
            ..Default::default()
        };
        assert_eq!(settings.parameters().unwrap().seed, None);
    }

    #[test]
    fn test_conflicting_flags_rejected() {
        assert!(Cli::try_parse_from(["bachelier", "simulate", "--seed", "1", "--unseeded"]).is_err());
        assert!(Cli::try_parse_from(["bachelier", "simulate", "--drift", "1", "--no-drift"]).is_err());
        assert!(Cli::try_parse_from(["bachelier", "simulate", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = parse(&["density", "-v", "--config", "custom.toml"]);
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn test_bands_multipliers() {
        match parse(&["bands", "-k", "0.5,3"]).command {
            Commands::Bands { multipliers, .. } => assert_eq!(multipliers, vec![0.5, 3.0]),
            other => panic!("unexpected command {:?}", other),
        }
        match parse(&["bands"]).command {
            Commands::Bands { multipliers, .. } => assert_eq!(multipliers, vec![1.0, 2.0]),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_simulate_json_end_to_end() {
        let output = run_to_string(&["simulate", "-n", "500", "--format", "json"]);
        let report: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(report["comparison"]["path_count"], 500);
        assert_eq!(report["seed"], 42);
    }

    #[test]
    fn test_negative_overrides_reach_validation() {
        for (flag, field) in [
            ("--volatility", "volatility"),
            ("--horizon", "horizon"),
            ("--step-size", "step_size"),
        ] {
            let mut out = Vec::new();
            let err = run(parse(&["simulate", flag, "-1"]), Settings::default(), &mut out)
                .unwrap_err();
            match err {
                CliError::Simulation(e) => assert_eq!(e.field(), Some(field)),
                other => panic!("unexpected error {:?}", other),
            }
        }

        let mut out = Vec::new();
        let err = run(parse(&["density", "--time", "-0.5"]), Settings::default(), &mut out)
            .unwrap_err();
        match err {
            CliError::Simulation(e) => assert_eq!(e.field(), Some("time")),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_invalid_override_surfaces_field() {
        let mut out = Vec::new();
        let err = run(parse(&["simulate", "--step-size", "0"]), Settings::default(), &mut out)
            .unwrap_err();
        match err {
            CliError::Simulation(e) => assert_eq!(e.field(), Some("step_size")),
            other => panic!("unexpected error {:?}", other),
        }
    }
}
