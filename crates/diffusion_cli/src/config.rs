//! Layered CLI configuration.
//!
//! Sources, lowest precedence first:
//! 1. built-in defaults
//! 2. a TOML file (`bachelier.toml` unless `--config` names another)
//! 3. environment variables prefixed `BACHELIER_`, nested with `__`
//!    (e.g. `BACHELIER_SIMULATION__VOLATILITY=25`)
//!
//! Command-line flags are applied on top by the commands themselves.

use std::path::Path;

use clap::ValueEnum;
use config::{Config, Environment, File, FileFormat};
use diffusion_core::types::{SimulationParameters, SimulationResult};
use serde::{Deserialize, Serialize};

use crate::Result;

/// Default configuration file, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "bachelier.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "BACHELIER";

/// Effective CLI settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Simulation inputs
    pub simulation: SimulationSettings,
    /// Output rendering
    pub output: OutputSettings,
}

/// `[simulation]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// Starting value S0
    pub initial_value: f64,
    /// Drift μ
    pub drift: f64,
    /// When false, `drift` is ignored and treated as zero
    pub drift_enabled: bool,
    /// Volatility σ
    pub volatility: f64,
    /// Horizon T
    pub horizon: f64,
    /// Step size dt
    pub step_size: f64,
    /// Number of paths N
    pub path_count: usize,
    /// Seed of the random stream; ignored when `unseeded` is set
    pub seed: Option<u64>,
    /// Draw a fresh seed for every run
    pub unseeded: bool,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        let defaults = SimulationParameters::default();
        Self {
            initial_value: defaults.initial_value,
            drift: defaults.drift,
            drift_enabled: true,
            volatility: defaults.volatility,
            horizon: defaults.horizon,
            step_size: defaults.step_size,
            path_count: defaults.path_count,
            seed: defaults.seed,
            unseeded: false,
        }
    }
}

/// Report format for `simulate`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Pretty-printed JSON report
    Json,
}

/// `[output]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Report format for `simulate`
    pub format: OutputFormat,
    /// Terminal histogram bins in the JSON report; 0 disables the histogram
    pub histogram_bins: usize,
    /// Samples on the theoretical density curve
    pub density_points: usize,
    /// Log filter used when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            histogram_bins: 50,
            density_points: 500,
            log_level: "warn".to_string(),
        }
    }
}

impl Settings {
    /// Loads settings from defaults, the configuration file and the environment.
    ///
    /// `path` is `None` when `--config` was not given; the default file is then
    /// optional. An explicitly named file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path).format(FileFormat::Toml).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE)
                .format(FileFormat::Toml)
                .required(false),
        };

        let settings = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Validated simulation parameters.
    pub fn parameters(&self) -> SimulationResult<SimulationParameters> {
        let s = &self.simulation;
        let seed = if s.unseeded { None } else { s.seed };
        SimulationParameters::builder()
            .initial_value(s.initial_value)
            .drift(s.drift)
            .drift_enabled(s.drift_enabled)
            .volatility(s.volatility)
            .horizon(s.horizon)
            .step_size(s.step_size)
            .path_count(s.path_count)
            .maybe_seed(seed)
            .build()
    }

    /// Renders the settings as a TOML document.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
