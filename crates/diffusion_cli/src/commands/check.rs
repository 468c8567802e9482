//! Check command implementation
//!
//! Validates the effective configuration and prints it with a short system
//! summary.

use std::io::Write;
use std::path::Path;

use diffusion_engine::mc::{MatrixLayout, MAX_MATRIX_ELEMENTS};
use tracing::info;

use crate::config::{Settings, DEFAULT_CONFIG_FILE};
use crate::Result;

/// Run the check command
pub fn run(settings: &Settings, config_path: Option<&Path>, out: &mut impl Write) -> Result<()> {
    info!("Checking configuration...");

    let params = settings.parameters()?;
    let layout = MatrixLayout::new(params.path_count, params.step_count())?;

    let source = match config_path {
        Some(path) => path.display().to_string(),
        None => format!("{} (optional)", DEFAULT_CONFIG_FILE),
    };
    let seed = params
        .seed
        .map(|s| s.to_string())
        .unwrap_or_else(|| "fresh per run".to_string());

    writeln!(out, "Configuration OK")?;
    writeln!(out, "  Config file:     {}", source)?;
    writeln!(out, "  Steps:           {}", layout.step_count())?;
    writeln!(
        out,
        "  Matrix cells:    {} of {}",
        layout.value_len(),
        MAX_MATRIX_ELEMENTS
    )?;
    writeln!(out, "  Seed:            {}", seed)?;
    writeln!(out, "  Rayon threads:   {}", rayon::current_num_threads())?;
    writeln!(out)?;
    write!(out, "{}", settings.to_toml()?)?;

    info!("Configuration check complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use diffusion_core::types::SimulationError;

    #[test]
    fn test_reports_effective_settings() {
        let mut out = Vec::new();
        run(&Settings::default(), None, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Configuration OK"));
        assert!(text.contains("bachelier.toml (optional)"));
        assert!(text.contains("Steps:           100"));
        assert!(text.contains("Matrix cells:    10100"));
        assert!(text.contains("[simulation]"));
        assert!(text.contains("[output]"));
    }

    #[test]
    fn test_unseeded_reported() {
        let mut settings = Settings::default();
        settings.simulation.seed = None;
        let mut out = Vec::new();
        run(&settings, Some(Path::new("custom.toml")), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("fresh per run"));
        assert!(text.contains("custom.toml"));
    }

    #[test]
    fn test_oversized_request_fails_check() {
        let mut settings = Settings::default();
        settings.simulation.path_count = 10_000_000;
        let mut out = Vec::new();
        assert!(matches!(
            run(&settings, None, &mut out),
            Err(CliError::Simulation(SimulationError::ResourceExhausted { .. }))
        ));
    }
}
