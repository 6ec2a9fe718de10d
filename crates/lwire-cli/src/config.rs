//! TOML configuration deserialisation for comparison jobs.
//!
//! Every section and field has a default reproducing the classroom demo
//! run (L = 0.15 m, Q = 50 µC, 20 divisions per leg, 20×20 grid over
//! 0.2 m), so an empty job file — or no job file at all — is valid.

use serde::Deserialize;

/// Top-level job configuration.
#[derive(Debug, Default, Deserialize)]
pub struct JobConfig {
    #[serde(default)]
    pub wire: WireConfig,
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub integration: IntegrationConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Wire geometry and charge from TOML.
#[derive(Debug, Deserialize)]
pub struct WireConfig {
    /// Leg length L (m).
    #[serde(default = "default_length")]
    pub length: f64,
    /// Total charge Q (C).
    #[serde(default = "default_total_charge")]
    pub total_charge: f64,
    /// Point-charge sites per leg.
    #[serde(default = "default_divisions")]
    pub divisions: usize,
}

impl Default for WireConfig {
    fn default() -> Self {
        Self {
            length: default_length(),
            total_charge: default_total_charge(),
            divisions: default_divisions(),
        }
    }
}

fn default_length() -> f64 {
    0.15
}
fn default_total_charge() -> f64 {
    50e-6
}
fn default_divisions() -> usize {
    20
}

/// Observation grid from TOML.
#[derive(Debug, Deserialize)]
pub struct GridConfig {
    /// Side length of the square sampled region (m).
    #[serde(default = "default_extent")]
    pub extent: f64,
    /// Sample points per side.
    #[serde(default = "default_points")]
    pub points: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            extent: default_extent(),
            points: default_points(),
        }
    }
}

fn default_extent() -> f64 {
    0.2
}
fn default_points() -> usize {
    20
}

/// Numerical integration parameters from TOML.
#[derive(Debug, Deserialize)]
pub struct IntegrationConfig {
    /// Radial step dt of the path integral (m).
    #[serde(default = "default_path_step")]
    pub path_step: f64,
    /// Truncation offset of the path integral (m).
    #[serde(default = "default_path_cutoff")]
    pub path_cutoff: f64,
    /// Superposition voltages above this (V) are clamped to zero.
    #[serde(default = "default_clamp_threshold")]
    pub clamp_threshold: f64,
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        Self {
            path_step: default_path_step(),
            path_cutoff: default_path_cutoff(),
            clamp_threshold: default_clamp_threshold(),
        }
    }
}

fn default_path_step() -> f64 {
    0.005
}
fn default_path_cutoff() -> f64 {
    0.5
}
fn default_clamp_threshold() -> f64 {
    1e19
}

/// Output configuration.
#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Output directory (default: "./output").
    #[serde(default = "default_output_dir")]
    pub directory: String,
    /// Whether to save the voltage surfaces and field map as CSV
    /// (default: true).
    #[serde(default = "default_true")]
    pub save_csv: bool,
    /// Whether to also save the full comparison as JSON (default: false).
    #[serde(default)]
    pub save_json: bool,
    /// Whether to print every grid point's voltages to stdout
    /// (default: false).
    #[serde(default)]
    pub print_voltages: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
            save_csv: true,
            save_json: false,
            print_voltages: false,
        }
    }
}

fn default_output_dir() -> String {
    "./output".into()
}
fn default_true() -> bool {
    true
}

/// Load and parse a TOML job configuration file.
pub fn load_config(path: &std::path::Path) -> anyhow::Result<JobConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: JobConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Reject configurations the numeric core would only trip over later.
pub fn validate(job: &JobConfig) -> anyhow::Result<()> {
    if !(job.wire.length > 0.0) || !job.wire.length.is_finite() {
        anyhow::bail!("wire.length must be positive and finite");
    }
    if !job.wire.total_charge.is_finite() {
        anyhow::bail!("wire.total_charge must be finite");
    }
    if job.wire.divisions == 0 {
        anyhow::bail!("wire.divisions must be at least 1");
    }
    if !(job.grid.extent > 0.0) || !job.grid.extent.is_finite() {
        anyhow::bail!("grid.extent must be positive and finite");
    }
    if job.grid.points == 0 {
        anyhow::bail!("grid.points must be at least 1");
    }
    if !(job.integration.path_step > 0.0) {
        anyhow::bail!("integration.path_step must be positive");
    }
    if !(job.integration.path_cutoff > 0.0) {
        anyhow::bail!("integration.path_cutoff must be positive");
    }
    if !(job.integration.clamp_threshold > 0.0) {
        anyhow::bail!("integration.clamp_threshold must be positive");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_yields_demo_defaults() {
        let job: JobConfig = toml::from_str("").unwrap();
        assert_eq!(job.wire.length, 0.15);
        assert_eq!(job.wire.total_charge, 50e-6);
        assert_eq!(job.wire.divisions, 20);
        assert_eq!(job.grid.points, 20);
        assert_eq!(job.integration.path_step, 0.005);
        assert_eq!(job.integration.path_cutoff, 0.5);
        assert!(job.output.save_csv);
        assert!(!job.output.print_voltages);
        assert!(validate(&job).is_ok());
    }

    #[test]
    fn test_partial_overrides() {
        let job: JobConfig = toml::from_str(
            r#"
            [wire]
            divisions = 100

            [output]
            save_json = true
            "#,
        )
        .unwrap();
        assert_eq!(job.wire.divisions, 100);
        assert_eq!(job.wire.length, 0.15);
        assert!(job.output.save_json);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut job = JobConfig::default();
        job.wire.divisions = 0;
        assert!(validate(&job).is_err());

        let mut job = JobConfig::default();
        job.grid.extent = -1.0;
        assert!(validate(&job).is_err());

        let mut job = JobConfig::default();
        job.integration.path_step = 0.0;
        assert!(validate(&job).is_err());
    }
}
