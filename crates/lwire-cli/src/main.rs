//! lwire command-line interface.
//!
//! Run comparisons from TOML job files:
//! ```sh
//! lwire-cli run jobs/l_charge.toml
//! lwire-cli validate jobs/l_charge.toml
//! lwire-cli legend
//! ```
//! Running without a job file uses the classroom demo defaults.

mod config;
mod runner;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lwire-cli")]
#[command(about = "lwire: L-shaped charged wire potential comparison")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a comparison, from a TOML job file or the built-in defaults.
    Run {
        /// Path to the job configuration file (optional).
        config: Option<PathBuf>,
        /// Output directory (overrides config file setting).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a configuration file without running the comparison.
    Validate {
        /// Path to the job configuration file.
        config: PathBuf,
    },
    /// Print the marker/colour key and exit.
    Legend,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config, output } => {
            println!("The L Charge");
            println!("============");
            let job = match &config {
                Some(path) => {
                    let job = config::load_config(path)?;
                    println!("Configuration: {}", path.display());
                    job
                }
                None => {
                    println!("Configuration: built-in defaults");
                    config::JobConfig::default()
                }
            };
            config::validate(&job)?;

            runner::print_legend();
            let result = runner::run_comparison(&job)?;

            let out_dir = output.unwrap_or_else(|| PathBuf::from(&job.output.directory));

            if job.output.save_csv {
                runner::write_potentials_csv(&result, &out_dir.join("potentials.csv"))?;
                runner::write_field_csv(&result, &out_dir.join("field.csv"))?;
            }
            if job.output.save_json {
                runner::write_comparison_json(&result, &out_dir.join("comparison.json"))?;
            }

            println!("Comparison complete.");
            Ok(())
        }
        Commands::Validate { config } => {
            let job = config::load_config(&config)?;
            config::validate(&job)?;
            println!("Configuration is valid: {}", config.display());
            Ok(())
        }
        Commands::Legend => {
            runner::print_legend();
            Ok(())
        }
    }
}
