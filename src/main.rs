//! Traffic Footprint CLI
//!
//! Extracts per-action traffic features from capture traces and writes
//! default-vs-overlay comparison reports.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use traffic_footprint::commands::{
    display_features, display_version, execute_compare, extract_single, validate_args, CompareArgs,
};

/// Traffic Footprint - per-action traffic features, default vs overlay
#[derive(Parser, Debug)]
#[command(name = "traffic-footprint")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute comparison reports for every app and feature
    Compare {
        /// Run config (TOML)
        #[arg(short, long, default_value = "footprint.toml", env = "FOOTPRINT_CONFIG")]
        config: PathBuf,

        /// Iterations per action and condition (overrides config)
        #[arg(short, long)]
        iterations: Option<usize>,

        /// Output folder for reports (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Feature to compute; repeat for several (default: all)
        #[arg(short, long = "feature")]
        features: Vec<String>,

        /// Worker threads
        #[arg(short, long)]
        jobs: Option<usize>,

        /// Print text tables to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Compute one feature of one trace file
    Extract {
        /// Trace file (tab-separated capture export)
        #[arg(short, long)]
        trace: PathBuf,

        /// Feature name, e.g. "Avg In Pack"
        #[arg(short, long)]
        feature: String,

        /// Address of the device under test
        #[arg(short, long)]
        local_ip: String,
    },

    /// List available features
    Features,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Compare {
            config,
            iterations,
            output,
            features,
            jobs,
            summary,
        } => {
            let args = CompareArgs {
                config,
                iterations,
                output_dir: output,
                features,
                jobs,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            execute_compare(args)?;
        }

        Commands::Extract {
            trace,
            feature,
            local_ip,
        } => {
            extract_single(&trace, &feature, &local_ip)?;
        }

        Commands::Features => {
            display_features();
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
