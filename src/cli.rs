use crate::config::ProductivityGainMode;
use crate::io::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roitrack")]
#[command(about = "ROI tracking for automation and AI initiatives", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    ///
    /// Logs go to stderr. RUST_LOG overrides this when set.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute savings, ROI and correlations for a project file
    Analyze {
        /// Project JSON file
        project_file: PathBuf,

        /// Output format (defaults to the config's default_format, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to the nearest .roitrack.toml)
        #[arg(long, env = "ROITRACK_CONFIG")]
        config: Option<PathBuf>,

        /// How productivity gains combine across indicators
        #[arg(long, value_enum)]
        productivity_gain: Option<ProductivityGainMode>,

        /// Skip the correlation analysis
        #[arg(long)]
        no_correlation: bool,
    },

    /// Initialize a .roitrack.toml configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },

    /// List indicator types with their fields and visibility flags
    Types {
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Refresh every Post-IA record from its Baseline and save the project
    Inherit {
        /// Project JSON file
        project_file: PathBuf,

        /// Where to write the refreshed project (defaults to overwriting the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
