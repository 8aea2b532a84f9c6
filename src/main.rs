use anyhow::Result;
use clap::Parser;
use roitrack::cli::{Cli, Commands};
use roitrack::commands;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbosity);

    match cli.command {
        Commands::Analyze {
            project_file,
            format,
            output,
            config,
            productivity_gain,
            no_correlation,
        } => commands::analyze::analyze_project(commands::analyze::AnalyzeConfig {
            project_file,
            format,
            output,
            config,
            productivity_gain,
            no_correlation,
        }),
        Commands::Init { force } => commands::init::init_config(force),
        Commands::Types { format } => commands::types::list_types(format),
        Commands::Inherit {
            project_file,
            output,
        } => commands::inherit::inherit_project(project_file, output),
    }
}

/// Logs go to stderr so JSON on stdout stays machine-readable.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("roitrack={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
