//! Command-line tools for batpint.
//!
//! The simulator itself is external, so these commands cover everything that
//! can be checked or inspected before a run: parameter and run files, the OCP
//! tables, the kinetic correlations and the protocols.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Lithium-ion cell simulation inputs.
#[derive(Parser)]
#[command(name = "batpint")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect and validate lithium-ion cell simulation inputs", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load and validate OCV tables, parameters and a run configuration
    Check(commands::check::CheckArgs),
    /// Evaluate the open-circuit potential curves
    Ocp(commands::ocp::OcpArgs),
    /// Evaluate the exchange current densities
    Kinetics(commands::kinetics::KineticsArgs),
    /// Print the steps of a protocol
    Protocol(commands::protocol::ProtocolArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Check(args) => commands::check::execute(args),
        Commands::Ocp(args) => commands::ocp::execute(args),
        Commands::Kinetics(args) => commands::kinetics::execute(args),
        Commands::Protocol(args) => commands::protocol::execute(args),
    }
}
