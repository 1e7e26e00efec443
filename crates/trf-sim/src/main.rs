use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    mine::{self, MineArgs},
    verify::{self, VerifyArgs},
    version::{self, VersionArgs},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "trf-sim", about = "TRF-Ramsey field miner CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Mine cliques from a growing random field and emit result records.
    Mine(MineArgs),
    /// Re-derive digests of recorded results, optionally replaying the seeded run.
    Verify(VerifyArgs),
    /// Print the tool version.
    Version(VersionArgs),
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    if let Err(err) = dispatch(cli.command) {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn dispatch(command: Command) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Mine(args) => mine::run(&args),
        Command::Verify(args) => verify::run(&args),
        Command::Version(args) => version::run(&args),
    }
}

/// Logs go to stderr so stdout stays reserved for records. `TRF_LOG_FORMAT=json`
/// switches to structured output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("trf_sim=info,trf_mine=info"));
    let json = std::env::var("TRF_LOG_FORMAT").is_ok_and(|format| format == "json");
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
