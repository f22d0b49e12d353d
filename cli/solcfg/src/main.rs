//! solcfg CLI — manage Solidity compiler configuration files.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "solcfg", version, about = "Solidity compiler configuration toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a solc.config.json in the current directory
    Init {
        /// Compiler release to pin (e.g., 0.8.24)
        #[arg(long)]
        compiler: Option<String>,
    },
    /// Validate a configuration file
    Check {
        /// Path to the configuration file (default: nearest solc.config.json)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Display a configuration file
    Show {
        /// Path to the configuration file (default: nearest solc.config.json)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print raw JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// EVM fork target information
    Evm {
        #[command(subcommand)]
        action: EvmAction,
    },
}

#[derive(Subcommand)]
enum EvmAction {
    /// List the EVM forks solc can target
    List,
}

fn main() {
    let cli = Cli::parse();

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    match cli.command {
        Commands::Init { compiler } => commands::init::run(&cwd, compiler.as_deref()),
        Commands::Check { config } => commands::check::run(&cwd, config.as_deref()),
        Commands::Show { config, json } => commands::show::run(&cwd, config.as_deref(), json),
        Commands::Evm { action } => match action {
            EvmAction::List => commands::evm::list(),
        },
    }
}
