//! CLI module for Consignment Buddy
//!
//! Argument parsing via clap with one Args/Command struct pair per
//! subcommand; `Cli::execute` dispatches after the shared data
//! directories exist.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod args;
pub mod commands;

pub use args::parse_tax_rate;
use crate::data_paths::{DataPaths, DEFAULT_DATA_DIR};

use commands::calc::{CalcArgs, CalcCommand};
use commands::install::{InstallArgs, InstallCommand};
use commands::tui::{TuiArgs, TuiCommand};
use commands::version::{VersionArgs, VersionCommand};

#[derive(Parser)]
#[command(name = "conbuddy")]
#[command(version)]
#[command(about = "Consignment price calculator for marketplace sellers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory path (default: ./data)
    #[arg(long, global = true, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute a consignment price once and exit
    Calc(CalcArgs),

    /// Launch the interactive calculator
    Tui(TuiArgs),

    /// Install conbuddy system-wide for easy access
    Install(InstallArgs),

    /// Show version information
    Version(VersionArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let data_paths = DataPaths::new(&self.data_dir);

        // Ensure all directories exist
        data_paths.ensure_directories()?;

        match self.command {
            Commands::Calc(args) => CalcCommand::new(args).execute(data_paths).await,
            Commands::Tui(args) => TuiCommand::new(args).execute(data_paths).await,
            Commands::Install(args) => InstallCommand::new(args).execute(data_paths).await,
            Commands::Version(args) => VersionCommand::new(args).execute(data_paths).await,
        }
    }
}
