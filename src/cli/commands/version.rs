//! Version command

use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;

use crate::data_paths::DataPaths;

#[derive(Args, Clone)]
pub struct VersionArgs {}

pub struct VersionCommand {
    _args: VersionArgs,
}

impl VersionCommand {
    pub fn new(args: VersionArgs) -> Self {
        Self { _args: args }
    }

    pub async fn execute(&self, data_paths: DataPaths) -> Result<()> {
        println!(
            "{} v{}",
            env!("CARGO_PKG_NAME").bright_blue().bold(),
            env!("CARGO_PKG_VERSION").bright_green()
        );
        println!("{}", env!("CARGO_PKG_DESCRIPTION"));
        println!();
        println!(
            "  Profile:  {}",
            if cfg!(debug_assertions) { "debug" } else { "release" }
        );
        println!("  Data dir: {}", data_paths.root().display());
        println!("  Logs:     {}", data_paths.logs().display());

        Ok(())
    }
}
