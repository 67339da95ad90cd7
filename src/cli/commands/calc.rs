//! One-shot consignment price calculation

use anyhow::{anyhow, Result};
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::warn;

use crate::cli::parse_tax_rate;
use crate::data_paths::DataPaths;
use crate::export;
use crate::logging::{init_logging, LogMode, LoggingConfig};
use crate::pricing::{consignment_value, group_digits, normalize, TaxRate};

#[derive(Args, Clone)]
pub struct CalcArgs {
    /// Desired board price; digit grouping is accepted (e.g. 1,000,000)
    pub price: String,

    /// Daily tax rate percentage (0-6)
    #[arg(short, long, default_value = "0", value_parser = parse_tax_rate)]
    pub tax: TaxRate,

    /// Emit machine-readable JSON instead of formatted text
    #[arg(long)]
    pub json: bool,

    /// Copy the raw consignment price to the clipboard
    #[arg(long)]
    pub copy: bool,
}

#[derive(Serialize)]
struct CalcOutput<'a> {
    desired: &'a str,
    tax_rate: u8,
    consignment: Option<u64>,
    display: Option<String>,
}

pub struct CalcCommand {
    args: CalcArgs,
}

impl CalcCommand {
    pub fn new(args: CalcArgs) -> Self {
        Self { args }
    }

    pub async fn execute(&self, data_paths: DataPaths) -> Result<()> {
        init_logging(LoggingConfig::new(LogMode::ConsoleAndFile, data_paths))?;

        let desired = normalize(&self.args.price)
            .ok_or_else(|| anyhow!("'{}' is not a valid price", self.args.price))?;

        let value = consignment_value(&desired, self.args.tax);
        let display = value.map(|v| group_digits(&v.to_string()));

        if self.args.json {
            let output = CalcOutput {
                desired: &desired,
                tax_rate: self.args.tax.percent(),
                consignment: value,
                display: display.clone(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            self.print_report(&desired, &display);
        }

        if self.args.copy {
            match &display {
                Some(formatted) => match export::copy_to_clipboard(formatted) {
                    Ok(raw) => {
                        if !self.args.json {
                            println!("📋 Copied {} to clipboard", raw.bright_white());
                        }
                    }
                    Err(e) => warn!("failed to copy to clipboard: {}", e),
                },
                None => warn!("nothing to copy, no consignment price was computed"),
            }
        }

        Ok(())
    }

    fn print_report(&self, desired: &str, display: &Option<String>) {
        println!("{}", "🧮 Consignment Buddy".bright_blue().bold());
        println!("═══════════════════════════════════════");
        println!("   Desired board price: {}", desired.bright_white());
        println!(
            "   Today's tax:         {}",
            self.args.tax.to_string().bright_cyan()
        );
        println!("   ───────────────────────────────────");

        match display {
            Some(formatted) => {
                println!(
                    "   Consignment price:   {}",
                    formatted.bright_green().bold()
                );
                println!(
                    "   Raw (for listing):   {}",
                    crate::pricing::strip_separators(formatted)
                );
            }
            None => {
                println!(
                    "   {}",
                    "No consignment price: desired price must be greater than zero".yellow()
                );
            }
        }
    }
}
