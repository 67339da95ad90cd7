//! Interactive calculator command
//!
//! Launches the full-screen TUI. Logging is file-only while the interface
//! owns the terminal, and a panic hook restores the terminal state before
//! the panic is resurfaced.

use anyhow::Result;
use clap::Args;
use futures::FutureExt;
use std::io;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, LeaveAlternateScreen},
};

use crate::data_paths::DataPaths;
use crate::logging::{init_logging, LogMode, LoggingConfig};

#[derive(Args, Clone)]
pub struct TuiArgs {
    /// UI tick interval in milliseconds
    #[arg(long, default_value = "100")]
    pub tick_rate: u64,
}

pub struct TuiCommand {
    args: TuiArgs,
}

impl TuiCommand {
    pub fn new(args: TuiArgs) -> Self {
        Self { args }
    }

    pub async fn execute(&self, data_paths: DataPaths) -> Result<()> {
        // File-only logging: the TUI owns the terminal from here on
        let logging_config = LoggingConfig::new(LogMode::FileOnly, data_paths);
        let log_file = logging_config.log_file_path();
        init_logging(logging_config)?;

        println!("🧮 Starting Consignment Buddy");
        println!("💡 Keys: 0-9/. edit | +/− tax | Enter: Confirm | c: Copy | q: Quit");
        println!("📄 Logs: {}", log_file.display());

        // Small delay to let user see the message
        tokio::time::sleep(Duration::from_millis(300)).await;

        // Set up panic hook for proper terminal cleanup
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(panic_info);
        }));

        let tick_rate = Duration::from_millis(self.args.tick_rate.max(10));
        let result = std::panic::AssertUnwindSafe(crate::tui::run(tick_rate))
            .catch_unwind()
            .await;

        match result {
            Ok(run_result) => run_result,
            Err(panic) => {
                let _ = disable_raw_mode();
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                std::panic::resume_unwind(panic)
            }
        }
    }
}
