use anyhow::Result;
use clap::Parser;

use conbuddy::{cli, logging};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Logging is initialized per-command, once the data dir is known
    let cli = cli::Cli::parse();

    let result = cli.execute().await;
    if let Err(e) = &result {
        tracing::error!("Application error: {}", e);
        for cause in e.chain().skip(1) {
            tracing::error!("   Caused by: {}", cause);
        }
    }

    logging::log_session_end();
    result
}
