use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use deferred_view::config::Config;
use deferred_view::logging::init_tracing;
use deferred_view::ui::app::DemoOptions;
use deferred_view::ui::runtime;

/// Terminal demo of deferred-loading panels.
#[derive(Debug, Parser)]
#[command(name = "deferred-view", version, about)]
struct Cli {
    /// Simulated module load time in milliseconds.
    #[arg(long, default_value_t = 1500)]
    delay_ms: u64,

    /// Make the simulated load fail.
    #[arg(long)]
    fail: bool,

    /// Config file (default: the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let options = DemoOptions {
        delay: Duration::from_millis(cli.delay_ms),
        fail: cli.fail,
    };
    runtime::run(&config, options).await?;
    Ok(())
}
