use anyhow::Context;
use clap::Parser;

use conductor_config::ConductorConfig;
use conductor_db::pipeline::{self, SaveRequest};

mod cli;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("save-spec error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let mut config =
        ConductorConfig::load_with_dotenv().context("failed to load configuration")?;
    cli.apply_overrides(&mut config);
    config.validate().context("invalid configuration")?;

    let request = SaveRequest::from_config(&config);
    tracing::info!(
        file = %request.file.display(),
        endpoint = config.database.endpoint(),
        "saving spec"
    );

    let receipt = pipeline::run(&config.database, &request)
        .await
        .with_context(|| format!("failed to save {}", request.file.display()))?;

    println!("{}", output::render(&receipt, cli.format)?);
    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("CONDUCTOR_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
