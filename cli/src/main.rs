use anyhow::{Context, Result};
use clap::Parser;

use nf_cli::{logging, run, Cli};
use nf_shared::{ClientConfig, Environment};

#[tokio::main]
async fn main() -> Result<()> {
    // Environment-specific file first; dotenvy never overrides a set variable.
    dotenvy::from_filename(Environment::from_env().env_file()).ok();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = ClientConfig::from_env();
    cli.apply_overrides(&mut config);

    logging::init(&config.logging)?;
    tracing::debug!(
        environment = %config.environment,
        base_url = %config.api.base_url,
        "Configuration loaded"
    );

    let context = nf_infra::initialize(&config).context("failed to initialize client")?;
    let mut stdout = std::io::stdout().lock();
    run(&cli.command, &context, &config.query, &mut stdout).await
}
