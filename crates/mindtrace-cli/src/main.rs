use clap::Parser;
use eyre::Result;

use mindtrace_cli::cli::{Cli, Command};
use mindtrace_cli::{commands, config, logging};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };

    if let Command::Init = cli.command {
        logging::init(config::LogFormat::default());
        let mut cfg = config::CliConfig::default();
        if let Some(data) = cli.data {
            cfg.data_path = data;
        }
        return config::save_config(&config_path, &cfg);
    }

    let loaded = config::load_config(&config_path)?;
    let cfg = loaded.config;
    logging::init(cfg.log_format);
    if let Some(from) = loaded.migrated_from {
        tracing::info!(
            path = %config_path.display(),
            from,
            to = config::CURRENT_VERSION,
            "config migrated"
        );
    }

    let data_path = cli.data.unwrap_or_else(|| cfg.data_path.clone());
    let output = commands::execute(cli.command, &cfg, &data_path).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
