use anyhow::Result;
use clap::Parser;
use farm_monitor::utils::{logger, validation::Validate};
use farm_monitor::{CliConfig, ReportService, SheetReportSource, TomlConfig};

/// Fetches the report sheet once and prints the reports endpoint body.
#[tokio::main]
async fn main() -> Result<()> {
    let config = CliConfig::parse();
    logger::init_logger(config.verbose, config.json_logs);

    let source = match &config.config {
        Some(path) => {
            let toml_config = TomlConfig::from_file(path)?;
            toml_config.validate()?;
            SheetReportSource::from_config(&toml_config)?
        }
        None => {
            config.validate()?;
            SheetReportSource::from_config(&config)?
        }
    };
    tracing::info!("📡 Fetching reports from: {}", source.url());

    let response = ReportService::from_source(source).serve_reports().await;
    println!("{}", serde_json::to_string_pretty(&response)?);

    if response.is_error() {
        std::process::exit(1);
    }
    Ok(())
}
