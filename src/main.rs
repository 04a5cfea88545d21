use clap::Parser;
use farm_monitor::adapters::http;
use farm_monitor::core::ConfigProvider;
use farm_monitor::utils::error::{ErrorSeverity, ReportError};
use farm_monitor::utils::{logger, validation::Validate};
use farm_monitor::{CliConfig, TomlConfig};

fn exit_code(e: &ReportError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn fail(e: ReportError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(exit_code(&e).max(1));
}

async fn run<C: ConfigProvider + Validate>(config: C) {
    if let Err(e) = config.validate() {
        fail(e);
    }
    tracing::info!("✅ Configuration validated");

    if let Err(e) = http::serve(&config).await {
        fail(e);
    }
}

#[actix_web::main]
async fn main() {
    let cli = CliConfig::parse();

    // TOML 設定檔存在時取代命令列的來源與伺服器設定
    match cli.config.clone() {
        Some(path) => {
            let config = match TomlConfig::from_file(&path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(1);
                }
            };
            let logging = config.logging();
            logger::init_logger(cli.verbose || logging.verbose, cli.json_logs || logging.json);
            tracing::info!("📁 Loaded configuration from: {}", path);
            run(config).await;
        }
        None => {
            logger::init_logger(cli.verbose, cli.json_logs);
            tracing::debug!("CLI config: {:?}", cli);
            run(cli).await;
        }
    }
}
