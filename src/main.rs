use anyhow::Context;
use clap::Parser;
use portfolio_page::config::LogFormat;
use portfolio_page::core::ConfigProvider;
use portfolio_page::utils::error::ErrorCategory;
use portfolio_page::utils::{logger, validation::Validate};
use portfolio_page::{
    CliConfig, HttpDataProvider, LocalStorage, PortfolioError, SiteGenerator, TomlConfig,
};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(cli.verbose),
    }

    tracing::info!("Starting portfolio-page");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let outcome = match cli.config.clone() {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match TomlConfig::from_file(&path)
                .with_context(|| format!("Failed to load config file '{}'", path))
            {
                Ok(config) => generate(&config, cli.bootstrap).await,
                Err(e) => Err(e),
            }
        }
        None => generate(&cli, cli.bootstrap).await,
    };

    match outcome {
        Ok(location) => {
            println!("✅ Portfolio page generated!");
            println!("📁 Output saved to: {}", location);
        }
        Err(e) => {
            let exit_code = match e.downcast_ref::<PortfolioError>() {
                Some(err) => {
                    tracing::error!(
                        "❌ Generation failed: {} (Category: {:?}, Severity: {:?})",
                        err,
                        err.category(),
                        err.severity()
                    );
                    eprintln!("❌ {}", err.user_friendly_message());
                    eprintln!("💡 Suggestion: {}", err.recovery_suggestion());
                    exit_code(err.category())
                }
                None => {
                    eprintln!("❌ {:#}", e);
                    1
                }
            };
            std::process::exit(exit_code);
        }
    }
}

/// `--bootstrap` on the command line also applies to TOML configs.
async fn generate<C: ConfigProvider + Validate>(
    config: &C,
    bootstrap_flag: bool,
) -> anyhow::Result<String> {
    config.validate()?;
    tracing::info!("✅ Configuration validated");

    let provider = HttpDataProvider::from_config(config)?;
    let storage = LocalStorage::new(config.output_path().to_string());
    let mut site = SiteGenerator::new(provider, storage, config.output_file())
        .with_bootstrap(bootstrap_flag || config.bootstrap_on_empty());

    Ok(site.run().await?)
}

fn exit_code(category: ErrorCategory) -> i32 {
    match category {
        ErrorCategory::Configuration | ErrorCategory::State => 1,
        ErrorCategory::Network | ErrorCategory::Provider => 2,
        ErrorCategory::Rendering => 3,
    }
}
