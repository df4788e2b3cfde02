use clap::Parser;
use listafmt::utils::{logger, validation::Validate};
use listafmt::{CliConfig, FilePipeline, FormatEngine, LocalStorage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting listafmt");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let config = match config.with_overlay() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load job config: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let storage = LocalStorage::new(".".to_string());
    let pipeline = FilePipeline::new(storage, config);
    let engine = FormatEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Formatting completed successfully!");
            println!("✅ Formatting completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("❌ Formatting failed: {} (Severity: {:?})", e, e.severity());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                listafmt::utils::error::ErrorSeverity::Low => 0,
                listafmt::utils::error::ErrorSeverity::Medium => 2,
                listafmt::utils::error::ErrorSeverity::High => 1,
                listafmt::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
