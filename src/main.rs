use age_filter::utils::{logger, validation::Validate};
use age_filter::{AgeFilterPipeline, CliConfig, FilterEngine, LocalStorage};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.log.verbose, config.log.log_format);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let pipeline = AgeFilterPipeline::new(LocalStorage::default(), config);
    let engine = FilterEngine::new(pipeline);

    match engine.run().await {
        Ok(summary) => {
            tracing::info!("📊 Summary:");
            tracing::info!("   Original users: {}", summary.input_count);
            tracing::info!("   Filtered users: {}", summary.kept_count);
            if summary.skipped_count > 0 {
                tracing::info!("   Skipped users: {}", summary.skipped_count);
            }
            tracing::info!("   Age threshold: >= {}", summary.min_age);
            tracing::info!("   Output file: {}", summary.output_path);
        }
        Err(e) => {
            tracing::error!("❌ Process failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
