//! read-config: print the minimum age from a JSON configuration file.
//!
//! The value goes to stdout so a shell step can capture it:
//!   MIN_AGE=$(read-config ci-config.json)

use age_filter::config::cli::ReadConfigArgs;
use age_filter::utils::{logger, validation::Validate};
use age_filter::AgeConfig;
use clap::Parser;

fn main() {
    let args = ReadConfigArgs::parse();

    logger::init_cli_logger(args.log.verbose, args.log.log_format);

    if let Err(e) = args.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    match AgeConfig::from_file(&args.config) {
        Ok(config) => {
            tracing::info!(
                "✅ Minimum age from {} ({}): {}",
                args.config,
                config.key,
                config.age_minimum
            );
            println!("{}", config.age_minimum);
        }
        Err(e) => {
            tracing::error!("❌ Failed to read {}: {}", args.config, e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
