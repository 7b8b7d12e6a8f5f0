//! validate-files: check that the files a CI step depends on are in place.
//!
//! Usage:
//!   validate-files users.json config.json
//!   validate-files --json users.json

use age_filter::config::cli::ValidateFilesArgs;
use age_filter::core::checks;
use age_filter::utils::{logger, validation::Validate};
use clap::Parser;

fn main() {
    let args = ValidateFilesArgs::parse();

    logger::init_cli_logger(args.log.verbose, args.log.log_format);

    if let Err(e) = args.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let results = checks::check_files(&args.files, args.json);
    let failed = results.iter().filter(|check| !check.is_ok()).count();

    for check in &results {
        if check.is_ok() {
            tracing::info!("✅ {}", check);
        } else {
            tracing::error!("❌ {}", check);
        }
    }

    if failed > 0 {
        eprintln!("❌ {} of {} required files failed validation", failed, results.len());
        std::process::exit(1);
    }

    tracing::info!("✅ All {} required files are present", results.len());
}
