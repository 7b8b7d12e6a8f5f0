//! count-entries: print how many records a JSON result file holds.
//!
//!   COUNT=$(count-entries filtered_users.json)

use age_filter::config::cli::CountEntriesArgs;
use age_filter::core::checks;
use age_filter::utils::{logger, validation::Validate};
use age_filter::LocalStorage;
use anyhow::Context;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CountEntriesArgs::parse();

    logger::init_cli_logger(args.log.verbose, args.log.log_format);
    args.validate()?;

    let storage = LocalStorage::default();
    let count = checks::count_entries(&storage, &args.file)
        .await
        .with_context(|| format!("Failed to count entries in {}", args.file))?;

    tracing::info!("📋 {} contains {} entries", args.file, count);
    println!("{}", count);

    Ok(())
}
