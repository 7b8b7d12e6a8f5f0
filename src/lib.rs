pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::storage::LocalStorage;
pub use config::AgeConfig;
pub use core::{engine::FilterEngine, pipeline::AgeFilterPipeline};
pub use domain::model::{FilterOutcome, Record, RunSummary, SkipReason, SkippedRecord};
pub use utils::error::{FilterError, Result};
