pub mod checks;
pub mod engine;
pub mod filter;
pub mod loader;
pub mod pipeline;
pub mod writer;

pub use crate::domain::model::{FilterOutcome, Record, RunSummary};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
