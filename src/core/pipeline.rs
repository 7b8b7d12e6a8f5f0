use crate::core::{filter, loader, writer};
use crate::domain::model::{FilterOutcome, Record};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::Result;

pub struct AgeFilterPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> AgeFilterPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for AgeFilterPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Record>> {
        tracing::info!("🔍 Reading users from: {}", self.config.input_path());
        let entries = loader::load_entries(&self.storage, self.config.input_path()).await?;
        tracing::info!("📋 Loaded {} users from JSON file", entries.len());
        Ok(entries)
    }

    async fn transform(&self, entries: Vec<Record>) -> Result<FilterOutcome> {
        let min_age = self.config.min_age();
        let outcome = filter::filter_by_age(entries, min_age);

        for skipped in &outcome.skipped {
            tracing::warn!(index = skipped.index, "Warning: {}", skipped);
        }

        tracing::info!(
            "🎯 Found {} users >= {} years old",
            outcome.kept.len(),
            min_age
        );
        Ok(outcome)
    }

    async fn load(&self, outcome: &FilterOutcome) -> Result<String> {
        let output_path = self.config.output_path();
        writer::write_artifact(&self.storage, output_path, &outcome.kept).await?;
        tracing::info!("✅ JSON artifact created: {}", output_path);
        Ok(output_path.to_string())
    }
}
