use crate::domain::model::RunSummary;
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

/// Runs extract, transform and load once, in order.
pub struct FilterEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> FilterEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunSummary> {
        tracing::debug!("Extracting users");
        let entries = self.pipeline.extract().await?;

        tracing::debug!("Filtering {} entries", entries.len());
        let outcome = self.pipeline.transform(entries).await?;

        tracing::debug!("Writing {} records", outcome.kept.len());
        let output_path = self.pipeline.load(&outcome).await?;

        Ok(RunSummary {
            input_count: outcome.input_count,
            kept_count: outcome.kept.len(),
            skipped_count: outcome.skipped.len(),
            min_age: outcome.min_age,
            output_path,
        })
    }
}
