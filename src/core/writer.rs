use crate::domain::model::Record;
use crate::domain::ports::Storage;
use crate::utils::error::Result;

/// Pretty JSON array, two-space indent, non-ASCII left unescaped.
pub fn render_artifact(records: &[Record]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(records)?)
}

pub async fn write_artifact<S: Storage>(storage: &S, path: &str, records: &[Record]) -> Result<()> {
    let bytes = render_artifact(records)?;
    tracing::debug!("Rendered {} records into {} bytes", records.len(), bytes.len());
    storage.write_file(path, &bytes).await
}
