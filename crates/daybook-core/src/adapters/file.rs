use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use tracing::info;

use crate::data_source::{SampleSource, SourceError};
use crate::{Sample, SampleBatch, SourceId};

/// Samples stored as a JSON array of `{"timestamp": "...", "price": ...}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_samples(&self) -> Result<SampleBatch, SourceError> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            SourceError::io(format!("failed to read '{}': {e}", self.path.display()))
        })?;

        let samples = parse_samples(&raw)?;
        info!(path = %self.path.display(), points = samples.len(), "loaded samples from file");

        Ok(SampleBatch::new(SourceId::File, samples))
    }
}

impl SampleSource for FileSource {
    fn id(&self) -> SourceId {
        SourceId::File
    }

    fn fetch<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<SampleBatch, SourceError>> + Send + 'a>> {
        Box::pin(self.read_samples())
    }
}

/// Parses the on-disk sample format, keeping file order.
pub fn parse_samples(raw: &str) -> Result<Vec<Sample>, SourceError> {
    let samples: Vec<Sample> = serde_json::from_str(raw)
        .map_err(|e| SourceError::invalid_response(format!("invalid sample file: {e}")))?;

    samples
        .into_iter()
        .map(|sample| Sample::checked(sample.timestamp, sample.price).map_err(SourceError::from))
        .collect()
}
