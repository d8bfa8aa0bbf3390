use std::future::Future;
use std::pin::Pin;

use tracing::info;

use crate::data_source::{SampleSource, SourceError};
use crate::{Sample, SampleBatch, SampleTime, SourceId};

/// Thirty days of hourly points.
pub const DEFAULT_SYNTHETIC_POINTS: usize = 30 * 24;

/// Random hourly prices for offline runs.
///
/// Produces `points` samples spaced one hour apart, the last one hour before
/// `end`. Each price is an integer drawn uniformly from `0..points`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticSource {
    points: usize,
    end: Option<SampleTime>,
    seed: Option<u64>,
}

impl Default for SyntheticSource {
    fn default() -> Self {
        Self::new(DEFAULT_SYNTHETIC_POINTS)
    }
}

impl SyntheticSource {
    pub fn new(points: usize) -> Self {
        Self {
            points,
            end: None,
            seed: None,
        }
    }

    /// Pins the series end instead of using the current time.
    pub fn with_end(mut self, end: SampleTime) -> Self {
        self.end = Some(end);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn points(&self) -> usize {
        self.points
    }

    pub fn generate(&self) -> Vec<Sample> {
        let end = self.end.unwrap_or_else(SampleTime::now_utc);
        let mut rng = match self.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };

        let total = i64::try_from(self.points).unwrap_or(i64::MAX);
        (0..total)
            .map(|index| {
                let timestamp = end.saturating_sub_hours(total - index);
                let price = rng.usize(0..self.points) as f64;
                Sample::new(timestamp, price)
            })
            .collect()
    }
}

impl SampleSource for SyntheticSource {
    fn id(&self) -> SourceId {
        SourceId::Synthetic
    }

    fn fetch<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<SampleBatch, SourceError>> + Send + 'a>> {
        Box::pin(async move {
            let samples = self.generate();
            info!(
                points = samples.len(),
                seeded = self.seed.is_some(),
                "generated synthetic samples"
            );
            Ok(SampleBatch::new(SourceId::Synthetic, samples))
        })
    }
}
