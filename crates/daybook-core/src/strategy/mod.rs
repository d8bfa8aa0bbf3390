//! # Summary Strategies
//!
//! Pluggable statistics policies driven by the [`DailyAccumulator`].
//!
//! | Strategy | Record | Tracks |
//! |----------|--------|--------|
//! | [`TrendStrategy`] | [`TrendRecord`] | day-over-day change, all-time high/low marks |
//! | [`DispersionStrategy`] | [`DispersionRecord`] | intra-day mean, variance, volatility flag |
//!
//! [`DailyAccumulator`]: crate::DailyAccumulator

mod dispersion;
mod trend;

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{CoreError, DailyAccumulator, DayState, EngineConfig, Sample, ValidationError};

pub use dispersion::{DispersionRecord, DispersionStrategy};
pub use trend::{Direction, TrendRecord, TrendStrategy};

/// Hooks the accumulator calls while walking a sample sequence.
///
/// At a day boundary the order is `render`, `day_reset`, then
/// `hourly_update` for the sample that opened the new day.
pub trait SummaryStrategy {
    type Record: Serialize;

    /// Called once for every consumed sample.
    fn hourly_update(&mut self, state: &DayState);

    /// Called right after the boundary record has been rendered.
    fn day_reset(&mut self);

    /// Renders a record from the current state.
    ///
    /// May mutate strategy state (see [`TrendStrategy`]).
    fn render(&mut self, state: &DayState) -> Self::Record;
}

/// Output shape selected at the integration boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Schema {
    Trend,
    Dispersion,
}

impl Schema {
    pub const ALL: [Self; 2] = [Self::Trend, Self::Dispersion];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trend => "trend",
            Self::Dispersion => "dispersion",
        }
    }
}

impl Display for Schema {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Schema {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "trend" => Ok(Self::Trend),
            "dispersion" => Ok(Self::Dispersion),
            other => Err(ValidationError::InvalidSchema {
                value: other.to_owned(),
            }),
        }
    }
}

/// Runs a fresh engine for `schema` over `samples` and serializes every record.
pub fn summarize<I>(
    schema: Schema,
    samples: I,
    config: EngineConfig,
) -> Result<Vec<Value>, CoreError>
where
    I: IntoIterator<Item = Sample>,
{
    match schema {
        Schema::Trend => {
            collect_values(DailyAccumulator::new(TrendStrategy::new(), config), samples)
        }
        Schema::Dispersion => collect_values(
            DailyAccumulator::new(DispersionStrategy::new(), config),
            samples,
        ),
    }
}

fn collect_values<S, I>(
    accumulator: DailyAccumulator<S>,
    samples: I,
) -> Result<Vec<Value>, CoreError>
where
    S: SummaryStrategy,
    I: IntoIterator<Item = Sample>,
{
    accumulator
        .process(samples)
        .map(|record| serde_json::to_value(record).map_err(CoreError::from))
        .collect()
}

/// Fixed-point rendering with exactly two decimals.
pub(crate) fn fixed2(value: f64) -> String {
    format!("{value:.2}")
}
