//! # Daily Accumulator
//!
//! Single-pass state machine that walks an ascending sample sequence, asks
//! the active [`SummaryStrategy`] to render a record at every day boundary,
//! and renders one trailing record once the input is exhausted.
//!
//! ```rust
//! use daybook_core::{DailyAccumulator, EngineConfig, TrendStrategy};
//!
//! let records: Vec<_> = DailyAccumulator::new(TrendStrategy::new(), EngineConfig::default())
//!     .process(Vec::new())
//!     .collect();
//! assert_eq!(records.len(), 1);
//! ```
//!
//! Input must be non-decreasing in time. Out-of-order samples are not
//! rejected; they only produce wrong boundaries.

mod state;

use std::iter::FusedIterator;

use tracing::debug;

use crate::{EmptyInput, EngineConfig, FinalUpdate, Sample, SummaryStrategy};

pub use state::DayState;

/// Engine driving one strategy over one sample sequence.
#[derive(Debug, Clone)]
pub struct DailyAccumulator<S> {
    strategy: S,
    config: EngineConfig,
    state: DayState,
}

impl<S: SummaryStrategy> DailyAccumulator<S> {
    pub fn new(strategy: S, config: EngineConfig) -> Self {
        Self {
            strategy,
            config,
            state: DayState::default(),
        }
    }

    /// Consumes the accumulator and returns the lazy record sequence.
    ///
    /// Records are produced as the caller pulls them. Dropping the iterator
    /// early simply stops processing.
    pub fn process<I>(self, samples: I) -> Records<S, I::IntoIter>
    where
        I: IntoIterator<Item = Sample>,
    {
        Records {
            accumulator: self,
            samples: samples.into_iter(),
            finished: false,
        }
    }

    pub fn state(&self) -> &DayState {
        &self.state
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Consumes one sample, returning the boundary record if it opened a day.
    fn step(&mut self, sample: Sample) -> Option<S::Record> {
        self.state.current = Some(sample);

        let record = if self.state.is_day_boundary(self.config.day_boundary) {
            debug!(
                timestamp = %sample.timestamp,
                price = sample.price,
                "day boundary"
            );
            let record = self.strategy.render(&self.state);
            self.strategy.day_reset();
            self.state.start_of_day_price = Some(sample.price);
            Some(record)
        } else {
            None
        };

        self.strategy.hourly_update(&self.state);
        self.state.previous = Some(sample);

        record
    }

    /// Renders the trailing record, or nothing for suppressed empty input.
    fn finish(&mut self) -> Option<S::Record> {
        if self.state.previous.is_none() && self.config.empty_input == EmptyInput::Suppress {
            debug!("empty input, trailing record suppressed");
            return None;
        }

        if self.config.final_update == FinalUpdate::Repeat {
            self.strategy.hourly_update(&self.state);
        }

        debug!(
            timestamp = ?self.state.current_time().map(|ts| ts.format()),
            "end of input, rendering trailing record"
        );
        Some(self.strategy.render(&self.state))
    }
}

/// Lazy record sequence produced by [`DailyAccumulator::process`].
#[derive(Debug)]
pub struct Records<S, I> {
    accumulator: DailyAccumulator<S>,
    samples: I,
    finished: bool,
}

impl<S, I> Records<S, I> {
    /// Accumulator state after the samples pulled so far.
    pub fn state(&self) -> &DayState {
        &self.accumulator.state
    }
}

impl<S, I> Iterator for Records<S, I>
where
    S: SummaryStrategy,
    I: Iterator<Item = Sample>,
{
    type Item = S::Record;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        for sample in self.samples.by_ref() {
            if let Some(record) = self.accumulator.step(sample) {
                return Some(record);
            }
        }

        self.finished = true;
        self.accumulator.finish()
    }
}

impl<S, I> FusedIterator for Records<S, I>
where
    S: SummaryStrategy,
    I: Iterator<Item = Sample>,
{
}
