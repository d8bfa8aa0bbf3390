use crate::{DayBoundaryRule, Sample, SampleTime};

/// Accumulator state shared with strategies on every hook call.
///
/// `previous` is `None` until the first sample has been consumed and
/// `start_of_day_price` is `None` until the first day boundary, which is the
/// first sample itself.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DayState {
    pub current: Option<Sample>,
    pub previous: Option<Sample>,
    pub start_of_day_price: Option<f64>,
}

impl DayState {
    pub fn current_price(&self) -> Option<f64> {
        self.current.map(|sample| sample.price)
    }

    pub fn current_time(&self) -> Option<SampleTime> {
        self.current.map(|sample| sample.timestamp)
    }

    /// Whether `current` opens a new day relative to `previous`.
    ///
    /// Must be called after `current` is set and before `previous` moves.
    pub fn is_day_boundary(&self, rule: DayBoundaryRule) -> bool {
        match (self.previous, self.current) {
            (None, _) => true,
            (Some(previous), Some(current)) => {
                !rule.same_day(previous.timestamp, current.timestamp)
            }
            (Some(_), None) => false,
        }
    }
}
