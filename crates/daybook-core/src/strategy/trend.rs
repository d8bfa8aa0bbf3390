use serde::{Deserialize, Serialize};

use super::{fixed2, SummaryStrategy};
use crate::{DayState, SampleTime};

/// Sign of the change since the start of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Same,
}

impl Direction {
    pub fn from_change(change: f64) -> Self {
        if change > 0.0 {
            Self::Up
        } else if change < 0.0 {
            Self::Down
        } else {
            Self::Same
        }
    }
}

/// Trend-schema output record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendRecord {
    pub date: Option<SampleTime>,
    pub price: Option<String>,
    pub direction: Option<Direction>,
    pub change: Option<String>,
    pub day_of_week: Option<String>,
    pub high_since_start: Option<bool>,
    pub low_since_start: Option<bool>,
}

/// Day-over-day change plus all-time high/low-water marks.
///
/// The marks are seeded by the first render and never reset at day
/// boundaries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrendStrategy {
    max_seen: Option<f64>,
    min_seen: Option<f64>,
}

impl TrendStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_seen(&self) -> Option<f64> {
        self.max_seen
    }

    pub fn min_seen(&self) -> Option<f64> {
        self.min_seen
    }

    pub fn day_of_week(state: &DayState) -> Option<&'static str> {
        state.current_time().map(SampleTime::weekday_name)
    }

    /// Current price minus the price that opened the day.
    pub fn change(state: &DayState) -> Option<f64> {
        Some(state.current_price()? - state.start_of_day_price?)
    }

    /// Two-decimal rendering of [`Self::change`]; a zero change renders as
    /// absent while [`Self::direction`] still reports `Same`.
    pub fn rendered_change(state: &DayState) -> Option<String> {
        Self::change(state)
            .filter(|change| *change != 0.0)
            .map(fixed2)
    }

    pub fn direction(state: &DayState) -> Option<Direction> {
        Self::change(state).map(Direction::from_change)
    }

    /// Checks the current price against the high-water mark and commits a
    /// new high.
    ///
    /// Not a pure query: the first call seeds the mark and returns `None`,
    /// later calls return `Some(true)` exactly once per new high. Calling it
    /// twice for the same price therefore answers differently.
    pub fn update_high_since_start(&mut self, state: &DayState) -> Option<bool> {
        let price = state.current_price()?;
        match self.max_seen {
            None => {
                self.max_seen = Some(price);
                None
            }
            Some(max) if price > max => {
                self.max_seen = Some(price);
                Some(true)
            }
            Some(_) => Some(false),
        }
    }

    /// Low-water counterpart of [`Self::update_high_since_start`].
    pub fn update_low_since_start(&mut self, state: &DayState) -> Option<bool> {
        let price = state.current_price()?;
        match self.min_seen {
            None => {
                self.min_seen = Some(price);
                None
            }
            Some(min) if price < min => {
                self.min_seen = Some(price);
                Some(true)
            }
            Some(_) => Some(false),
        }
    }
}

impl SummaryStrategy for TrendStrategy {
    type Record = TrendRecord;

    fn hourly_update(&mut self, _state: &DayState) {}

    fn day_reset(&mut self) {}

    fn render(&mut self, state: &DayState) -> TrendRecord {
        TrendRecord {
            date: state.current_time(),
            price: state.current_price().map(fixed2),
            direction: Self::direction(state),
            change: Self::rendered_change(state),
            day_of_week: Self::day_of_week(state).map(String::from),
            high_since_start: self.update_high_since_start(state),
            low_since_start: self.update_low_since_start(state),
        }
    }
}
