use serde::{Deserialize, Serialize};

use super::{fixed2, SummaryStrategy};
use crate::{DayState, RunningStats, SampleTime};

/// Width of the "normal range" band, in sample standard deviations.
const ALERT_BAND_STD_DEVS: f64 = 2.0;

/// Dispersion-schema output record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispersionRecord {
    pub date: Option<SampleTime>,
    pub price: Option<String>,
    pub daily_average: Option<f64>,
    pub daily_variance: f64,
    pub volatility_alert: bool,
}

/// Intra-day mean, variance and a volatility heuristic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DispersionStrategy {
    samples_this_day: Vec<f64>,
}

impl DispersionStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn samples_this_day(&self) -> &[f64] {
        &self.samples_this_day
    }

    /// Mean of the collected samples, or the current price before any.
    pub fn daily_average(&self, state: &DayState) -> Option<f64> {
        RunningStats::from_slice(&self.samples_this_day)
            .mean()
            .or_else(|| state.current_price())
    }

    /// Sample variance of the collected samples, `0.0` below two samples.
    pub fn daily_variance(&self) -> f64 {
        RunningStats::from_slice(&self.samples_this_day)
            .sample_variance()
            .unwrap_or(0.0)
    }

    /// Whether the latest sample sits strictly inside the ±2σ band of any
    /// earlier prefix of the day.
    ///
    /// Prefixes grow from the first sample and exclude the latest one;
    /// prefixes shorter than two samples are skipped. A constant prefix has a
    /// zero-width band and never matches.
    pub fn volatility_alert(&self) -> bool {
        let Some((&latest, history)) = self.samples_this_day.split_last() else {
            return false;
        };

        let mut window = RunningStats::new();
        for &value in history {
            window.push(value);
            let (Some(mean), Some(std_dev)) = (window.mean(), window.sample_std_dev()) else {
                continue;
            };

            let band = ALERT_BAND_STD_DEVS * std_dev;
            let deviation = latest - mean;
            if -band < deviation && deviation < band {
                return true;
            }
        }

        false
    }
}

impl SummaryStrategy for DispersionStrategy {
    type Record = DispersionRecord;

    fn hourly_update(&mut self, state: &DayState) {
        if let Some(price) = state.current_price() {
            self.samples_this_day.push(price);
        }
    }

    fn day_reset(&mut self) {
        self.samples_this_day.clear();
    }

    fn render(&mut self, state: &DayState) -> DispersionRecord {
        DispersionRecord {
            date: state.current_time(),
            price: state.current_price().map(fixed2),
            daily_average: self.daily_average(state),
            daily_variance: self.daily_variance(),
            volatility_alert: self.volatility_alert(),
        }
    }
}
