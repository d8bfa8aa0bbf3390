//! Engine configuration.
//!
//! Defaults keep the legacy record semantics, quirks included. Each enum
//! documents the alternative it offers.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{CoreError, SampleTime, SourceError};

/// How the engine decides that two consecutive samples fall on different days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DayBoundaryRule {
    /// Compare the day-of-month number only.
    ///
    /// The 15th of January and the 15th of February compare equal, so a gap
    /// of exactly one month between two samples is not a boundary.
    #[default]
    DayOfMonth,
    /// Compare full calendar dates.
    CalendarDate,
}

impl DayBoundaryRule {
    pub fn same_day(self, previous: SampleTime, current: SampleTime) -> bool {
        match self {
            Self::DayOfMonth => previous.day() == current.day(),
            Self::CalendarDate => previous.date() == current.date(),
        }
    }
}

/// What happens to the last sample once the input is exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FinalUpdate {
    /// Apply the per-sample update to the last sample a second time before
    /// the trailing record is rendered.
    #[default]
    Repeat,
    /// Render the trailing record straight away.
    Skip,
}

/// Behaviour for a sequence with no samples at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyInput {
    /// Emit one trailing record with every field absent.
    #[default]
    Emit,
    /// Emit nothing.
    Suppress,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct EngineConfig {
    pub day_boundary: DayBoundaryRule,
    pub final_update: FinalUpdate,
    pub empty_input: EmptyInput,
}

impl EngineConfig {
    pub fn with_day_boundary(mut self, day_boundary: DayBoundaryRule) -> Self {
        self.day_boundary = day_boundary;
        self
    }

    pub fn with_final_update(mut self, final_update: FinalUpdate) -> Self {
        self.final_update = final_update;
        self
    }

    pub fn with_empty_input(mut self, empty_input: EmptyInput) -> Self {
        self.empty_input = empty_input;
        self
    }

    pub fn from_json_str(input: &str) -> Result<Self, CoreError> {
        serde_json::from_str(input).map_err(CoreError::from)
    }

    /// Loads a JSON config file. Missing keys keep their defaults.
    pub fn from_path(path: &Path) -> Result<Self, CoreError> {
        let raw = std::fs::read_to_string(path).map_err(|error| {
            SourceError::io(format!(
                "failed to read config '{}': {error}",
                path.display()
            ))
        })?;
        Self::from_json_str(&raw)
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn defaults_keep_legacy_semantics() {
        let config = EngineConfig::default();
        assert_eq!(config.day_boundary, DayBoundaryRule::DayOfMonth);
        assert_eq!(config.final_update, FinalUpdate::Repeat);
        assert_eq!(config.empty_input, EmptyInput::Emit);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = EngineConfig::from_json_str(r#"{"day_boundary":"calendar-date"}"#)
            .expect("valid config");
        assert_eq!(config.day_boundary, DayBoundaryRule::CalendarDate);
        assert_eq!(config.final_update, FinalUpdate::Repeat);
    }

    #[test]
    fn rejects_unknown_rule() {
        assert!(EngineConfig::from_json_str(r#"{"final_update":"twice"}"#).is_err());
    }

    #[test]
    fn day_of_month_rule_ignores_month() {
        let jan = SampleTime::new(datetime!(2024-01-15 09:00));
        let feb = SampleTime::new(datetime!(2024-02-15 09:00));

        assert!(DayBoundaryRule::DayOfMonth.same_day(jan, feb));
        assert!(!DayBoundaryRule::CalendarDate.same_day(jan, feb));
    }
}
