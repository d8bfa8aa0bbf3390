use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Duration, OffsetDateTime, PrimitiveDateTime, Weekday};

use crate::ValidationError;

const SAMPLE_TIME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

/// Naive sample timestamp rendered as `YYYY-MM-DDTHH:MM:SS`.
///
/// No offset is carried: sources convert to UTC wall-clock time before
/// constructing one, and records render it back without a suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SampleTime(PrimitiveDateTime);

impl SampleTime {
    pub const fn new(value: PrimitiveDateTime) -> Self {
        Self(value)
    }

    pub fn now_utc() -> Self {
        let now = OffsetDateTime::now_utc();
        Self(PrimitiveDateTime::new(now.date(), now.time()))
    }

    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        PrimitiveDateTime::parse(input.trim(), SAMPLE_TIME_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidTimestamp {
                value: input.to_owned(),
            })
    }

    /// Converts a unix timestamp in milliseconds to UTC wall-clock time.
    pub fn from_unix_millis(millis: i64) -> Result<Self, ValidationError> {
        let nanos = i128::from(millis) * 1_000_000;
        let value = OffsetDateTime::from_unix_timestamp_nanos(nanos)
            .map_err(|_| ValidationError::TimestampOutOfRange { millis })?;

        Ok(Self(PrimitiveDateTime::new(value.date(), value.time())))
    }

    pub fn into_inner(self) -> PrimitiveDateTime {
        self.0
    }

    /// Day-of-month number (1-31).
    pub fn day(self) -> u8 {
        self.0.day()
    }

    pub fn date(self) -> Date {
        self.0.date()
    }

    pub fn weekday_name(self) -> &'static str {
        match self.0.weekday() {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    pub fn saturating_sub_hours(self, hours: i64) -> Self {
        Self(self.0.saturating_sub(Duration::hours(hours)))
    }

    pub fn saturating_add_hours(self, hours: i64) -> Self {
        Self(self.0.saturating_add(Duration::hours(hours)))
    }

    pub fn format(self) -> String {
        self.0
            .format(SAMPLE_TIME_FORMAT)
            .unwrap_or_else(|_| String::from("<unformattable>"))
    }
}

impl From<PrimitiveDateTime> for SampleTime {
    fn from(value: PrimitiveDateTime) -> Self {
        Self(value)
    }
}

impl Display for SampleTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format())
    }
}

impl Serialize for SampleTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format())
    }
}

impl<'de> Deserialize<'de> for SampleTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}
