use serde::{Deserialize, Serialize};

use crate::{SampleTime, SourceId, ValidationError};

/// One `(timestamp, price)` observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub timestamp: SampleTime,
    pub price: f64,
}

impl Sample {
    pub const fn new(timestamp: SampleTime, price: f64) -> Self {
        Self { timestamp, price }
    }

    /// Builds a sample, rejecting NaN and infinite prices.
    pub fn checked(timestamp: SampleTime, price: f64) -> Result<Self, ValidationError> {
        if !price.is_finite() {
            return Err(ValidationError::NonFiniteValue { field: "price" });
        }

        Ok(Self::new(timestamp, price))
    }
}

/// Ordered sample sequence produced by a single source fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleBatch {
    pub source: SourceId,
    pub samples: Vec<Sample>,
}

impl SampleBatch {
    pub fn new(source: SourceId, samples: Vec<Sample>) -> Self {
        Self { source, samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Whether timestamps are non-decreasing, the engine's input precondition.
    pub fn is_ascending(&self) -> bool {
        self.samples
            .windows(2)
            .all(|pair| pair[0].timestamp <= pair[1].timestamp)
    }

    /// Index of the first sample that is earlier than its predecessor.
    pub fn first_out_of_order(&self) -> Option<usize> {
        self.samples
            .windows(2)
            .position(|pair| pair[0].timestamp > pair[1].timestamp)
            .map(|index| index + 1)
    }
}
