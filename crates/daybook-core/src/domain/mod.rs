//! # Domain Models
//!
//! Canonical input types for the daybook engine.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Sample`] | One `(timestamp, price)` observation |
//! | [`SampleBatch`] | Ordered samples from one source fetch |
//! | [`SampleTime`] | Naive timestamp rendered as `YYYY-MM-DDTHH:MM:SS` |

mod sample;
mod timestamp;

pub use sample::{Sample, SampleBatch};
pub use timestamp::SampleTime;
