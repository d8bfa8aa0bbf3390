//! # Daybook Core
//!
//! Daily price summaries over an ordered `(timestamp, price)` sequence.
//!
//! ## Overview
//!
//! - **Daily accumulator**: single-pass engine that detects day boundaries
//!   and emits one record per day plus a trailing record
//! - **Summary strategies**: trend (change, direction, high/low marks) and
//!   dispersion (mean, variance, volatility flag)
//! - **Sample sources**: synthetic, coinranking over HTTP, JSON file
//! - **Envelopes**: CLI metadata envelope and `{statusCode, body}` handler
//!   response
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Sample source implementations |
//! | [`config`] | Engine configuration |
//! | [`data_source`] | Sample source trait and errors |
//! | [`domain`] | `Sample`, `SampleBatch`, `SampleTime` |
//! | [`engine`] | Daily accumulator and record iterator |
//! | [`envelope`] | Output envelopes |
//! | [`error`] | Core error types |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`source`] | Source identifiers |
//! | [`stats`] | Running mean/variance |
//! | [`strategy`] | Strategy trait, trend and dispersion |
//!
//! ## Quick Start
//!
//! ```rust
//! use daybook_core::{summarize, EngineConfig, Sample, SampleTime, Schema};
//!
//! let samples = vec![
//!     Sample::new(SampleTime::parse("2024-01-01T09:00:00")?, 100.0),
//!     Sample::new(SampleTime::parse("2024-01-01T10:00:00")?, 110.0),
//!     Sample::new(SampleTime::parse("2024-01-02T09:00:00")?, 90.0),
//! ];
//!
//! let records = summarize(Schema::Trend, samples, EngineConfig::default())?;
//! assert_eq!(records.len(), 3);
//! assert_eq!(records[1]["change"], "-10.00");
//! # Ok::<(), daybook_core::CoreError>(())
//! ```

pub mod adapters;
pub mod config;
pub mod data_source;
pub mod domain;
pub mod engine;
pub mod envelope;
pub mod error;
pub mod http_client;
pub mod source;
pub mod stats;
pub mod strategy;

// Sources
pub use adapters::{CoinrankingSource, FileSource, SyntheticSource};
pub use data_source::{SampleSource, SourceDescriptor, SourceError, SourceErrorKind};
pub use source::SourceId;

// Engine
pub use config::{DayBoundaryRule, EmptyInput, EngineConfig, FinalUpdate};
pub use engine::{DailyAccumulator, DayState, Records};
pub use stats::RunningStats;
pub use strategy::{
    summarize, Direction, DispersionRecord, DispersionStrategy, Schema, SummaryStrategy,
    TrendRecord, TrendStrategy,
};

// Domain models
pub use domain::{Sample, SampleBatch, SampleTime};

// Envelope types
pub use envelope::{Envelope, EnvelopeError, EnvelopeMeta, HandlerResponse, SCHEMA_VERSION};

// Error types
pub use error::{CoreError, ValidationError};

// HTTP client types
pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient, StaticHttpClient,
};
