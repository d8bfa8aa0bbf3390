mod sources;
mod summarize;

use daybook_core::{Envelope, EnvelopeError, Schema, SourceId};
use serde_json::Value;

use crate::cli::{Cli, Command};
use crate::error::CliError;
use crate::metadata;

pub struct CommandResult {
    pub data: Value,
    pub warnings: Vec<String>,
    pub errors: Vec<EnvelopeError>,
    pub latency_ms: u64,
    pub schema: Option<Schema>,
    pub source: Option<SourceId>,
    pub sample_count: usize,
    pub record_count: usize,
}

impl CommandResult {
    pub fn ok(data: Value) -> Self {
        Self {
            data,
            warnings: Vec::new(),
            errors: Vec::new(),
            latency_ms: 0,
            schema: None,
            source: None,
            sample_count: 0,
            record_count: 0,
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings.extend(warnings);
        self
    }

    pub fn with_errors(mut self, errors: Vec<EnvelopeError>) -> Self {
        self.errors.extend(errors);
        self
    }

    pub fn with_latency(mut self, latency_ms: u64) -> Self {
        self.latency_ms = latency_ms;
        self
    }

    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = Some(schema);
        self
    }

    pub fn with_source(mut self, source: SourceId) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_counts(mut self, sample_count: usize, record_count: usize) -> Self {
        self.sample_count = sample_count;
        self.record_count = record_count;
        self
    }
}

pub async fn run(cli: &Cli) -> Result<Envelope<Value>, CliError> {
    let command_result = match &cli.command {
        Command::Trend(args) => summarize::run(Schema::Trend, args).await?,
        Command::Dispersion(args) => summarize::run(Schema::Dispersion, args).await?,
        Command::Sources(args) => sources::run(args)?,
    };

    let meta = metadata::envelope_meta(&command_result)?;
    let CommandResult { data, errors, .. } = command_result;

    Envelope::with_errors(meta, data, errors).map_err(CliError::from)
}
