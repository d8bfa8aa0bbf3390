use std::time::Instant;

use daybook_core::{
    summarize, CoinrankingSource, CoreError, DayBoundaryRule, EmptyInput, EngineConfig,
    EnvelopeError, FileSource, FinalUpdate, SampleBatch, SampleSource, Schema, SyntheticSource,
};
use serde_json::Value;
use tracing::{info, warn};

use crate::cli::{DayBoundaryArg, EmptyInputArg, FinalUpdateArg, SourceSelector, SummarizeArgs};
use crate::error::CliError;

use super::CommandResult;

pub async fn run(schema: Schema, args: &SummarizeArgs) -> Result<CommandResult, CliError> {
    let config = resolve_config(args)?;
    let source = build_source(args)?;
    let source_id = source.id();

    let started = Instant::now();
    let fetched = source.fetch().await;
    let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    let batch = match fetched {
        Ok(batch) => batch,
        Err(error) => {
            warn!(source = %source_id, %error, "sample fetch failed");
            return Ok(CommandResult::ok(Value::Array(Vec::new()))
                .with_schema(schema)
                .with_source(source_id)
                .with_latency(latency_ms)
                .with_errors(vec![EnvelopeError::from_source_error(&error, source_id)]));
        }
    };

    let warnings = ordering_warnings(&batch);
    let sample_count = batch.len();
    let records = summarize(schema, batch.samples, config)?;
    info!(%schema, samples = sample_count, records = records.len(), "summary complete");

    let record_count = records.len();
    Ok(CommandResult::ok(Value::Array(records))
        .with_schema(schema)
        .with_source(source_id)
        .with_latency(latency_ms)
        .with_counts(sample_count, record_count)
        .with_warnings(warnings))
}

/// Config file first, then individual flags on top.
fn resolve_config(args: &SummarizeArgs) -> Result<EngineConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::from_path(path)?,
        None => EngineConfig::default(),
    };

    if let Some(rule) = args.day_boundary {
        config = config.with_day_boundary(match rule {
            DayBoundaryArg::DayOfMonth => DayBoundaryRule::DayOfMonth,
            DayBoundaryArg::CalendarDate => DayBoundaryRule::CalendarDate,
        });
    }
    if let Some(final_update) = args.final_update {
        config = config.with_final_update(match final_update {
            FinalUpdateArg::Repeat => FinalUpdate::Repeat,
            FinalUpdateArg::Skip => FinalUpdate::Skip,
        });
    }
    if let Some(empty_input) = args.empty_input {
        config = config.with_empty_input(match empty_input {
            EmptyInputArg::Emit => EmptyInput::Emit,
            EmptyInputArg::Suppress => EmptyInput::Suppress,
        });
    }

    Ok(config)
}

fn build_source(args: &SummarizeArgs) -> Result<Box<dyn SampleSource>, CliError> {
    match args.source {
        SourceSelector::Synthetic => {
            let mut source = SyntheticSource::new(args.points);
            if let Some(seed) = args.seed {
                source = source.with_seed(seed);
            }
            Ok(Box::new(source))
        }
        SourceSelector::Coinranking => {
            let source = CoinrankingSource::new(args.fetch_url.as_str())
                .map_err(CoreError::from)?
                .with_timeout_ms(args.timeout_ms);
            Ok(Box::new(source))
        }
        SourceSelector::File => {
            let path = args.input.as_ref().ok_or_else(|| {
                CliError::Command(String::from("--input is required with --source file"))
            })?;
            Ok(Box::new(FileSource::new(path)))
        }
    }
}

fn ordering_warnings(batch: &SampleBatch) -> Vec<String> {
    match batch.first_out_of_order() {
        Some(index) => {
            warn!(index, "samples are not in ascending time order");
            vec![format!(
                "sample {index} is earlier than its predecessor; day boundaries may be wrong"
            )]
        }
        None => Vec::new(),
    }
}
