use std::io::{self, Write};

use daybook_core::{Envelope, HandlerResponse};
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::error::CliError;

pub fn render(
    envelope: &Envelope<Value>,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_envelope(&mut out, envelope, format, pretty)
}

pub fn write_envelope<W: Write>(
    out: &mut W,
    envelope: &Envelope<Value>,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(envelope)?
            } else {
                serde_json::to_string(envelope)?
            };
            writeln!(out, "{payload}")?;
        }
        OutputFormat::Ndjson => match &envelope.data {
            Value::Array(records) => {
                for record in records {
                    writeln!(out, "{}", serde_json::to_string(record)?)?;
                }
            }
            other => writeln!(out, "{}", serde_json::to_string(other)?)?,
        },
        OutputFormat::Handler => {
            let response = HandlerResponse::ok(&envelope.data)?;
            let payload = if pretty {
                serde_json::to_string_pretty(&response)?
            } else {
                serde_json::to_string(&response)?
            };
            writeln!(out, "{payload}")?;
        }
        OutputFormat::Table => write_table(out, envelope)?,
    }

    Ok(())
}

fn write_table<W: Write>(out: &mut W, envelope: &Envelope<Value>) -> Result<(), CliError> {
    let meta = &envelope.meta;
    writeln!(out, "request_id  : {}", meta.request_id)?;
    writeln!(out, "schema      : {}", meta.schema_version)?;
    if let Some(schema) = meta.schema {
        writeln!(out, "summary     : {schema}")?;
    }
    if let Some(source) = meta.source {
        writeln!(out, "source      : {source}")?;
    }
    writeln!(out, "generated_at: {}", meta.generated_at)?;
    writeln!(out, "samples     : {}", meta.sample_count)?;
    writeln!(out, "records     : {}", meta.record_count)?;
    writeln!(out, "latency_ms  : {}", meta.latency_ms)?;

    if !meta.warnings.is_empty() {
        writeln!(out, "warnings:")?;
        for warning in &meta.warnings {
            writeln!(out, "  - {warning}")?;
        }
    }

    writeln!(out, "data:")?;
    match &envelope.data {
        Value::Array(records) => {
            for record in records {
                writeln!(out, "  {}", serde_json::to_string(record)?)?;
            }
        }
        other => {
            for line in serde_json::to_string_pretty(other)?.lines() {
                writeln!(out, "  {line}")?;
            }
        }
    }

    if !envelope.errors.is_empty() {
        writeln!(out, "errors:")?;
        for error in &envelope.errors {
            writeln!(out, "  - {}: {}", error.code, error.message)?;
        }
    }

    Ok(())
}
