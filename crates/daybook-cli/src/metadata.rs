use std::fmt::{Display, Formatter};

use daybook_core::{EnvelopeMeta, ValidationError, SCHEMA_VERSION};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::commands::CommandResult;

/// Request identifier (UUID v4) stamped on every envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for RequestId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Builds envelope metadata for a finished command.
pub fn envelope_meta(result: &CommandResult) -> Result<EnvelopeMeta, ValidationError> {
    let mut meta = EnvelopeMeta::new(RequestId::new_v4().to_string(), SCHEMA_VERSION)?
        .with_counts(result.sample_count, result.record_count)
        .with_latency(result.latency_ms);

    if let Some(schema) = result.schema {
        meta = meta.with_schema(schema);
    }
    if let Some(source) = result.source {
        meta = meta.with_source(source);
    }
    for warning in &result.warnings {
        meta.push_warning(warning.clone());
    }

    Ok(meta)
}
