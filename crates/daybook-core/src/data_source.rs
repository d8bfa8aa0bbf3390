use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use crate::{HttpError, SampleBatch, SourceId, ValidationError};

/// Adapter-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    Unavailable,
    InvalidResponse,
    InvalidRequest,
    Io,
}

/// Structured error returned by sample source adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    kind: SourceErrorKind,
    message: String,
    retryable: bool,
}

impl SourceError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Unavailable,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::InvalidResponse,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::InvalidRequest,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Io,
            message: message.into(),
            retryable: false,
        }
    }

    pub const fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            SourceErrorKind::Unavailable => "source.unavailable",
            SourceErrorKind::InvalidResponse => "source.invalid_response",
            SourceErrorKind::InvalidRequest => "source.invalid_request",
            SourceErrorKind::Io => "source.io",
        }
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for SourceError {}

impl From<HttpError> for SourceError {
    fn from(error: HttpError) -> Self {
        if error.retryable() {
            Self::unavailable(error.message())
        } else {
            Self::invalid_request(error.message())
        }
    }
}

impl From<ValidationError> for SourceError {
    fn from(error: ValidationError) -> Self {
        Self::invalid_response(error.to_string())
    }
}

/// Static description of a source, used by the `sources` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct SourceDescriptor {
    pub id: SourceId,
    pub remote: bool,
    pub description: &'static str,
}

impl SourceDescriptor {
    pub const fn for_id(id: SourceId) -> Self {
        let description = match id {
            SourceId::Synthetic => "random hourly prices ending at the current hour",
            SourceId::Coinranking => "coinranking public price history over HTTP",
            SourceId::File => "JSON array of {timestamp, price} samples on disk",
        };

        Self {
            id,
            remote: id.is_remote(),
            description,
        }
    }

    pub fn all() -> Vec<Self> {
        SourceId::ALL.into_iter().map(Self::for_id).collect()
    }
}

/// Sample source contract.
///
/// A fetch returns the whole finite sequence; the engine never pulls from a
/// source directly.
pub trait SampleSource: Send + Sync {
    fn id(&self) -> SourceId;

    fn fetch<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<SampleBatch, SourceError>> + Send + 'a>>;
}
