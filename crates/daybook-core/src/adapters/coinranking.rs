use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Deserialize;
use tracing::{info, warn};

use crate::data_source::{SampleSource, SourceError};
use crate::http_client::{HttpClient, HttpRequest, HttpResponse, ReqwestHttpClient};
use crate::{Sample, SampleBatch, SampleTime, SourceId};

/// Thirty-day bitcoin price history.
pub const DEFAULT_FETCH_URL: &str = "https://api.coinranking.com/v1/public/coin/1/history/30d";

/// Environment variable overriding [`DEFAULT_FETCH_URL`].
pub const FETCH_URL_ENV: &str = "FETCH_URL";

/// Price history from the coinranking public API.
#[derive(Clone)]
pub struct CoinrankingSource {
    http_client: Arc<dyn HttpClient>,
    url: String,
    timeout_ms: u64,
}

impl std::fmt::Debug for CoinrankingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinrankingSource")
            .field("url", &self.url)
            .field("timeout_ms", &self.timeout_ms)
            .finish_non_exhaustive()
    }
}

impl CoinrankingSource {
    /// Uses the reqwest transport.
    pub fn new(url: impl Into<String>) -> Result<Self, SourceError> {
        let http_client = ReqwestHttpClient::new()?;
        Ok(Self::with_http_client(Arc::new(http_client), url))
    }

    /// Uses `FETCH_URL` when set, the default history endpoint otherwise.
    pub fn from_env() -> Result<Self, SourceError> {
        let url = std::env::var(FETCH_URL_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| String::from(DEFAULT_FETCH_URL));
        Self::new(url)
    }

    pub fn with_http_client(http_client: Arc<dyn HttpClient>, url: impl Into<String>) -> Self {
        Self {
            http_client,
            url: url.into(),
            timeout_ms: 3_000,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn fetch_history(&self) -> Result<SampleBatch, SourceError> {
        if self.url.trim().is_empty() {
            return Err(SourceError::invalid_request("fetch url must not be empty"));
        }

        let request = HttpRequest::get(self.url.as_str())
            .with_header("accept", "application/json")
            .with_timeout_ms(self.timeout_ms);
        let response = self.http_client.execute(request).await?;
        check_status(&response)?;

        let samples = parse_history(&response.body)?;
        info!(url = %self.url, points = samples.len(), "fetched coinranking history");

        Ok(SampleBatch::new(SourceId::Coinranking, samples))
    }
}

impl SampleSource for CoinrankingSource {
    fn id(&self) -> SourceId {
        SourceId::Coinranking
    }

    fn fetch<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<SampleBatch, SourceError>> + Send + 'a>> {
        Box::pin(self.fetch_history())
    }
}

fn check_status(response: &HttpResponse) -> Result<(), SourceError> {
    if response.is_success() {
        return Ok(());
    }

    warn!(status = response.status, "coinranking returned an error status");
    let message = format!("coinranking returned HTTP {}", response.status);
    if response.status == 429 || response.status >= 500 {
        Err(SourceError::unavailable(message))
    } else {
        Err(SourceError::invalid_request(message))
    }
}

/// Parses a history payload into samples, in payload order.
pub fn parse_history(body: &str) -> Result<Vec<Sample>, SourceError> {
    let payload: HistoryResponse = serde_json::from_str(body).map_err(|e| {
        SourceError::invalid_response(format!("failed to parse coinranking history: {e}"))
    })?;

    payload
        .data
        .history
        .into_iter()
        .map(|point| {
            let timestamp = SampleTime::from_unix_millis(point.timestamp)?;
            let price = point.price.to_f64()?;
            Sample::checked(timestamp, price).map_err(SourceError::from)
        })
        .collect()
}

#[derive(Debug, Deserialize)]
struct HistoryResponse {
    data: HistoryData,
}

#[derive(Debug, Deserialize)]
struct HistoryData {
    history: Vec<HistoryPoint>,
}

#[derive(Debug, Deserialize)]
struct HistoryPoint {
    /// Milliseconds since the unix epoch.
    timestamp: i64,
    price: PriceValue,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PriceValue {
    Number(f64),
    Text(String),
}

impl PriceValue {
    fn to_f64(&self) -> Result<f64, SourceError> {
        match self {
            Self::Number(value) => Ok(*value),
            Self::Text(raw) => raw.trim().parse::<f64>().map_err(|_| {
                SourceError::invalid_response(format!("price '{raw}' is not a number"))
            }),
        }
    }
}
