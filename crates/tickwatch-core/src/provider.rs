//! Quote-provider boundary adapter.
//!
//! Wraps the market-data HTTP endpoints (top movers, company overview,
//! logo, time series) and maps raw JSON into typed records or a typed
//! [`ProviderError`]. No retries happen here; callers decide whether to
//! re-issue a request.

use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use crate::config::ProviderConfig;
use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient};
use crate::{CompanyOverview, MoversBoard, SeriesFunction, Symbol, Window};

/// Provider error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorKind {
    /// No API credential configured.
    NotConfigured,
    /// Transport failure or non-2xx status.
    Http,
    /// The provider reported an error or rate-limit note in the payload.
    ProviderMessage,
    /// An expected key or shape was absent from the payload.
    MalformedResponse,
}

/// Structured error surfaced by every client call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderError {
    kind: ProviderErrorKind,
    message: String,
    retryable: bool,
}

impl ProviderError {
    pub fn not_configured() -> Self {
        Self {
            kind: ProviderErrorKind::NotConfigured,
            message: String::from("provider API key is not configured"),
            retryable: false,
        }
    }

    pub fn http(message: impl Into<String>) -> Self {
        Self {
            kind: ProviderErrorKind::Http,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn provider_message(message: impl Into<String>, retryable: bool) -> Self {
        Self {
            kind: ProviderErrorKind::ProviderMessage,
            message: message.into(),
            retryable,
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self {
            kind: ProviderErrorKind::MalformedResponse,
            message: message.into(),
            retryable: false,
        }
    }

    pub const fn kind(&self) -> ProviderErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }
}

impl Display for ProviderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ProviderError {}

/// Raw time-series entry; only the closing price is consumed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeriesEntry {
    #[serde(rename = "4. close")]
    pub close: String,
}

/// Date-keyed closing prices for one symbol and window. Empty when the
/// provider response carried no recognizable series section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesPayload {
    pub entries: HashMap<String, SeriesEntry>,
}

/// Alpha Vantage quote client.
#[derive(Clone)]
pub struct AlphaVantageClient {
    config: ProviderConfig,
    http_client: Arc<dyn HttpClient>,
    timeout_ms: u64,
}

impl AlphaVantageClient {
    pub fn new(config: ProviderConfig) -> Self {
        Self::with_http_client(config, Arc::new(ReqwestHttpClient::new()))
    }

    pub fn with_http_client(config: ProviderConfig, http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            config,
            http_client,
            timeout_ms: 5_000,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Fetch the top gainers/losers/most-active board.
    pub async fn movers(&self) -> Result<MoversBoard, ProviderError> {
        let url = self.endpoint("TOP_GAINERS_LOSERS", &[])?;
        let body = self.execute("TOP_GAINERS_LOSERS", url).await?;

        let board: MoversBoard = serde_json::from_str(&body)
            .map_err(|e| ProviderError::malformed(format!("unreadable movers payload: {e}")))?;

        Ok(board)
    }

    /// Fetch the company descriptor for a symbol.
    pub async fn overview(&self, symbol: &Symbol) -> Result<CompanyOverview, ProviderError> {
        let url = self.endpoint("OVERVIEW", &[("symbol", symbol.as_str())])?;
        let body = self.execute("OVERVIEW", url).await?;

        let overview: CompanyOverview = serde_json::from_str(&body)
            .map_err(|e| ProviderError::malformed(format!("unreadable overview payload: {e}")))?;

        if overview.symbol.trim().is_empty() {
            return Err(ProviderError::malformed(
                "overview payload is missing the Symbol field",
            ));
        }

        Ok(overview)
    }

    /// Fetch the company logo URL. `Ok(None)` when the provider has no
    /// logo for the symbol; callers treat this as an omitted element,
    /// not an error.
    pub async fn logo(&self, symbol: &Symbol) -> Result<Option<String>, ProviderError> {
        let url = self.endpoint("LOGO", &[("symbol", symbol.as_str())])?;
        let body = self.execute("LOGO", url).await?;

        let payload: LogoPayload = serde_json::from_str(&body)
            .map_err(|e| ProviderError::malformed(format!("unreadable logo payload: {e}")))?;

        Ok(payload.logo.filter(|logo| !logo.trim().is_empty()))
    }

    /// Fetch the raw time series feeding a window's chart. The returned
    /// payload is empty when no series section was recognized; the
    /// series transformer turns that into its no-data state.
    pub async fn time_series(
        &self,
        symbol: &Symbol,
        window: Window,
    ) -> Result<SeriesPayload, ProviderError> {
        let function = window.series_function();
        let mut params = vec![("symbol", symbol.as_str())];
        if let Some(interval) = function.interval() {
            params.push(("interval", interval));
        }

        let url = self.endpoint(function.as_str(), &params)?;
        let body = self.execute(function.as_str(), url).await?;

        let envelope: SeriesEnvelope = serde_json::from_str(&body)
            .map_err(|e| ProviderError::malformed(format!("unreadable series payload: {e}")))?;

        Ok(SeriesPayload {
            entries: envelope.extract(function),
        })
    }

    fn endpoint(&self, function: &str, params: &[(&str, &str)]) -> Result<String, ProviderError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(ProviderError::not_configured)?;

        let mut url = format!("{}?function={function}", self.config.base_url);
        for (name, value) in params {
            url.push('&');
            url.push_str(name);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url.push_str("&apikey=");
        url.push_str(&urlencoding::encode(api_key));

        Ok(url)
    }

    async fn execute(&self, function: &str, url: String) -> Result<String, ProviderError> {
        debug!(function, "requesting provider endpoint");

        let request = HttpRequest::get(url).with_timeout_ms(self.timeout_ms);
        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|e| ProviderError::http(format!("transport error: {}", e.message())))?;

        if !response.is_success() {
            debug!(function, status = response.status, "provider returned non-success status");
            return Err(ProviderError::http(format!(
                "provider returned status {}",
                response.status
            )));
        }

        check_provider_notice(&response.body)?;
        Ok(response.body)
    }
}

/// Reject payloads carrying the provider's in-band error markers before
/// any typed parse. `Error Message` flags a bad request and is final;
/// `Note` flags the free-tier rate limit and is worth retrying later.
fn check_provider_notice(body: &str) -> Result<(), ProviderError> {
    let Ok(notice) = serde_json::from_str::<ProviderNotice>(body) else {
        return Ok(());
    };

    if let Some(message) = notice.error_message {
        return Err(ProviderError::provider_message(message, false));
    }
    if let Some(note) = notice.note {
        return Err(ProviderError::provider_message(note, true));
    }

    Ok(())
}

#[derive(Debug, Deserialize)]
struct ProviderNotice {
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
    #[serde(rename = "Note")]
    note: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LogoPayload {
    #[serde(default)]
    logo: Option<String>,
}

/// Series responses key the date map by an interval-dependent name, so
/// the envelope is probed rather than statically shaped.
#[derive(Debug, Deserialize)]
struct SeriesEnvelope {
    #[serde(flatten)]
    sections: HashMap<String, serde_json::Value>,
}

impl SeriesEnvelope {
    fn extract(self, function: SeriesFunction) -> HashMap<String, SeriesEntry> {
        if let Some(value) = self.sections.get(function.series_key()) {
            if let Ok(entries) = serde_json::from_value(value.clone()) {
                return entries;
            }
        }

        // Fallback probe for interval variants the exact key misses.
        for (key, value) in &self.sections {
            if key.starts_with("Time Series") || key.starts_with("Weekly Time Series") {
                if let Ok(entries) = serde_json::from_value(value.clone()) {
                    return entries;
                }
            }
        }

        HashMap::new()
    }
}
