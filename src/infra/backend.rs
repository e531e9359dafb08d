//! Client for the remote e-waste analysis service.
//!
//! The service prices the same way the local estimator does. Any failure to
//! reach it, or any unexpected answer, sends the caller to the local
//! calculation instead (see [`estimate_with_fallback`]).

use reqwest::{Client, Url};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::BackendConfig;
use crate::domain::pricing::{calculate_price_now, PriceError, PriceRequest, Valuation};
use crate::domain::report::AnalysisSource;

const ANALYZE_PATH: &str = "api/analyze-ewaste";
const USER_AGENT: &str = concat!("ecospire/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("api error: {0}")]
    Api(String),
    #[error("unexpected response: {0}")]
    Decode(String),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisEnvelope {
    #[serde(default)]
    price_analysis: Option<PriceAnalysis>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// The service reports unknown devices inside `priceAnalysis` with a 200 status.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PriceAnalysis {
    Priced(Valuation),
    Failed { error: String },
}

#[derive(Clone)]
pub struct AnalysisClient {
    http: Client,
    base_url: Url,
}

impl AnalysisClient {
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let base_url = Url::parse(&config.base_url)?;
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout())
            .build()?;
        Ok(Self { http, base_url })
    }

    /// Client for an enabled backend, `None` when disabled or misconfigured.
    pub fn from_config(config: &BackendConfig) -> Option<Self> {
        if !config.enabled {
            debug!("Analysis service disabled");
            return None;
        }
        match Self::new(config) {
            Ok(client) => Some(client),
            Err(err) => {
                warn!(error = %err, url = %config.base_url, "Analysis service unusable");
                None
            }
        }
    }

    pub async fn analyze(&self, request: &PriceRequest) -> Result<Valuation, BackendError> {
        let url = self.base_url.join(ANALYZE_PATH)?;
        debug!(%url, brand = %request.brand, model = %request.model, "Requesting analysis");

        let response = self.http.post(url).json(request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let reason = parse_envelope(&body)
                .ok()
                .and_then(|envelope| envelope.error.or(envelope.message))
                .unwrap_or_else(|| format!("backend returned {status}"));
            return Err(BackendError::Api(reason));
        }

        valuation_from_body(&body)
    }
}

fn parse_envelope(body: &str) -> Result<AnalysisEnvelope, BackendError> {
    serde_json::from_str(body).map_err(|err| BackendError::Decode(err.to_string()))
}

fn valuation_from_body(body: &str) -> Result<Valuation, BackendError> {
    let envelope = parse_envelope(body)?;
    match envelope.price_analysis {
        Some(PriceAnalysis::Priced(valuation)) => {
            let in_range = valuation.min_price <= valuation.estimated_value
                && valuation.estimated_value <= valuation.max_price;
            if !in_range || valuation.min_price < 0 {
                return Err(BackendError::Decode(format!(
                    "inconsistent price range {}..{} for estimate {}",
                    valuation.min_price, valuation.max_price, valuation.estimated_value
                )));
            }
            Ok(valuation)
        }
        Some(PriceAnalysis::Failed { error }) => Err(BackendError::Api(error)),
        None => Err(envelope
            .error
            .or(envelope.message)
            .map(BackendError::Api)
            .unwrap_or_else(|| BackendError::Decode("response missing priceAnalysis".into()))),
    }
}

/// Prices a device through the service when one is configured, falling back
/// to the local estimator on any backend failure. Local errors are returned as-is.
pub async fn estimate_with_fallback(
    client: Option<&AnalysisClient>,
    request: &PriceRequest,
) -> Result<(Valuation, AnalysisSource), PriceError> {
    if let Some(client) = client {
        match client.analyze(request).await {
            Ok(valuation) => {
                info!(estimate = valuation.estimated_value, "Backend analysis succeeded");
                return Ok((valuation, AnalysisSource::Backend));
            }
            Err(err) => {
                warn!(error = %err, "Backend analysis failed, using offline estimate");
            }
        }
    }

    let quote = calculate_price_now(request)?;
    Ok((quote.into(), AnalysisSource::OfflineFallback))
}
