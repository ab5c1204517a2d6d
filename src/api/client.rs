use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Url};
use tokio::time::timeout;

use crate::config::ApiConfig;

use super::error::ApiError;
use super::types::{LoanApplication, LoanApplicationResponse};

/// Submission capability injected into the store.
#[async_trait]
pub trait LoanApi: Send + Sync {
    /// Send one application. Single attempt, no retry.
    async fn submit(
        &self,
        application: &LoanApplication,
    ) -> Result<LoanApplicationResponse, ApiError>;
}

/// JSON-over-HTTP implementation of [`LoanApi`].
pub struct HttpLoanApi {
    client: Client,
    url: Url,
    request_timeout: Duration,
}

impl HttpLoanApi {
    /// Build a client posting to `{base_url}{endpoint}`.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let raw = format!(
            "{}{}",
            config.base_url.trim_end_matches('/'),
            config.endpoint
        );
        let url = Url::parse(&raw).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", raw, e)))?;

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .build()?;

        Ok(Self {
            client,
            url,
            request_timeout: Duration::from_secs(u64::from(config.timeout_seconds)),
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    async fn do_submit(
        &self,
        application: &LoanApplication,
    ) -> Result<LoanApplicationResponse, ApiError> {
        let body = serde_json::to_vec(application).map_err(|e| ApiError::Encode(e.to_string()))?;

        let resp = self
            .client
            .post(self.url.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::InvalidResponse {
                status: status.as_u16(),
            });
        }

        let bytes = resp.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl LoanApi for HttpLoanApi {
    async fn submit(
        &self,
        application: &LoanApplication,
    ) -> Result<LoanApplicationResponse, ApiError> {
        tracing::debug!(
            url = %self.url,
            amount = application.amount,
            period = application.period,
            "Submitting loan application"
        );

        match timeout(self.request_timeout, self.do_submit(application)).await {
            Ok(result) => result,
            Err(_) => Err(ApiError::Timeout {
                duration: self.request_timeout.as_secs(),
            }),
        }
    }
}
