//! HTTP oracle client.
//!
//! Talks JSON to an optimizer service exposing a single scheduling endpoint.
//! Transport behavior (timeouts, TLS) is the reqwest client's; the engine has
//! no timeout of its own and relies on this collaborator's error behavior.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::{
    Coordinates, OptimizationSignal, OptimizerResponse, Oracle, OracleError,
};

/// Wire shape of the scheduling request body.
#[derive(Debug, Serialize)]
struct ScheduleBody<'a> {
    duration_hours: i64,
    end_datetime: DateTime<Utc>,
    optimization_signal: OptimizationSignal,
    locations: &'a [Coordinates],
}

/// Oracle backend calling an optimizer service over HTTP.
pub struct HttpOracle {
    client: reqwest::Client,
    endpoint: String,
    bearer_token: Option<String>,
}

impl HttpOracle {
    /// Create a client for the given scheduling endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            bearer_token: None,
        }
    }

    /// Attach a bearer token sent with every request.
    #[must_use]
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Replace the underlying HTTP client, e.g. to set timeouts.
    #[must_use]
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }
}

#[async_trait]
impl Oracle for HttpOracle {
    async fn schedule(
        &self,
        duration_hours: i64,
        deadline: DateTime<Utc>,
        signal: OptimizationSignal,
        locations: &[Coordinates],
    ) -> Result<OptimizerResponse, OracleError> {
        let body = ScheduleBody {
            duration_hours,
            end_datetime: deadline,
            optimization_signal: signal,
            locations,
        };

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }

        tracing::debug!(endpoint = %self.endpoint, duration_hours, deadline = %deadline, "querying optimizer");

        let response = request
            .send()
            .await
            .map_err(|e| OracleError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(OracleError::Transport(format!(
                "optimizer returned {status}: {detail}"
            )));
        }

        response
            .json::<OptimizerResponse>()
            .await
            .map_err(|e| OracleError::Validation(e.to_string()))
    }
}
