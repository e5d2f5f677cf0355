use crate::capture::session::CaptureSession;
use crate::capture::types::SessionPayload;
use serde_json::Value;
use thiserror::Error;

/// Default local scoring endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/risk_score";

/// The single submitter error class: the scoring service could not be
/// reached, or its response body was not JSON. `detail` carries the
/// stringified underlying cause.
#[derive(Debug, Error)]
#[error("Could not reach scoring service. Is vigil-scored running?")]
pub struct SubmitError {
    pub detail: String,
}

impl SubmitError {
    /// The `{error, detail}` JSON shape, for callers that surface failures
    /// in-band next to scorer responses.
    pub fn report(&self) -> Value {
        serde_json::json!({
            "error": self.to_string(),
            "detail": self.detail,
        })
    }
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        Self {
            detail: err.to_string(),
        }
    }
}

/// Client for the risk-scoring endpoint.
///
/// Holds a connection pool; cheap to clone. Submissions may overlap freely,
/// there is no deduplication, client timeout, or retry.
#[derive(Debug, Clone)]
pub struct ScoreClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ScoreClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit the session buffer under the given identifier.
    ///
    /// The buffer is snapshotted, not cleared; a later submission resends
    /// everything accumulated so far. `user_id` is opaque and not validated.
    pub async fn submit(
        &self,
        user_id: &str,
        session: &CaptureSession,
    ) -> Result<Value, SubmitError> {
        self.submit_payload(&session.payload(user_id)).await
    }

    /// POST a payload and return the parsed response body verbatim.
    ///
    /// The response status is not checked: the scorer reports its own
    /// failures in-band, and callers see whatever JSON came back.
    pub async fn submit_payload(&self, payload: &SessionPayload) -> Result<Value, SubmitError> {
        tracing::debug!(
            user = %payload.user_id,
            events = payload.events.len(),
            endpoint = %self.endpoint,
            "submitting session"
        );

        let response = self.http.post(&self.endpoint).json(payload).send().await?;
        let value = response.json::<Value>().await?;
        Ok(value)
    }
}

impl Default for ScoreClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}
