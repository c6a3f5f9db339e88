//! Megaverse API client with rate-limit recovery

use std::thread;

use serde_json::{json, Map, Value};
use tracing::debug;

use super::recovery::RetryPolicy;
use super::transport::{ApiRequest, HttpTransport, Method, Outcome, Transport};
use super::{COMETHS_ENDPOINT, POLYANETS_ENDPOINT, SOLOONS_ENDPOINT};
use crate::config::MegaverseConfig;
use crate::error::{MegaverseError, Result};

/// Client for the challenge API
///
/// Owns the retry loop: a rate-limited attempt sleeps for a jittered,
/// exponentially growing delay and tries again; any other error status is
/// surfaced immediately. Every request body carries the candidate id.
pub struct MegaverseClient<T: Transport = HttpTransport> {
    transport: T,
    base_url: String,
    candidate_id: String,
    policy: RetryPolicy,
}

impl MegaverseClient<HttpTransport> {
    /// Create a client with the blocking HTTP transport
    pub fn new(config: MegaverseConfig) -> Result<Self> {
        let transport = HttpTransport::new(std::time::Duration::from_secs(config.timeout_secs))?;
        Ok(Self::with_transport(&config, transport))
    }
}

impl<T: Transport> MegaverseClient<T> {
    /// Create a client over an arbitrary transport
    pub fn with_transport(config: &MegaverseConfig, transport: T) -> Self {
        Self {
            transport,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            candidate_id: config.candidate_id.clone(),
            policy: config.retry_policy(),
        }
    }

    /// Perform one logical API call
    ///
    /// The candidate id is merged into the payload before transmission.
    /// Returns the decoded response body on success.
    pub fn request(
        &self,
        method: Method,
        endpoint: &str,
        payload: Option<Map<String, Value>>,
        query: &[(String, String)],
    ) -> Result<Value> {
        let mut body = payload.unwrap_or_default();
        body.insert("candidateId".to_string(), json!(self.candidate_id));

        let request = ApiRequest {
            method,
            url: format!("{}/{}", self.base_url, endpoint),
            body: Value::Object(body),
            query: query.to_vec(),
        };

        for attempt in 0..self.policy.max_retries {
            match self.transport.send(&request)?.classify()? {
                Outcome::Success(value) => return Ok(value),
                Outcome::RateLimited => {
                    let delay = self.policy.backoff_delay(attempt);
                    debug!(
                        endpoint,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        "rate limited, backing off"
                    );
                    thread::sleep(delay);
                }
                Outcome::Terminal { status, body } => {
                    return Err(MegaverseError::Http { status, body });
                }
            }
        }

        Err(MegaverseError::RetriesExhausted {
            attempts: self.policy.max_retries,
        })
    }

    /// Fetch the goal map for the configured candidate
    pub fn goal(&self) -> Result<Vec<Vec<String>>> {
        let endpoint = format!("map/{}/goal", self.candidate_id);
        let document = self.request(Method::Get, &endpoint, None, &[])?;

        let goal = document.get("goal").cloned().ok_or_else(|| {
            MegaverseError::Decode("goal document is missing the \"goal\" key".to_string())
        })?;
        serde_json::from_value(goal)
            .map_err(|e| MegaverseError::Decode(format!("goal array: {}", e)))
    }

    /// Create a base entity at a position
    pub fn create_polyanet(&self, row: usize, column: usize) -> Result<Value> {
        self.request(
            Method::Post,
            POLYANETS_ENDPOINT,
            Some(position_payload(row, column)),
            &[],
        )
    }

    /// Delete the base entity at a position
    pub fn delete_polyanet(&self, row: usize, column: usize) -> Result<Value> {
        self.request(
            Method::Delete,
            POLYANETS_ENDPOINT,
            Some(position_payload(row, column)),
            &[],
        )
    }

    /// Create a soloon with a color at a position
    pub fn create_soloon(&self, row: usize, column: usize, color: &str) -> Result<Value> {
        let mut payload = position_payload(row, column);
        payload.insert("color".to_string(), json!(color));
        self.request(Method::Post, SOLOONS_ENDPOINT, Some(payload), &[])
    }

    /// Delete the soloon at a position
    pub fn delete_soloon(&self, row: usize, column: usize) -> Result<Value> {
        self.request(
            Method::Delete,
            SOLOONS_ENDPOINT,
            Some(position_payload(row, column)),
            &[],
        )
    }

    /// Create a cometh with a direction at a position
    pub fn create_cometh(&self, row: usize, column: usize, direction: &str) -> Result<Value> {
        let mut payload = position_payload(row, column);
        payload.insert("direction".to_string(), json!(direction));
        self.request(Method::Post, COMETHS_ENDPOINT, Some(payload), &[])
    }

    /// Delete the cometh at a position
    pub fn delete_cometh(&self, row: usize, column: usize) -> Result<Value> {
        self.request(
            Method::Delete,
            COMETHS_ENDPOINT,
            Some(position_payload(row, column)),
            &[],
        )
    }
}

fn position_payload(row: usize, column: usize) -> Map<String, Value> {
    let mut payload = Map::new();
    payload.insert("row".to_string(), json!(row));
    payload.insert("column".to_string(), json!(column));
    payload
}
