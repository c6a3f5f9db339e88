//! Transport seam and blocking HTTP implementation

use std::time::Duration;

use serde_json::Value;

use crate::error::{MegaverseError, Result};

/// HTTP methods used by the challenge API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

/// One fully-built request, ready for a transport to send
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// JSON body; always present since the candidate id rides along on
    /// every call, goal fetches included
    pub body: Value,
    /// Query parameters appended to the URL
    pub query: Vec<(String, String)>,
}

/// Raw response before classification
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    /// Classify the response for the retry loop
    ///
    /// 2xx decodes the body (an empty body decodes to JSON null), 429 maps
    /// to the retryable outcome, and everything else is terminal.
    pub fn classify(self) -> Result<Outcome> {
        match self.status {
            200..=299 => {
                let trimmed = self.body.trim();
                if trimmed.is_empty() {
                    return Ok(Outcome::Success(Value::Null));
                }
                let value = serde_json::from_str(trimmed).map_err(|e| {
                    MegaverseError::Decode(format!("status {}: {}", self.status, e))
                })?;
                Ok(Outcome::Success(value))
            }
            429 => Ok(Outcome::RateLimited),
            status => Ok(Outcome::Terminal {
                status,
                body: self.body,
            }),
        }
    }
}

/// Result of one request attempt, driving the retry loop
#[derive(Debug, Clone)]
pub enum Outcome {
    /// 2xx with a decoded body
    Success(Value),
    /// 429, worth retrying after a backoff wait
    RateLimited,
    /// Any other error status; never retried
    Terminal { status: u16, body: String },
}

/// Seam between the retry loop and the wire
///
/// Production uses [`HttpTransport`]; tests drive the retry loop with a
/// scripted fake returning a fixed sequence of status codes.
pub trait Transport {
    fn send(&self, request: &ApiRequest) -> Result<RawResponse>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: &ApiRequest) -> Result<RawResponse> {
        (**self).send(request)
    }
}

/// Blocking HTTP transport backed by reqwest
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Create a transport with the given request timeout
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| MegaverseError::Network(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &ApiRequest) -> Result<RawResponse> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
            Method::Delete => self.client.delete(&request.url),
        };

        builder = builder.header(reqwest::header::CONTENT_TYPE, "application/json");
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        builder = builder.json(&request.body);

        let response = builder
            .send()
            .map_err(|e| MegaverseError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| MegaverseError::Network(e.to_string()))?;

        Ok(RawResponse { status, body })
    }
}
