//! Contact form delivery.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: the HTTP transport reports `Unavailable` so the submission
//! flow can still be exercised with test transports.
//!
//! ERROR HANDLING
//! ==============
//! Every failure maps to a [`SubmitError`]; nothing panics. Non-2xx responses
//! are failures even when the body is valid JSON.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ContactRequest, ContactResponse};
use crate::config::{SiteConfig, SubmissionMode};
use crate::error::SubmitError;

/// Simulated round-trip time.
pub const SIMULATED_DELAY_MS: u32 = 2000;
/// Share of simulated submissions that fail.
pub const SIMULATED_FAILURE_RATE: f64 = 0.1;

/// Alert shown when delivery fails.
pub const SUBMIT_FAILED_ALERT: &str =
    "Sorry, there was an error sending your message. Please try again or contact me directly via email.";

/// Delivery mechanism for contact submissions.
#[async_trait::async_trait(?Send)]
pub trait ContactTransport {
    /// Deliver `request`.
    ///
    /// # Errors
    ///
    /// Returns a [`SubmitError`] when the request cannot be sent, the server
    /// answers with a non-2xx status, or the response is not valid JSON.
    async fn send(&self, request: &ContactRequest) -> Result<ContactResponse, SubmitError>;
}

/// `POST`s the form as JSON to a fixed endpoint.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait(?Send)]
impl ContactTransport for HttpTransport {
    async fn send(&self, request: &ContactRequest) -> Result<ContactResponse, SubmitError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint)
                .json(request)
                .map_err(|e| SubmitError::Encode(e.to_string()))?
                .send()
                .await
                .map_err(|e| SubmitError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(SubmitError::Status(resp.status()));
            }
            resp.json::<ContactResponse>()
                .await
                .map_err(|e| SubmitError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(SubmitError::Unavailable)
        }
    }
}

/// Demo transport: waits, then fails for a fraction of submissions.
#[derive(Clone, Debug)]
pub struct SimulatedTransport {
    delay_ms: u32,
    failure_rate: f64,
    roll: fn() -> f64,
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self {
            delay_ms: SIMULATED_DELAY_MS,
            failure_rate: SIMULATED_FAILURE_RATE,
            roll: random_unit,
        }
    }
}

impl SimulatedTransport {
    /// Replace the random source with a fixed one (values in `0.0..1.0`).
    #[must_use]
    pub fn with_roll(mut self, roll: fn() -> f64) -> Self {
        self.roll = roll;
        self
    }

    #[must_use]
    pub fn with_delay_ms(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    fn should_fail(&self) -> bool {
        (self.roll)() < self.failure_rate
    }
}

#[async_trait::async_trait(?Send)]
impl ContactTransport for SimulatedTransport {
    async fn send(&self, request: &ContactRequest) -> Result<ContactResponse, SubmitError> {
        #[cfg(feature = "csr")]
        gloo_timers::future::TimeoutFuture::new(self.delay_ms).await;
        log::debug!("simulating contact submission with {} fields", request.len());
        if self.should_fail() {
            return Err(SubmitError::Network("Network error".to_owned()));
        }
        Ok(ContactResponse {
            success: true,
            message: Some("Message sent successfully!".to_owned()),
        })
    }
}

/// Pick the transport named by the site configuration.
pub fn transport_for(config: &SiteConfig) -> Box<dyn ContactTransport> {
    match config.submission_mode {
        SubmissionMode::Live => Box::new(HttpTransport::new(config.contact_endpoint.clone())),
        SubmissionMode::Simulate => Box::new(SimulatedTransport::default()),
    }
}

fn random_unit() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Math::random()
    }
    #[cfg(not(feature = "csr"))]
    {
        1.0
    }
}
