use crate::domain::model::{BookingRequest, SubmissionOutcome};
use crate::domain::ports::SubmissionStrategy;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Latency emulated by the simulated path so the pending state is visible.
pub const SIMULATED_DELAY: Duration = Duration::from_millis(800);

/// Local acknowledgment path, used when no relay endpoint is configured.
/// Resolves `Success` unconditionally after the artificial delay.
pub struct SimulatedSubmission {
    delay: Duration,
}

impl SimulatedSubmission {
    pub fn new() -> Self {
        Self {
            delay: SIMULATED_DELAY,
        }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedSubmission {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubmissionStrategy for SimulatedSubmission {
    async fn submit(&self, _request: &BookingRequest) -> SubmissionOutcome {
        tokio::time::sleep(self.delay).await;
        tracing::debug!("Simulated submission acknowledged");
        SubmissionOutcome::Success
    }
}

/// Fire-and-forget POST of the form-encoded request to the relay endpoint.
///
/// The response is never inspected: `Success` means the call went out, not
/// that the relay delivered the data. Only a transport failure (DNS,
/// connection) produces `Failed`. No response contract from the relay is
/// defined, so this is a documented limitation rather than something to
/// upgrade silently.
pub struct RelaySubmission {
    client: Client,
    endpoint: String,
}

impl RelaySubmission {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SubmissionStrategy for RelaySubmission {
    async fn submit(&self, request: &BookingRequest) -> SubmissionOutcome {
        match self.client.post(&self.endpoint).form(request).send().await {
            Ok(response) => {
                tracing::debug!(
                    "Relay POST to {} returned status {} (ignored)",
                    self.endpoint,
                    response.status()
                );
                SubmissionOutcome::Success
            }
            Err(e) => {
                tracing::warn!("Relay POST to {} failed: {}", self.endpoint, e);
                SubmissionOutcome::Failed(e.to_string())
            }
        }
    }
}

/// Strategy selection: an empty relay endpoint means simulate locally,
/// anything else relays.
pub fn select_strategy(relay_endpoint: &str) -> Box<dyn SubmissionStrategy> {
    if relay_endpoint.trim().is_empty() {
        Box::new(SimulatedSubmission::new())
    } else {
        Box::new(RelaySubmission::new(relay_endpoint.trim()))
    }
}
