use crate::domain::model::{BookingRequest, SubmissionOutcome};
use async_trait::async_trait;

/// Settings every config source (CLI flags, TOML file) must provide.
pub trait AppConfig: Send + Sync {
    fn content_base_url(&self) -> &str;
    fn relay_endpoint(&self) -> &str;
}

/// One of the booking-request handling paths. Implementations never return
/// an error: a failed delivery is an outcome, not an exception, and the
/// required-field gate has already run by the time `submit` is called.
#[async_trait]
pub trait SubmissionStrategy: Send + Sync {
    async fn submit(&self, request: &BookingRequest) -> SubmissionOutcome;
}
