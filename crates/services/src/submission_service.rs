use std::sync::Arc;

use serde_json::{Map, Value};
use survey_core::SessionState;

use crate::config::SubmissionConfig;
use crate::error::SubmissionError;
use crate::payload::{InterviewRequest, final_submission};
use crate::transport::{HttpTransport, SubmissionTransport};
use crate::Clock;

/// Builds the two payloads and hands them to the transport, once each call.
///
/// There is no retry or queue: a failed call is reported and the caller
/// decides what the respondent sees.
#[derive(Clone)]
pub struct SubmissionService {
    clock: Clock,
    transport: Arc<dyn SubmissionTransport>,
    user_agent: String,
}

impl SubmissionService {
    #[must_use]
    pub fn new(
        clock: Clock,
        transport: Arc<dyn SubmissionTransport>,
        user_agent: impl Into<String>,
    ) -> Self {
        Self {
            clock,
            transport,
            user_agent: user_agent.into(),
        }
    }

    /// Service posting over HTTP to the configured endpoint.
    #[must_use]
    pub fn from_config(clock: Clock, config: &SubmissionConfig) -> Self {
        let transport = Arc::new(HttpTransport::new(config.endpoint.clone()));
        Self::new(clock, transport, config.user_agent.clone())
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Final payload stamped with the current time.
    #[must_use]
    pub fn final_payload(&self, state: &SessionState) -> Map<String, Value> {
        final_submission(state, &self.clock.iso_timestamp(), &self.user_agent)
    }

    /// Send every answer plus the respondent's email.
    ///
    /// # Errors
    ///
    /// Returns `SubmissionError` if encoding or delivery fails.
    pub async fn submit_final(&self, state: &SessionState) -> Result<(), SubmissionError> {
        let body = serde_json::to_string(&self.final_payload(state))?;
        tracing::info!(answers = state.answers().len(), "sending final submission");

        self.transport.post_json(body).await.inspect_err(|err| {
            tracing::error!(error = %err, "final submission failed");
        })
    }

    /// Register interest in a follow-up interview, reusing the session email.
    ///
    /// # Errors
    ///
    /// Returns `SubmissionError` if encoding or delivery fails.
    pub async fn request_interview(&self, state: &SessionState) -> Result<(), SubmissionError> {
        let request = InterviewRequest::new(state.user_email(), self.clock.iso_timestamp());
        let body = serde_json::to_string(&request)?;
        tracing::info!("sending interview opt-in");

        self.transport.post_json(body).await.inspect_err(|err| {
            tracing::warn!(error = %err, "interview opt-in failed");
        })
    }
}
