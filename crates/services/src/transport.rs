use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::error::SubmissionError;

/// Plain text keeps the POST a "simple" request, so no preflight is sent.
pub const PLAIN_TEXT_UTF8: &str = "text/plain;charset=utf-8";

/// Delivers one already-encoded JSON body to the logging endpoint.
///
/// Only transport success or failure is reported; response bodies are ignored.
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    /// # Errors
    ///
    /// Returns `SubmissionError` when the request could not be delivered.
    async fn post_json(&self, body: String) -> Result<(), SubmissionError>;
}

#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
    endpoint: Url,
}

impl HttpTransport {
    /// No timeout is configured; the client's defaults apply.
    #[must_use]
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl SubmissionTransport for HttpTransport {
    async fn post_json(&self, body: String) -> Result<(), SubmissionError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, PLAIN_TEXT_UTF8)
            .body(body)
            .send()
            .await?;

        // Any answer from the endpoint counts as delivered.
        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "endpoint answered with non-success status");
        }
        Ok(())
    }
}
