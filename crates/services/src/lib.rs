#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod payload;
pub mod submission_service;
pub mod transport;

pub use survey_core::Clock;

pub use config::{DEFAULT_ENDPOINT_URL, SubmissionConfig, default_user_agent};
pub use error::{ConfigError, SubmissionError};
pub use submission_service::SubmissionService;
pub use transport::{HttpTransport, PLAIN_TEXT_UTF8, SubmissionTransport};
