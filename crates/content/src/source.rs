use std::path::{Path, PathBuf};

use survey_core::model::{ScenarioRecord, Survey, SurveyError};
use thiserror::Error;

/// Survey bundled into the binary at compile time.
const EMBEDDED_SURVEY: &str = include_str!("../data/questions.yml");

/// Errors surfaced while loading survey content.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed survey content: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error(transparent)]
    Invalid(#[from] SurveyError),
}

/// Supplies the ordered scenarios once at startup.
pub trait ContentSource: Send + Sync {
    /// Load and validate the survey.
    ///
    /// # Errors
    ///
    /// Returns `ContentError` if the content cannot be read, parsed, or fails
    /// validation.
    fn load(&self) -> Result<Survey, ContentError>;
}

/// Parse a YAML sequence of scenario records and validate it.
///
/// # Errors
///
/// Returns `ContentError::Parse` for malformed YAML and
/// `ContentError::Invalid` when the records break survey invariants.
pub fn parse_survey_yaml(raw: &str) -> Result<Survey, ContentError> {
    let scenarios: Vec<ScenarioRecord> = serde_yaml::from_str(raw)?;
    Ok(Survey::new(scenarios)?)
}

/// The survey compiled into the binary.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmbeddedContent;

impl ContentSource for EmbeddedContent {
    fn load(&self) -> Result<Survey, ContentError> {
        let survey = parse_survey_yaml(EMBEDDED_SURVEY)?;
        tracing::debug!(scenarios = survey.len(), "loaded embedded survey");
        Ok(survey)
    }
}

/// A YAML file on disk, read when `load` is called.
#[derive(Clone, Debug)]
pub struct YamlFileContent {
    path: PathBuf,
}

impl YamlFileContent {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ContentSource for YamlFileContent {
    fn load(&self) -> Result<Survey, ContentError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|source| ContentError::Io {
            path: self.path.clone(),
            source,
        })?;
        let survey = parse_survey_yaml(&raw)?;
        tracing::debug!(
            path = %self.path.display(),
            scenarios = survey.len(),
            "loaded survey file"
        );
        Ok(survey)
    }
}

/// Records held in memory, for tests and prototyping.
#[derive(Clone, Debug, Default)]
pub struct InMemoryContent {
    scenarios: Vec<ScenarioRecord>,
}

impl InMemoryContent {
    #[must_use]
    pub fn new(scenarios: Vec<ScenarioRecord>) -> Self {
        Self { scenarios }
    }
}

impl ContentSource for InMemoryContent {
    fn load(&self) -> Result<Survey, ContentError> {
        Ok(Survey::new(self.scenarios.clone())?)
    }
}
