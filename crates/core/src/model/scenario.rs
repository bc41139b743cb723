use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::model::ids::{QuestionId, ScenarioId};

//
// ─── ERRORS (content validation) ──────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SurveyError {
    #[error("survey has no scenarios")]
    Empty,

    #[error("scenario at position {position} has an empty id")]
    EmptyScenarioId { position: usize },

    #[error("scenario {scenario} has a question with an empty id")]
    EmptyQuestionId { scenario: ScenarioId },

    #[error("question id {id} appears more than once")]
    DuplicateQuestionId { id: QuestionId },
}

//
// ─── RECORDS ──────────────────────────────────────────────────────────────────
//

/// Which answer widget a question uses, and therefore its value domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Text,
    Scale,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: QuestionId,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
}

impl QuestionRecord {
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            id: QuestionId::new(id),
            text: text.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioRecord {
    pub id: ScenarioId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub media_src: String,
    #[serde(default)]
    pub questions: Vec<QuestionRecord>,
}

//
// ─── VALIDATED SURVEY ─────────────────────────────────────────────────────────
//

/// The ordered, immutable survey content for a session.
///
/// Order defines both the navigation sequence and the review order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Survey {
    scenarios: Vec<ScenarioRecord>,
}

impl Survey {
    /// Validate raw scenario records.
    ///
    /// # Errors
    ///
    /// Returns `SurveyError` when the list is empty, an id is blank, or a
    /// question id is reused anywhere in the survey.
    pub fn new(scenarios: Vec<ScenarioRecord>) -> Result<Self, SurveyError> {
        if scenarios.is_empty() {
            return Err(SurveyError::Empty);
        }

        let mut seen = HashSet::new();
        for (position, scenario) in scenarios.iter().enumerate() {
            if scenario.id.as_str().trim().is_empty() {
                return Err(SurveyError::EmptyScenarioId { position });
            }
            for question in &scenario.questions {
                if question.id.as_str().trim().is_empty() {
                    return Err(SurveyError::EmptyQuestionId {
                        scenario: scenario.id.clone(),
                    });
                }
                if !seen.insert(question.id.clone()) {
                    return Err(SurveyError::DuplicateQuestionId {
                        id: question.id.clone(),
                    });
                }
            }
        }

        Ok(Self { scenarios })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    #[must_use]
    pub fn scenarios(&self) -> &[ScenarioRecord] {
        &self.scenarios
    }

    /// Scenario at `index`; `None` past the end.
    #[must_use]
    pub fn scenario(&self, index: usize) -> Option<&ScenarioRecord> {
        self.scenarios.get(index)
    }

    /// All questions in display order.
    pub fn questions(&self) -> impl Iterator<Item = &QuestionRecord> {
        self.scenarios.iter().flat_map(|s| s.questions.iter())
    }

    #[must_use]
    pub fn question(&self, id: &QuestionId) -> Option<&QuestionRecord> {
        self.questions().find(|q| &q.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario(id: &str, questions: &[(&str, QuestionKind)]) -> ScenarioRecord {
        ScenarioRecord {
            id: ScenarioId::new(id),
            title: format!("Title {id}"),
            description: String::new(),
            media_src: String::new(),
            questions: questions
                .iter()
                .map(|(qid, kind)| QuestionRecord::new(*qid, format!("Prompt {qid}"), *kind))
                .collect(),
        }
    }

    #[test]
    fn rejects_empty_survey() {
        assert_eq!(Survey::new(Vec::new()), Err(SurveyError::Empty));
    }

    #[test]
    fn rejects_question_ids_reused_across_scenarios() {
        let err = Survey::new(vec![
            scenario("s1", &[("q", QuestionKind::Text)]),
            scenario("s2", &[("q", QuestionKind::Scale)]),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            SurveyError::DuplicateQuestionId {
                id: QuestionId::new("q")
            }
        );
    }

    #[test]
    fn rejects_blank_ids() {
        let err = Survey::new(vec![scenario(" ", &[])]).unwrap_err();
        assert_eq!(err, SurveyError::EmptyScenarioId { position: 0 });

        let err = Survey::new(vec![scenario("s1", &[("", QuestionKind::Text)])]).unwrap_err();
        assert!(matches!(err, SurveyError::EmptyQuestionId { .. }));
    }

    #[test]
    fn questions_follow_scenario_order() {
        let survey = Survey::new(vec![
            scenario("s1", &[("a", QuestionKind::Text), ("b", QuestionKind::Scale)]),
            scenario("s2", &[("c", QuestionKind::Text)]),
        ])
        .unwrap();
        let ids: Vec<_> = survey.questions().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
        assert!(survey.scenario(2).is_none());
        assert_eq!(
            survey.question(&QuestionId::new("b")).map(|q| q.kind),
            Some(QuestionKind::Scale)
        );
    }

    #[test]
    fn record_reads_camel_case_fields() {
        let raw = r#"{
            "id": "s1",
            "title": "Timeout",
            "description": "A step timed out",
            "mediaSrc": "/img/s1.png",
            "questions": [{ "id": "s1_causa", "text": "Why?", "type": "text" }]
        }"#;
        let record: ScenarioRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.media_src, "/img/s1.png");
        assert_eq!(record.questions[0].kind, QuestionKind::Text);
    }
}
