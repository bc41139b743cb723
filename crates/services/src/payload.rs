//! JSON bodies sent to the logging endpoint. Field names are fixed by the
//! spreadsheet script on the other side.

use serde::Serialize;
use serde_json::{Map, Value};
use survey_core::SessionState;
use survey_core::model::AnswerValue;

pub const EMAIL_KEY: &str = "email";
pub const TIMESTAMP_KEY: &str = "fecha";
pub const USER_AGENT_KEY: &str = "userAgent";
pub const INTERVIEW_FLAG: &str = "SI";

/// `{ email, fecha, ...answers, userAgent }`.
///
/// Answers are flattened into the top level, sorted by question id. Keys are
/// written in that order so an answer id that collides with a fixed key
/// replaces its value, and `userAgent` always wins.
#[must_use]
pub fn final_submission(state: &SessionState, fecha: &str, user_agent: &str) -> Map<String, Value> {
    let mut body = Map::new();
    body.insert(EMAIL_KEY.into(), Value::from(state.user_email()));
    body.insert(TIMESTAMP_KEY.into(), Value::from(fecha));
    let mut answers: Vec<_> = state.answers().iter().collect();
    answers.sort_by(|(a, _), (b, _)| a.cmp(b));
    for (question_id, answer) in answers {
        let value = match answer {
            AnswerValue::Scale(scale) => Value::from(scale.value()),
            AnswerValue::Text(text) => Value::from(text.as_str()),
        };
        body.insert(question_id.as_str().to_string(), value);
    }
    body.insert(USER_AGENT_KEY.into(), Value::from(user_agent));
    body
}

/// Body of the follow-up interview opt-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterviewRequest {
    pub email: String,
    pub interes_entrevista: &'static str,
    pub fecha: String,
}

impl InterviewRequest {
    #[must_use]
    pub fn new(email: impl Into<String>, fecha: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            interes_entrevista: INTERVIEW_FLAG,
            fecha: fecha.into(),
        }
    }
}
