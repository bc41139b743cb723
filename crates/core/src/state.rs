use std::collections::HashMap;

use crate::model::{AnswerValue, QuestionId};

/// Everything the respondent has entered during one session.
///
/// Owned by whoever drives the flow; the UI keeps one in a signal, tests
/// build their own. Setters never validate: the email gate lives in the flow
/// controller and answer shape is the caller's business.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    user_email: String,
    answers: HashMap<QuestionId, AnswerValue>,
    interview_email: String,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn user_email(&self) -> &str {
        &self.user_email
    }

    /// Not written by the current submission path; the session email is
    /// reused for the interview opt-in.
    #[must_use]
    pub fn interview_email(&self) -> &str {
        &self.interview_email
    }

    #[must_use]
    pub fn answers(&self) -> &HashMap<QuestionId, AnswerValue> {
        &self.answers
    }

    #[must_use]
    pub fn answer(&self, question_id: &QuestionId) -> Option<&AnswerValue> {
        self.answers.get(question_id)
    }

    /// Record `value` under `question_id`, replacing any previous answer.
    pub fn set_answer(&mut self, question_id: QuestionId, value: AnswerValue) {
        self.answers.insert(question_id, value);
    }

    pub fn set_user_email(&mut self, email: impl Into<String>) {
        self.user_email = email.into();
    }

    pub fn set_interview_email(&mut self, email: impl Into<String>) {
        self.interview_email = email.into();
    }

    /// Clear answers and both emails.
    pub fn reset_survey(&mut self) {
        *self = Self::default();
    }
}
