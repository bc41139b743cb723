use survey_core::model::Survey;
use survey_core::{FlowController, Screen, SessionState};

use crate::views::ViewError;

/// Shown where a question has no recorded answer.
pub const NO_ANSWER_LABEL: &str = "Sin respuesta";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryRowVm {
    pub question_id: String,
    pub question: String,
    /// `None` renders [`NO_ANSWER_LABEL`].
    pub answer: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummarySectionVm {
    pub heading: String,
    pub rows: Vec<SummaryRowVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryVm {
    pub email: String,
    pub sections: Vec<SummarySectionVm>,
}

/// Walk the survey in content order so every question shows up, answered or not.
#[must_use]
pub fn map_summary(survey: &Survey, state: &SessionState) -> SummaryVm {
    let sections = survey
        .scenarios()
        .iter()
        .enumerate()
        .map(|(index, scenario)| SummarySectionVm {
            heading: format!("{}. {}", index + 1, scenario.title),
            rows: scenario
                .questions
                .iter()
                .map(|question| SummaryRowVm {
                    question_id: question.id.to_string(),
                    question: question.text.clone(),
                    answer: state
                        .answer(&question.id)
                        .filter(|answer| !answer.is_blank())
                        .map(ToString::to_string),
                })
                .collect(),
        })
        .collect();

    SummaryVm {
        email: state.user_email().to_string(),
        sections,
    }
}

/// In-flight flag and blocking alert for the final submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubmitState {
    in_flight: bool,
    alert: Option<ViewError>,
}

impl SubmitState {
    #[must_use]
    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    #[must_use]
    pub fn alert(&self) -> Option<ViewError> {
        self.alert
    }

    #[must_use]
    pub fn button_label(&self) -> &'static str {
        if self.in_flight {
            "Enviando respuestas..."
        } else {
            "Confirmar y Enviar Encuesta"
        }
    }

    /// Claim the submission slot. `false` while another submission is in flight.
    pub fn begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        self.alert = None;
        true
    }

    /// Release the slot. Returns the next screen when the payload was delivered;
    /// otherwise raises the blocking alert and stays put.
    pub fn finish(&mut self, delivered: bool, flow: &FlowController) -> Option<Screen> {
        self.in_flight = false;
        if delivered {
            flow.complete_submission(Screen::Summary).ok()
        } else {
            self.alert = Some(ViewError::SubmissionFailed);
            None
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}
