use survey_core::model::{
    PLACEHOLDER_IMAGE_URL, QuestionId, QuestionKind, ScaleValue, Survey, resolve_media_src,
};
use survey_core::{FlowController, Screen, SessionState, scenario_at};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnswerInput {
    Text { value: String },
    Scale { selected: Option<u8> },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub id: QuestionId,
    pub text: String,
    pub input: AnswerInput,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScenarioStepVm {
    pub index: usize,
    pub progress_label: String,
    pub title: String,
    pub description: String,
    pub media_url: String,
    pub questions: Vec<QuestionVm>,
    pub next: Screen,
    pub next_label: &'static str,
}

impl ScenarioStepVm {
    /// `None` when `index` is past the last scenario; the view shows its
    /// loading placeholder instead.
    #[must_use]
    pub fn build(
        survey: &Survey,
        state: &SessionState,
        index: usize,
        media_base_path: &str,
    ) -> Option<Self> {
        let scenario = scenario_at(survey, index)?;
        let flow = FlowController::for_survey(survey);
        let screen = Screen::Scenario(index);
        let next = flow.advance(screen, state).ok()?;

        let questions = scenario
            .questions
            .iter()
            .map(|question| {
                let answer = state.answer(&question.id);
                let input = match question.kind {
                    QuestionKind::Text => AnswerInput::Text {
                        value: answer
                            .and_then(|a| a.as_text())
                            .unwrap_or_default()
                            .to_string(),
                    },
                    QuestionKind::Scale => AnswerInput::Scale {
                        selected: answer.and_then(|a| a.as_scale()).map(ScaleValue::value),
                    },
                };
                QuestionVm {
                    id: question.id.clone(),
                    text: question.text.clone(),
                    input,
                }
            })
            .collect();

        Some(Self {
            index,
            progress_label: format!("Escenario {} de {}", index + 1, survey.len()),
            title: scenario.title.clone(),
            description: scenario.description.clone(),
            media_url: resolve_media_src(&scenario.media_src, media_base_path),
            questions,
            next,
            next_label: if flow.is_last_step(screen) {
                "Finalizar y Revisar"
            } else {
                "Siguiente"
            },
        })
    }

    /// Image source to render, given whether the resolved media failed to load.
    #[must_use]
    pub fn image_src(&self, media_failed: bool) -> &str {
        if media_failed {
            PLACEHOLDER_IMAGE_URL
        } else {
            &self.media_url
        }
    }
}
