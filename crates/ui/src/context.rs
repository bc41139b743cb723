use std::sync::Arc;

use dioxus::prelude::*;
use services::SubmissionService;
use survey_core::model::{AnswerValue, QuestionId, Survey};
use survey_core::{FlowController, SessionState};

pub trait UiApp: Send + Sync {
    fn survey(&self) -> Arc<Survey>;
    fn submissions(&self) -> Arc<SubmissionService>;
    fn media_base_path(&self) -> String;
}

/// Immutable collaborators shared by every screen.
#[derive(Clone)]
pub struct AppContext {
    survey: Arc<Survey>,
    flow: FlowController,
    submissions: Arc<SubmissionService>,
    media_base_path: Arc<str>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let survey = app.survey();
        let flow = FlowController::for_survey(&survey);

        Self {
            survey,
            flow,
            submissions: app.submissions(),
            media_base_path: Arc::from(app.media_base_path()),
        }
    }

    #[must_use]
    pub fn survey(&self) -> Arc<Survey> {
        Arc::clone(&self.survey)
    }

    #[must_use]
    pub fn flow(&self) -> FlowController {
        self.flow
    }

    #[must_use]
    pub fn submissions(&self) -> Arc<SubmissionService> {
        Arc::clone(&self.submissions)
    }

    #[must_use]
    pub fn media_base_path(&self) -> &str {
        &self.media_base_path
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// The session's answers and email, shared by all screens through context.
#[derive(Clone, Copy, PartialEq)]
pub struct SessionStore(Signal<SessionState>);

impl SessionStore {
    #[must_use]
    pub fn new(signal: Signal<SessionState>) -> Self {
        Self(signal)
    }

    /// Copy of the current state, safe to hold across an `.await`.
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.0.read().clone()
    }

    #[must_use]
    pub fn user_email(&self) -> String {
        self.0.read().user_email().to_string()
    }

    pub fn set_user_email(mut self, email: String) {
        self.0.write().set_user_email(email);
    }

    pub fn set_answer(mut self, question_id: QuestionId, value: AnswerValue) {
        self.0.write().set_answer(question_id, value);
    }
}

/// Install a fresh session store in the current scope.
pub fn use_session_provider(initial: impl FnOnce() -> SessionState) -> SessionStore {
    use_context_provider(|| SessionStore::new(Signal::new(initial())))
}

#[must_use]
pub fn use_session() -> SessionStore {
    use_context::<SessionStore>()
}
