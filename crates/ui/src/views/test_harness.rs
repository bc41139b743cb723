use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use content::{ContentSource, EmbeddedContent};
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{Clock, SubmissionError, SubmissionService, SubmissionTransport};
use survey_core::time::fixed_now;
use survey_core::{SessionState, model::Survey};

use crate::context::{UiApp, build_app_context, use_session_provider};
use crate::views::{ClosingView, ConsentView, NotFoundView, SummaryView, SurveyStepView};

/// Records every body handed to it instead of touching the network.
#[derive(Default)]
pub struct RecordingTransport {
    pub bodies: Mutex<Vec<String>>,
}

#[async_trait]
impl SubmissionTransport for RecordingTransport {
    async fn post_json(&self, body: String) -> Result<(), SubmissionError> {
        self.bodies
            .lock()
            .map_err(|_| SubmissionError::Transport("poisoned".into()))?
            .push(body);
        Ok(())
    }
}

struct TestApp {
    survey: Arc<Survey>,
    submissions: Arc<SubmissionService>,
}

impl UiApp for TestApp {
    fn survey(&self) -> Arc<Survey> {
        Arc::clone(&self.survey)
    }

    fn submissions(&self) -> Arc<SubmissionService> {
        Arc::clone(&self.submissions)
    }

    fn media_base_path(&self) -> String {
        "/run-visualizer-survey/".to_string()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Consent,
    Step(usize),
    Summary,
    Closing,
    NotFound(Vec<String>),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    state: SessionState,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    let view = props.view.clone();
    use_context_provider(move || view);
    let seeded = props.state.clone();
    use_session_provider(move || seeded);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Consent => rsx! { ConsentView {} },
        ViewKind::Step(step_index) => rsx! { SurveyStepView { step_index } },
        ViewKind::Summary => rsx! { SummaryView {} },
        ViewKind::Closing => rsx! { ClosingView {} },
        ViewKind::NotFound(segments) => rsx! { NotFoundView { segments } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub survey: Arc<Survey>,
    pub transport: Arc<RecordingTransport>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, state: SessionState) -> ViewHarness {
    let survey = Arc::new(EmbeddedContent.load().expect("embedded survey"));
    let transport = Arc::new(RecordingTransport::default());
    let submissions = Arc::new(SubmissionService::new(
        Clock::fixed(fixed_now()),
        transport.clone(),
        "test-agent",
    ));

    let app = Arc::new(TestApp {
        survey: Arc::clone(&survey),
        submissions,
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view, state });

    ViewHarness {
        dom,
        survey,
        transport,
    }
}
