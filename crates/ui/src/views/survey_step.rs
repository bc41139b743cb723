use dioxus::prelude::*;
use dioxus_router::use_navigator;
use survey_core::model::{AnswerValue, QuestionId, ScaleValue};

use crate::context::{AppContext, SessionStore, use_session};
use crate::routes::Route;
use crate::views::ViewState;
use crate::vm::{AnswerInput, QuestionVm, ScenarioStepVm};

#[component]
pub fn SurveyStepView(step_index: usize) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let store = use_session();
    // Remembers which step's image failed, so moving on resets the fallback.
    let mut failed_media_step = use_signal(|| None::<usize>);

    let survey = ctx.survey();
    let state: ViewState<ScenarioStepVm> = ScenarioStepVm::build(
        &survey,
        &store.snapshot(),
        step_index,
        ctx.media_base_path(),
    )
    .into();

    match state {
        ViewState::Loading => rsx! {
            div { class: "card loading",
                p { "Cargando..." }
            }
        },
        ViewState::Ready(vm) => {
            let media_failed = failed_media_step() == Some(vm.index);
            let image_src = vm.image_src(media_failed).to_string();
            let next = vm.next;
            let fields = vm.questions.iter().cloned().map(|question| {
                let key = question.id.to_string();
                rsx! {
                    QuestionField { key: "{key}", question, store }
                }
            });
            rsx! {
                p { class: "step-progress", "{vm.progress_label}" }

                div { class: "card",
                    h2 { "{vm.title}" }
                    p { "{vm.description}" }

                    div { class: "media-container",
                        img {
                            src: "{image_src}",
                            alt: "Escenario del experimento",
                            onerror: move |_| {
                                if !media_failed {
                                    tracing::warn!(step = step_index, "scenario media failed to load");
                                    failed_media_step.set(Some(step_index));
                                }
                            },
                        }
                    }

                    div { class: "questions-form", {fields} }

                    button {
                        class: "btn",
                        r#type: "button",
                        onclick: move |_| {
                            let _ = navigator.push(Route::from(next));
                        },
                        "{vm.next_label}"
                    }
                }
            }
        }
    }
}

#[component]
fn QuestionField(question: QuestionVm, store: SessionStore) -> Element {
    let QuestionVm { id, text, input } = question;

    rsx! {
        div { class: "question",
            label { class: "question-text", "{text}" }
            match input {
                AnswerInput::Text { value } => rsx! {
                    TextAnswer { id, value, store }
                },
                AnswerInput::Scale { selected } => rsx! {
                    ScaleAnswer { id, selected, store }
                },
            }
        }
    }
}

#[component]
fn TextAnswer(id: QuestionId, value: String, store: SessionStore) -> Element {
    rsx! {
        textarea {
            rows: "3",
            placeholder: "Escribe tu respuesta aquí...",
            value: "{value}",
            oninput: move |evt| store.set_answer(id.clone(), AnswerValue::text(evt.value())),
        }
    }
}

#[component]
fn ScaleAnswer(id: QuestionId, selected: Option<u8>, store: SessionStore) -> Element {
    let options = ScaleValue::options().map(|option| {
        let id = id.clone();
        let group = id.to_string();
        let value = option.value();
        rsx! {
            label { key: "{value}", class: "scale-option",
                input {
                    r#type: "radio",
                    name: "{group}",
                    value: "{value}",
                    checked: selected == Some(value),
                    onchange: move |_| store.set_answer(id.clone(), AnswerValue::Scale(option)),
                }
                "{value}"
            }
        }
    });

    rsx! {
        div { class: "scale-options", {options} }
    }
}
