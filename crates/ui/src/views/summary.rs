use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::{AppContext, use_session};
use crate::routes::Route;
use crate::vm::{NO_ANSWER_LABEL, SubmitState, SummarySectionVm, map_summary};

#[component]
pub fn SummaryView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let store = use_session();
    let mut submit = use_signal(SubmitState::default);

    let survey = ctx.survey();
    let vm = map_summary(&survey, &store.snapshot());
    let current = submit();

    let on_submit = {
        let submissions = ctx.submissions();
        let flow = ctx.flow();
        move |_| {
            if !submit.write().begin() {
                return;
            }
            let submissions = submissions.clone();
            let snapshot = store.snapshot();
            spawn(async move {
                let delivered = submissions.submit_final(&snapshot).await.is_ok();
                let next = submit.write().finish(delivered, &flow);
                if let Some(next) = next {
                    let _ = navigator.push(Route::from(next));
                }
            });
        }
    };

    rsx! {
        div { class: "card",
            h2 { class: "summary-title", "Resumen de Respuestas" }
            p { class: "summary-hint", "Por favor revisa tus respuestas antes de enviar." }

            div { class: "summary-user",
                span { class: "summary-email", "{vm.email}" }
            }

            div { class: "summary-content",
                for section in vm.sections {
                    SummarySection { key: "{section.heading}", section: section.clone() }
                }
            }

            div { class: "summary-actions",
                button {
                    class: "btn btn-wide",
                    r#type: "button",
                    disabled: current.in_flight(),
                    onclick: on_submit,
                    "{current.button_label()}"
                }
            }

            if let Some(alert) = current.alert() {
                div { class: "modal-backdrop",
                    div { class: "modal", role: "alertdialog", aria_modal: "true",
                        p { "{alert.message()}" }
                        button {
                            class: "btn",
                            r#type: "button",
                            onclick: move |_| submit.write().dismiss_alert(),
                            "Aceptar"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SummarySection(section: SummarySectionVm) -> Element {
    rsx! {
        div { class: "summary-section",
            h3 { "{section.heading}" }
            div { class: "summary-rows",
                for row in section.rows {
                    div { key: "{row.question_id}", class: "summary-row",
                        div { class: "summary-question", "{row.question}" }
                        div { class: "summary-answer",
                            if let Some(answer) = &row.answer {
                                "{answer}"
                            } else {
                                em { class: "no-answer", "{NO_ANSWER_LABEL}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
