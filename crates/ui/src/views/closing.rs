use dioxus::prelude::*;

use crate::context::{AppContext, use_session};
use crate::vm::InterviewState;

#[component]
pub fn ClosingView() -> Element {
    let ctx = use_context::<AppContext>();
    let store = use_session();
    let mut interview = use_signal(InterviewState::default);

    let email = store.user_email();
    let current = interview();

    let on_opt_in = {
        let submissions = ctx.submissions();
        move |_| {
            if !interview.write().begin() {
                return;
            }
            let submissions = submissions.clone();
            let snapshot = store.snapshot();
            spawn(async move {
                let delivered = submissions.request_interview(&snapshot).await.is_ok();
                interview.write().finish(delivered);
            });
        }
    };

    rsx! {
        div { class: "card closing",
            h1 { "¡Gracias!" }
            p { "Respuestas registradas para: " strong { "{email}" } }

            div { class: "interview-box",
                h3 { "¿Podemos contactarte?" }
                p { "Nos gustaría conversar brevemente sobre tu experiencia con la herramienta." }

                if current.requested() {
                    p { class: "interview-done", "¡Anotado! Gracias por tu disposición." }
                } else {
                    button {
                        class: "btn",
                        r#type: "button",
                        disabled: current.loading(),
                        onclick: on_opt_in,
                        "{current.button_label()}"
                    }
                }

                if let Some(notice) = current.notice() {
                    p { class: "notice", role: "status", "{notice.message()}" }
                }
            }
        }
    }
}
