use dioxus::prelude::*;
use dioxus_router::use_navigator;
use survey_core::Screen;

use crate::context::{AppContext, use_session};
use crate::routes::Route;
use crate::vm::ConsentVm;

#[component]
pub fn ConsentView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let store = use_session();
    let flow = ctx.flow();

    let vm = ConsentVm::from_email(&store.user_email());

    rsx! {
        div { class: "card",
            h1 { "Participación en Experimento: Run Visualizer" }
            p { "Gracias por participar. Para comenzar, necesitamos tu correo electrónico." }

            div { class: "field",
                label { r#for: "consent-email", "Tu Correo Electrónico:" }
                input {
                    id: "consent-email",
                    class: vm.input_class(),
                    r#type: "email",
                    placeholder: "ejemplo@universidad.cl",
                    value: "{vm.email}",
                    oninput: move |evt| store.set_user_email(evt.value()),
                }
            }

            p {
                small {
                    strong { "Términos:" }
                    " Sus respuestas serán asociadas a este correo para fines de validación del experimento."
                }
            }

            button {
                class: "btn",
                r#type: "button",
                disabled: !vm.can_continue,
                onclick: move |_| {
                    // The guard is re-checked here; the disabled attribute is only a hint.
                    match flow.advance(Screen::Consent, &store.snapshot()) {
                        Ok(next) => {
                            let _ = navigator.push(Route::from(next));
                        }
                        Err(err) => tracing::debug!(error = %err, "consent not accepted"),
                    }
                },
                "Acepto y Continuar"
            }
        }
    }
}
