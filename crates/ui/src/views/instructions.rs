use dioxus::prelude::*;
use dioxus_router::use_navigator;
use survey_core::Screen;

use crate::context::{AppContext, use_session};
use crate::routes::Route;

#[component]
pub fn InstructionsView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let store = use_session();
    let flow = ctx.flow();

    rsx! {
        div { class: "card",
            h2 { "Instrucciones" }
            p {
                "Se le presentarán una serie de imágenes de la herramienta "
                strong { "Run Visualizer" }
                "."
            }
            p { "Para cada imagen, por favor analice el fallo y responda las preguntas subsecuentes." }
            button {
                class: "btn",
                r#type: "button",
                onclick: move |_| {
                    if let Ok(next) = flow.advance(Screen::Instructions, &store.snapshot()) {
                        let _ = navigator.push(Route::from(next));
                    }
                },
                "Comenzar Encuesta"
            }
        }
    }
}
