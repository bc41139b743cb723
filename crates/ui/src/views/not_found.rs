use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use survey_core::Screen;

use crate::routes::Route;

/// Screen a stray path maps to, e.g. links that still carry the
/// `/run-visualizer-survey` prefix.
pub(crate) fn screen_for_segments(segments: &[String]) -> Option<Screen> {
    Screen::from_path(&format!("/{}", segments.join("/")))
}

#[component]
pub fn NotFoundView(segments: Vec<String>) -> Element {
    let navigator = use_navigator();
    let target = screen_for_segments(&segments);

    use_effect(move || {
        if let Some(screen) = target {
            let _ = navigator.replace(Route::from(screen));
        }
    });

    if target.is_some() {
        return rsx! {
            div { class: "container",
                div { class: "card loading", p { "Cargando..." } }
            }
        };
    }

    tracing::debug!(path = %segments.join("/"), "unknown survey path");

    rsx! {
        div { class: "container",
            div { class: "card",
                h2 { "Página no encontrada" }
                p { "La dirección solicitada no forma parte de la encuesta." }
                Link { class: "btn", to: Route::Consent {}, "Volver al inicio" }
            }
        }
    }
}
