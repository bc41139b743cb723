use dioxus::prelude::*;
use dioxus_router::Router;
use survey_core::SessionState;

use crate::context::use_session_provider;
use crate::routes::Route;

#[component]
pub fn App() -> Element {
    // One store per launch; nothing survives the window closing.
    use_session_provider(SessionState::new);

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Encuesta Run Visualizer" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Algo salió mal" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
