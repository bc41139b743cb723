use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};
use survey_core::Screen;

use crate::views::{
    ClosingView, ConsentView, InstructionsView, NotFoundView, SummaryView, SurveyStepView,
};

#[derive(Clone, Debug, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", ConsentView)] Consent {},
        #[route("/instructions", InstructionsView)] Instructions {},
        #[route("/survey/:step_index", SurveyStepView)] SurveyStep { step_index: usize },
        #[route("/summary", SummaryView)] Summary {},
        #[route("/closing", ClosingView)] Closing {},
    #[end_layout]
    #[route("/:..segments", NotFoundView)] NotFound { segments: Vec<String> },
}

impl From<Screen> for Route {
    fn from(screen: Screen) -> Self {
        match screen {
            Screen::Consent => Route::Consent {},
            Screen::Instructions => Route::Instructions {},
            Screen::Scenario(step_index) => Route::SurveyStep { step_index },
            Screen::Summary => Route::Summary {},
            Screen::Closing => Route::Closing {},
        }
    }
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "container",
            Outlet::<Route> {}
        }
    }
}
