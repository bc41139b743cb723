mod closing;
mod consent;
mod instructions;
mod not_found;
mod state;
mod summary;
mod survey_step;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use closing::ClosingView;
pub use consent::ConsentView;
pub use instructions::InstructionsView;
pub use not_found::NotFoundView;
pub use state::{ViewError, ViewState};
pub use summary::SummaryView;
pub use survey_step::SurveyStepView;
