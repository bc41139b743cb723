//! The survey's screen state machine.
//!
//! | From          | To                           | Guard                          |
//! |---------------|------------------------------|--------------------------------|
//! | Consent       | Instructions                 | plausible `user_email`         |
//! | Instructions  | Scenario(0)                  | none                           |
//! | Scenario(i)   | Scenario(i+1) or Summary     | none; unanswered is allowed    |
//! | Summary       | Closing                      | a submission was delivered     |
//! | Closing       | (terminal)                   |                                |

use std::fmt;

use thiserror::Error;

use crate::model::{ScenarioRecord, Survey, is_plausible_email};
use crate::state::SessionState;

/// Prefix every screen path is mounted under.
pub const BASE_PREFIX: &str = "/run-visualizer-survey";

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FlowError {
    #[error("email must contain '@' and '.' before continuing")]
    InvalidEmail,

    #[error("no scenario at position {index}")]
    NoScenario { index: usize },

    #[error("summary only advances after a delivered submission")]
    SubmissionRequired,

    #[error("{from} cannot complete a submission")]
    NotOnSummary { from: Screen },

    #[error("closing is the last screen")]
    Terminal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Consent,
    Instructions,
    Scenario(usize),
    Summary,
    Closing,
}

impl Screen {
    /// Path relative to [`BASE_PREFIX`].
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Screen::Consent => "/".to_string(),
            Screen::Instructions => "/instructions".to_string(),
            Screen::Scenario(index) => format!("/survey/{index}"),
            Screen::Summary => "/summary".to_string(),
            Screen::Closing => "/closing".to_string(),
        }
    }

    /// Parse a navigation path, with or without [`BASE_PREFIX`].
    #[must_use]
    pub fn from_path(raw: &str) -> Option<Self> {
        let path = raw.strip_prefix(BASE_PREFIX).unwrap_or(raw);
        let path = path.trim_end_matches('/');
        match path {
            "" => Some(Screen::Consent),
            "/instructions" => Some(Screen::Instructions),
            "/summary" => Some(Screen::Summary),
            "/closing" => Some(Screen::Closing),
            other => other
                .strip_prefix("/survey/")
                .and_then(|index| index.parse::<usize>().ok())
                .map(Screen::Scenario),
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::Consent => f.write_str("consent"),
            Screen::Instructions => f.write_str("instructions"),
            Screen::Scenario(index) => write!(f, "scenario {index}"),
            Screen::Summary => f.write_str("summary"),
            Screen::Closing => f.write_str("closing"),
        }
    }
}

/// Forward transitions over a survey with `scenario_count` scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowController {
    scenario_count: usize,
}

impl FlowController {
    #[must_use]
    pub fn new(scenario_count: usize) -> Self {
        Self { scenario_count }
    }

    #[must_use]
    pub fn for_survey(survey: &Survey) -> Self {
        Self::new(survey.len())
    }

    #[must_use]
    pub fn scenario_count(&self) -> usize {
        self.scenario_count
    }

    /// Screen reached by the forward action on `from`.
    ///
    /// # Errors
    ///
    /// Returns `FlowError` when the guard on `from` is not met, when `from`
    /// is an out-of-range scenario, or when `from` has no plain forward
    /// transition (summary, closing).
    pub fn advance(&self, from: Screen, state: &SessionState) -> Result<Screen, FlowError> {
        match from {
            Screen::Consent => {
                if is_plausible_email(state.user_email()) {
                    Ok(Screen::Instructions)
                } else {
                    Err(FlowError::InvalidEmail)
                }
            }
            Screen::Instructions => Ok(self.first_step()),
            Screen::Scenario(index) if index >= self.scenario_count => {
                Err(FlowError::NoScenario { index })
            }
            Screen::Scenario(index) => Ok(if index + 1 < self.scenario_count {
                Screen::Scenario(index + 1)
            } else {
                Screen::Summary
            }),
            Screen::Summary => Err(FlowError::SubmissionRequired),
            Screen::Closing => Err(FlowError::Terminal),
        }
    }

    /// Whether the forward affordance on `from` should be enabled.
    #[must_use]
    pub fn can_advance(&self, from: Screen, state: &SessionState) -> bool {
        self.advance(from, state).is_ok()
    }

    /// Move past the summary once the final submission was delivered.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::NotOnSummary` from any other screen.
    pub fn complete_submission(&self, from: Screen) -> Result<Screen, FlowError> {
        match from {
            Screen::Summary => Ok(Screen::Closing),
            other => Err(FlowError::NotOnSummary { from: other }),
        }
    }

    /// Whether `from` is the last scenario (its forward action leads to review).
    #[must_use]
    pub fn is_last_step(&self, from: Screen) -> bool {
        matches!(from, Screen::Scenario(index) if index + 1 == self.scenario_count)
    }

    /// `Survey::new` never yields an empty survey, so the `Summary` branch only
    /// matters to callers that build `FlowController::new(0)` directly.
    fn first_step(&self) -> Screen {
        if self.scenario_count == 0 {
            Screen::Summary
        } else {
            Screen::Scenario(0)
        }
    }
}

/// Scenario to render for a requested position; `None` renders the
/// loading placeholder instead of faulting.
#[must_use]
pub fn scenario_at(survey: &Survey, index: usize) -> Option<&ScenarioRecord> {
    survey.scenario(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_email(email: &str) -> SessionState {
        let mut state = SessionState::new();
        state.set_user_email(email);
        state
    }

    #[test]
    fn consent_gate_follows_email_shape() {
        let flow = FlowController::new(3);
        for email in ["", "ana", "ana@uni", "ana.uni"] {
            let state = state_with_email(email);
            assert_eq!(
                flow.advance(Screen::Consent, &state),
                Err(FlowError::InvalidEmail)
            );
            assert!(!flow.can_advance(Screen::Consent, &state));
        }

        let state = state_with_email("ana@uni.cl");
        assert_eq!(flow.advance(Screen::Consent, &state), Ok(Screen::Instructions));
        assert_eq!(state.user_email(), "ana@uni.cl");
    }

    #[test]
    fn scenarios_walk_in_order_then_summary() {
        let flow = FlowController::new(3);
        let state = SessionState::new();

        let mut screen = flow.advance(Screen::Instructions, &state).unwrap();
        let mut visited = Vec::new();
        while let Screen::Scenario(i) = screen {
            visited.push(i);
            screen = flow.advance(screen, &state).unwrap();
        }
        assert_eq!(visited, [0, 1, 2]);
        assert_eq!(screen, Screen::Summary);
        assert!(flow.is_last_step(Screen::Scenario(2)));
        assert!(!flow.is_last_step(Screen::Scenario(1)));
    }

    #[test]
    fn out_of_range_scenario_is_an_error_not_a_panic() {
        let flow = FlowController::new(2);
        assert_eq!(
            flow.advance(Screen::Scenario(7), &SessionState::new()),
            Err(FlowError::NoScenario { index: 7 })
        );
    }

    #[test]
    fn summary_needs_submission_and_closing_is_terminal() {
        let flow = FlowController::new(1);
        let state = SessionState::new();
        assert_eq!(
            flow.advance(Screen::Summary, &state),
            Err(FlowError::SubmissionRequired)
        );
        assert_eq!(flow.complete_submission(Screen::Summary), Ok(Screen::Closing));
        assert_eq!(
            flow.complete_submission(Screen::Instructions),
            Err(FlowError::NotOnSummary {
                from: Screen::Instructions
            })
        );
        assert_eq!(flow.advance(Screen::Closing, &state), Err(FlowError::Terminal));
    }

    #[test]
    fn empty_survey_skips_to_summary() {
        let flow = FlowController::new(0);
        assert_eq!(
            flow.advance(Screen::Instructions, &SessionState::new()),
            Ok(Screen::Summary)
        );
    }

    #[test]
    fn paths_round_trip_through_screens() {
        for screen in [
            Screen::Consent,
            Screen::Instructions,
            Screen::Scenario(4),
            Screen::Summary,
            Screen::Closing,
        ] {
            assert_eq!(Screen::from_path(&screen.path()), Some(screen));
        }
        assert_eq!(
            Screen::from_path("/run-visualizer-survey/survey/2"),
            Some(Screen::Scenario(2))
        );
        assert_eq!(Screen::from_path("/run-visualizer-survey"), Some(Screen::Consent));
        assert_eq!(Screen::from_path("/survey/two"), None);
        assert_eq!(Screen::from_path("/elsewhere"), None);
    }
}
