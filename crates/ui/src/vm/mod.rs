mod closing_vm;
mod consent_vm;
mod step_vm;
mod summary_vm;

pub use closing_vm::InterviewState;
pub use consent_vm::ConsentVm;
pub use step_vm::{AnswerInput, QuestionVm, ScenarioStepVm};
pub use summary_vm::{
    NO_ANSWER_LABEL, SubmitState, SummaryRowVm, SummarySectionVm, SummaryVm, map_summary,
};
