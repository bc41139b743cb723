mod answer;
mod email;
mod ids;
pub mod media;
mod scenario;

pub use answer::{AnswerValue, ScaleError, ScaleValue};
pub use email::is_plausible_email;
pub use ids::{QuestionId, ScenarioId};
pub use media::{PLACEHOLDER_IMAGE_URL, resolve_media_src};
pub use scenario::{QuestionKind, QuestionRecord, ScenarioRecord, Survey, SurveyError};
