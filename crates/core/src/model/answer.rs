use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScaleError {
    #[error("scale value {0} is outside 1..=5")]
    OutOfRange(i64),
}

//
// ─── SCALE VALUE ──────────────────────────────────────────────────────────────
//

/// Integer rating on the fixed 1–5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct ScaleValue(u8);

impl ScaleValue {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// # Errors
    ///
    /// Returns `ScaleError::OutOfRange` for values outside 1..=5.
    pub fn new(value: i64) -> Result<Self, ScaleError> {
        match u8::try_from(value) {
            Ok(v) if (Self::MIN..=Self::MAX).contains(&v) => Ok(Self(v)),
            _ => Err(ScaleError::OutOfRange(value)),
        }
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Every selectable option, lowest first.
    pub fn options() -> impl Iterator<Item = ScaleValue> {
        (Self::MIN..=Self::MAX).map(ScaleValue)
    }
}

impl TryFrom<i64> for ScaleValue {
    type Error = ScaleError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ScaleValue> for u8 {
    fn from(value: ScaleValue) -> Self {
        value.0
    }
}

impl fmt::Display for ScaleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//
// ─── ANSWER VALUE ─────────────────────────────────────────────────────────────
//

/// A recorded answer. Serializes as a bare JSON number (scale) or string (text).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Scale(ScaleValue),
    Text(String),
}

impl AnswerValue {
    #[must_use]
    pub fn text(raw: impl Into<String>) -> Self {
        Self::Text(raw.into())
    }

    /// # Errors
    ///
    /// Returns `ScaleError::OutOfRange` for values outside 1..=5.
    pub fn scale(value: i64) -> Result<Self, ScaleError> {
        ScaleValue::new(value).map(Self::Scale)
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(s) => Some(s),
            AnswerValue::Scale(_) => None,
        }
    }

    #[must_use]
    pub fn as_scale(&self) -> Option<ScaleValue> {
        match self {
            AnswerValue::Scale(v) => Some(*v),
            AnswerValue::Text(_) => None,
        }
    }

    /// An empty text answer reads as "not answered" on the review screen.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, AnswerValue::Text(s) if s.is_empty())
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerValue::Scale(v) => write!(f, "{v}"),
            AnswerValue::Text(s) => f.write_str(s),
        }
    }
}
