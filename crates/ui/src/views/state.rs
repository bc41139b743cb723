#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    SubmissionFailed,
    InterviewFailed,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::SubmissionFailed => "Error al enviar. Intente nuevamente.",
            ViewError::InterviewFailed => {
                "Hubo un pequeño error de conexión, pero gracias por tu interés."
            }
        }
    }
}

/// What a screen renders: its data, or the neutral placeholder while there is none.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Ready(T),
}

impl<T> From<Option<T>> for ViewState<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(ViewState::Loading, ViewState::Ready)
    }
}
