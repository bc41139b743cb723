use crate::views::ViewError;

/// Local state of the interview opt-in on the closing screen.
///
/// `requested` flips to true once the call returns, whether or not the
/// endpoint received it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InterviewState {
    loading: bool,
    requested: bool,
    notice: Option<ViewError>,
}

impl InterviewState {
    #[must_use]
    pub fn loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn requested(&self) -> bool {
        self.requested
    }

    /// Non-blocking notice left behind by a failed opt-in.
    #[must_use]
    pub fn notice(&self) -> Option<ViewError> {
        self.notice
    }

    #[must_use]
    pub fn button_label(&self) -> &'static str {
        if self.loading {
            "Registrando..."
        } else {
            "Sí, me interesa"
        }
    }

    /// `false` while a request is already in flight or after it was recorded.
    pub fn begin(&mut self) -> bool {
        if self.loading || self.requested {
            return false;
        }
        self.loading = true;
        true
    }

    pub fn finish(&mut self, delivered: bool) {
        self.loading = false;
        if !delivered {
            self.notice = Some(ViewError::InterviewFailed);
        }
        self.requested = true;
    }
}
