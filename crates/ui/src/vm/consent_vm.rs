use survey_core::model::is_plausible_email;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsentVm {
    pub email: String,
    pub can_continue: bool,
}

impl ConsentVm {
    #[must_use]
    pub fn from_email(email: &str) -> Self {
        Self {
            email: email.to_string(),
            can_continue: is_plausible_email(email),
        }
    }

    /// CSS hook for the input border: highlighted once the email looks usable.
    #[must_use]
    pub fn input_class(&self) -> &'static str {
        if self.can_continue {
            "email-input email-input--valid"
        } else {
            "email-input"
        }
    }
}
