/// Minimal syntactic email check used to gate the consent step.
///
/// Only requires an `@` and a `.` somewhere in the string; anything stricter
/// belongs to the endpoint.
#[must_use]
pub fn is_plausible_email(raw: &str) -> bool {
    raw.contains('@') && raw.contains('.')
}
