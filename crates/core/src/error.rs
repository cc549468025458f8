/// Domain-level errors raised while turning a request body into work.
///
/// The API layer decides how each variant is exposed; only
/// [`CoreError::Validation`] carries a message meant for the client.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A required deployment setting is absent. Holds the variable name.
    #[error("Missing configuration: {0}")]
    Configuration(&'static str),
}
