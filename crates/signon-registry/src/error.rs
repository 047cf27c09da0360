/// Errors produced while resolving client registrations from properties.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A registration referenced a provider that is neither declared in the
    /// properties nor part of the built-in catalog.
    #[error("Unknown provider ID '{0}'")]
    UnknownProvider(String),

    /// The resolved registration was missing a required field.
    #[error(transparent)]
    Incomplete(#[from] signon_oauth::Error),

    /// Failed to parse a properties document.
    #[error("failed to parse client properties: {0}")]
    Parse(#[from] serde_json::Error),
}
