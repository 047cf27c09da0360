/// Errors produced while constructing a client registration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required field was never supplied, neither explicitly nor through
    /// provider defaults.
    #[error("client registration '{registration_id}' is missing required field '{field}'")]
    MissingField {
        registration_id: String,
        field: &'static str,
    },
}
