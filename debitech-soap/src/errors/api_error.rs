use crate::errors::transport_error::TransportError;

/// Errors returned by the API client.
#[derive(Debug, uniffi::Error, thiserror::Error)]
#[uniffi(flat_error)]
pub enum ApiError {
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
    #[error("{operation} takes at most {expected} positional arguments, {given} given")]
    TooManyArguments {
        operation: String,
        expected: u32,
        given: u32,
    },
    #[error("Argument name is not a valid XML element name: {0:?}")]
    InvalidArgumentName(String),
    #[error("Unexpected result text: {0:?}")]
    UnexpectedResultText(String),
    #[error("Could not create runtime")]
    CouldNotCreateRuntime,
    #[error(transparent)]
    Transport(#[from] TransportError),
}
