/// Errors raised while talking to the SOAP service.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("The SOAP request timed out")]
    Timeout,
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error("Service replied with HTTP status {status}")]
    Status { status: u16, body: String },
    #[error("SOAP fault {code}: {message}")]
    Fault { code: String, message: String },
    #[error("Could not parse SOAP response: {0}")]
    Xml(String),
    #[error("SOAP response has no return value")]
    MissingReturn,
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            TransportError::Timeout
        } else {
            TransportError::Http(error)
        }
    }
}

impl From<quick_xml::Error> for TransportError {
    fn from(error: quick_xml::Error) -> Self {
        TransportError::Xml(error.to_string())
    }
}

impl From<quick_xml::DeError> for TransportError {
    fn from(error: quick_xml::DeError) -> Self {
        TransportError::Xml(error.to_string())
    }
}
