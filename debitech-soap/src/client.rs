use crate::config::ClientConfig;
use crate::errors::api_error::ApiError;
use crate::errors::transport_error::TransportError;
use crate::http::soap_client::SoapClient;
use crate::models::arguments::Arguments;
use crate::models::credentials::Credentials;
use crate::models::response::Response;
use crate::models::return_data::{Field, ReturnData};
use crate::models::value::Value;
use crate::operation::{Operation, for_each_operation};
use crate::transport::{Request, Transport};
use log::{debug, warn};
use std::collections::HashMap;
use std::sync::Arc;

const CREDENTIALS_ACCEPTED: &str = "error_transID_or_verifyID";
const LOGIN_FAILED: &str = "336 web_service_login_failed";

macro_rules! async_operation_methods {
    ($(
        $variant:ident, $method:ident,
            [$remote:literal $(, $alias:literal)*],
            [$($param:literal),* $(,)?];
    )*) => {
        $(
            #[doc = concat!("Calls the `", $remote, "` operation.")]
            pub async fn $method(&self, arguments: impl Into<Arguments>) -> Result<Response, ApiError> {
                self.invoke(Operation::$variant, arguments.into()).await
            }
        )*
    };
}

/// Async DebiTech client. Every call merges the merchant credentials into the arguments, sends the operation and
/// returns its normalized [Response].
pub struct Client {
    credentials: Credentials,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Creates a client configured from the environment, see [ClientConfig::from_env].
    pub fn new(credentials: Credentials) -> Result<Self, ApiError> {
        Self::with_config(credentials, &ClientConfig::from_env())
    }

    pub fn with_config(credentials: Credentials, config: &ClientConfig) -> Result<Self, ApiError> {
        let transport = SoapClient::new(config)?;
        Ok(Self::with_transport(credentials, Arc::new(transport)))
    }

    pub fn with_transport(credentials: Credentials, transport: Arc<dyn Transport>) -> Self {
        Self {
            credentials,
            transport,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Merges the credentials with the arguments. Named arguments are applied after the credentials, so a
    /// same-named argument replaces a credential, and every name must be a plain XML element name. Positional
    /// arguments are assigned in the operation's parameter order and may be fewer than the parameters, never more.
    pub fn request(&self, operation: Operation, arguments: Arguments) -> Result<Request, ApiError> {
        let mut attributes: HashMap<String, Value> = self
            .credentials
            .attributes()
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect();

        match arguments {
            Arguments::Named(named) => {
                for (name, value) in named {
                    if !is_element_name(&name) {
                        return Err(ApiError::InvalidArgumentName(name));
                    }

                    if attributes.contains_key(&name) {
                        warn!("Argument {name} replaces the credential of the same name");
                    }

                    attributes.insert(name, value);
                }
            }

            Arguments::Positional(values) => {
                let parameters = operation.parameters();
                if values.len() > parameters.len() {
                    return Err(ApiError::TooManyArguments {
                        operation: operation.remote_name().to_string(),
                        expected: parameters.len() as u32,
                        given: values.len() as u32,
                    });
                }

                for (name, value) in parameters.iter().zip(values) {
                    attributes.insert(name.to_string(), value);
                }
            }
        }

        Ok(Request {
            operation,
            attributes,
        })
    }

    /// Sends an operation. A transport timeout is not an error: it yields a response with result code 403 and
    /// result text `SOAP Timeout`.
    pub async fn invoke(
        &self,
        operation: Operation,
        arguments: Arguments,
    ) -> Result<Response, ApiError> {
        let data = self.send(operation, arguments).await?;
        Ok(Response::normalize(&data))
    }

    async fn send(&self, operation: Operation, arguments: Arguments) -> Result<ReturnData, ApiError> {
        let request = self.request(operation, arguments)?;
        debug!(
            "Sending {operation} with {} attributes",
            request.attributes.len()
        );

        match self.transport.call(&request).await {
            Ok(data) => Ok(data),
            Err(TransportError::Timeout) => {
                warn!("{operation} timed out");
                Ok(ReturnData::timeout())
            }
            Err(error) => Err(error.into()),
        }
    }

    /// Sends an operation by any of its accepted names, e.g. `authReversal` or `auth_reversal`.
    pub async fn call(&self, operation: &str, arguments: Arguments) -> Result<Response, ApiError> {
        self.invoke(operation.parse()?, arguments).await
    }

    /// Checks the credentials with a zero amount refund of a transaction that can't exist. The service rejects the
    /// transaction reference only after accepting the login. The raw result text is compared, before any numeric
    /// coercion.
    ///
    /// A timeout is reported as [ApiError::UnexpectedResultText] carrying `SOAP Timeout`, never as a transport
    /// error.
    pub async fn valid_credentials(&self) -> Result<bool, ApiError> {
        let data = self
            .send(
                Operation::Refund,
                Arguments::named([
                    ("verifyID", Value::Integer(-1)),
                    ("amount", Value::Integer(0)),
                ]),
            )
            .await?;

        match data.get("resultText") {
            Some(Field::Scalar(text)) if text == CREDENTIALS_ACCEPTED => Ok(true),
            Some(Field::Scalar(text)) if text == LOGIN_FAILED => Ok(false),
            Some(Field::Scalar(text)) => Err(ApiError::UnexpectedResultText(text.clone())),
            _ => Err(ApiError::UnexpectedResultText(String::new())),
        }
    }

    for_each_operation!(async_operation_methods);
}

/// Whether a name can be written as an XML element name as is: ASCII letters, digits, `_`, `-` and `.`, starting
/// with a letter or `_`.
fn is_element_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}
