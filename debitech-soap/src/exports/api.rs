use crate::config::ClientConfig;
use crate::errors::api_error::ApiError;
use crate::models::arguments::Arguments;
use crate::models::credentials::Credentials;
use crate::models::response::Response;
use crate::operation::{Operation, for_each_operation};
use crate::transport::Transport;
use std::sync::Arc;
use tokio::runtime::{Builder, Runtime};

macro_rules! blocking_operation_methods {
    ($(
        $variant:ident, $method:ident,
            [$remote:literal $(, $alias:literal)*],
            [$($param:literal),* $(,)?];
    )*) => {
        $(
            #[doc = concat!("Calls the `", $remote, "` operation and waits for the response.")]
            pub fn $method(&self, arguments: impl Into<Arguments>) -> Result<Response, ApiError> {
                self.rt
                    .block_on(self.inner.invoke(Operation::$variant, arguments.into()))
            }
        )*
    };
}

/// Blocking DebiTech client. Wraps the async [Client][crate::client::Client] in its own single threaded runtime,
/// so it must not be used from inside another async runtime.
#[derive(uniffi::Object)]
pub struct Api {
    inner: crate::client::Client,
    rt: Runtime,
}

#[uniffi::export]
impl Api {
    /// Creates a client for a merchant, configured from the environment.
    #[uniffi::constructor]
    pub fn new(merchant: String, username: String, password: String) -> Result<Self, ApiError> {
        Self::with_config(
            Credentials {
                merchant,
                username,
                password,
            },
            ClientConfig::from_env(),
        )
    }

    #[uniffi::constructor]
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self, ApiError> {
        let rt = runtime()?;
        let inner = crate::client::Client::with_config(credentials, &config)?;
        Ok(Self { inner, rt })
    }

    /// Sends an operation by any of its accepted names, e.g. `authReversal` or `auth_reversal`.
    pub fn call(&self, operation: String, arguments: Arguments) -> Result<Response, ApiError> {
        self.rt.block_on(self.inner.call(&operation, arguments))
    }

    /// Returns whether the service accepts the merchant credentials.
    pub fn valid_credentials(&self) -> Result<bool, ApiError> {
        self.rt.block_on(self.inner.valid_credentials())
    }

    pub fn merchant(&self) -> String {
        self.inner.credentials().merchant.clone()
    }
}

impl Api {
    pub fn with_transport(
        credentials: Credentials,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, ApiError> {
        let rt = runtime()?;
        let inner = crate::client::Client::with_transport(credentials, transport);
        Ok(Self { inner, rt })
    }

    for_each_operation!(blocking_operation_methods);
}

fn runtime() -> Result<Runtime, ApiError> {
    Builder::new_current_thread()
        .enable_all()
        .build()
        .or(Err(ApiError::CouldNotCreateRuntime))
}
