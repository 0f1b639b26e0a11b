use log::warn;
use std::env;
use std::time::Duration;

/// Production DebiTech SOAP service.
pub const DEFAULT_ENDPOINT: &str = "https://secure.incab.se/axis2/services/DTServerModuleService_v1";
pub const DEFAULT_NAMESPACE: &str = "urn:DTServerModuleService_v1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

pub const CIPHERS_VAR: &str = "DIBS_HTTPCLIENT_CIPHERS";
pub const ENDPOINT_VAR: &str = "DEBITECH_SOAP_ENDPOINT";
pub const TIMEOUT_VAR: &str = "DEBITECH_SOAP_TIMEOUT";

/// Client settings. [ClientConfig::from_env] is what [Api::new][crate::Api::new] uses.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct ClientConfig {
    pub endpoint: String,
    pub namespace: String,
    pub timeout: Duration,
    /// Cipher list for the TLS layer, passed through as given.
    pub ciphers: Option<String>,
    /// Log every request and response envelope at trace level.
    pub wiredump: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            timeout: DEFAULT_TIMEOUT,
            ciphers: None,
            wiredump: false,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(endpoint) = lookup(ENDPOINT_VAR) {
            config.endpoint = endpoint;
        }

        if let Some(timeout) = lookup(TIMEOUT_VAR) {
            match timeout.trim().parse::<u64>() {
                Ok(seconds) => config.timeout = Duration::from_secs(seconds),
                Err(_) => warn!("Ignoring {TIMEOUT_VAR}={timeout:?}, expected a number of seconds"),
            }
        }

        config.ciphers = lookup(CIPHERS_VAR);
        config
    }
}
