use crate::config::{CIPHERS_VAR, ClientConfig};
use crate::errors::transport_error::TransportError;
use crate::http::xml::envelope::request_envelope;
use crate::http::xml::return_parser::parse_response;
use crate::models::return_data::ReturnData;
use crate::transport::{Request, Transport};
use log::{debug, trace, warn};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};

/// Sends operation calls to the DebiTech service as SOAP 1.1 RPC over HTTP(S).
pub struct SoapClient {
    client: reqwest::Client,
    endpoint: String,
    namespace: String,
    ciphers: Option<String>,
    wiredump: bool,
}

impl SoapClient {
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;

        if let Some(ciphers) = &config.ciphers {
            warn!("reqwest has no cipher suite setting, {CIPHERS_VAR}={ciphers:?} is not applied");
        }

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            namespace: config.namespace.clone(),
            ciphers: config.ciphers.clone(),
            wiredump: config.wiredump,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The cipher list this client was configured with, unparsed.
    pub fn ciphers(&self) -> Option<&str> {
        self.ciphers.as_deref()
    }
}

#[async_trait::async_trait]
impl Transport for SoapClient {
    async fn call(&self, request: &Request) -> Result<ReturnData, TransportError> {
        let operation = request.operation.remote_name();

        let mut headers = HeaderMap::with_capacity(2);
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("text/xml; charset=utf-8"),
        );
        headers.insert(
            "SOAPAction",
            HeaderValue::from_str(&format!("\"urn:{operation}\""))?,
        );

        let xml = request_envelope(request, &self.namespace);
        debug!("Calling {operation} at {}", self.endpoint);
        if self.wiredump {
            trace!("C: {xml}");
        }

        let response = self
            .client
            .post(&self.endpoint)
            .headers(headers)
            .body(xml)
            .send()
            .await?;

        let status = response.status();
        let xml = response.text().await?;
        if self.wiredump {
            trace!("S: {xml}");
        }

        match parse_response(&xml) {
            Ok(data) if status.is_success() => Ok(data),
            Err(fault @ TransportError::Fault { .. }) => Err(fault),
            Err(error) if status.is_success() => Err(error),
            _ => Err(TransportError::Status {
                status: status.as_u16(),
                body: xml,
            }),
        }
    }
}
