use crate::errors::transport_error::TransportError;
use crate::models::return_data::ReturnData;
use crate::models::value::Value;
use crate::operation::Operation;
use std::collections::HashMap;

const CREDENTIAL_ATTRIBUTES: [&str; 3] = ["shopName", "userName", "password"];

/// A fully merged call, ready to be sent.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub operation: Operation,
    pub attributes: HashMap<String, Value>,
}

impl Request {
    /// Attributes in wire order: credentials, then the operation's declared parameters, then anything else by name.
    pub fn ordered_attributes(&self) -> Vec<(&str, &Value)> {
        let declared: Vec<&str> = CREDENTIAL_ATTRIBUTES
            .iter()
            .chain(self.operation.parameters())
            .copied()
            .collect();

        let mut ordered: Vec<(&str, &Value)> = declared
            .iter()
            .filter_map(|name| self.attributes.get_key_value(*name))
            .map(|(name, value)| (name.as_str(), value))
            .collect();

        let mut rest: Vec<(&str, &Value)> = self
            .attributes
            .iter()
            .filter(|(name, _)| !declared.contains(&name.as_str()))
            .map(|(name, value)| (name.as_str(), value))
            .collect();
        rest.sort_by_key(|(name, _)| *name);

        ordered.append(&mut rest);
        ordered
    }
}

/// Sends requests to the service. [SoapClient][crate::http::soap_client::SoapClient] is the HTTP implementation; other
/// implementations can be plugged into [Client::with_transport][crate::client::Client::with_transport].
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn call(&self, request: &Request) -> Result<ReturnData, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_credentials_then_parameters_then_extras() {
        let attributes = [
            ("zebra", Value::from("z")),
            ("amount", Value::from(100)),
            ("password", Value::from("123456")),
            ("verifyID", Value::from(1)),
            ("shopName", Value::from("testshop")),
            ("alpha", Value::from("a")),
            ("userName", Value::from("testing")),
        ]
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect();

        let request = Request {
            operation: Operation::Refund,
            attributes,
        };

        let names: Vec<&str> = request
            .ordered_attributes()
            .into_iter()
            .map(|(name, _)| name)
            .collect();

        assert_eq!(
            names,
            ["shopName", "userName", "password", "verifyID", "amount", "alpha", "zebra"]
        );
    }
}
