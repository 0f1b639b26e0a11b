use crate::models::return_data::{Field, ReturnData};
use crate::models::value::Value;
use crate::string_case::{camelcase, underscore};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fields read from every operation's return value.
pub const RESPONSE_FIELDS: [&str; 19] = [
    "aCSUrl",
    "acquirerAddress",
    "acquirerAuthCode",
    "acquirerAuthResponseCode",
    "acquirerCity",
    "acquirerConsumerLimit",
    "acquirerErrorDescription",
    "acquirerFirstName",
    "acquirerLastName",
    "acquirerMerchantLimit",
    "acquirerZipCode",
    "amount",
    "errorMsg",
    "infoCode",
    "infoDescription",
    "pAReqMsg",
    "resultCode",
    "resultText",
    "verifyID",
];

/// A flattened operation result. Every field is available under four keys: the service's own name
/// (`resultCode`), `get_result_code`, `getResultCode` and `result_code`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, uniffi::Record)]
pub struct Response {
    pub fields: HashMap<String, Value>,
}

impl Response {
    /// Flattens the scalar fields of a return value. Nested and nil fields are left out, numeric text becomes
    /// an integer.
    pub fn normalize(data: &ReturnData) -> Self {
        let mut fields = HashMap::with_capacity(RESPONSE_FIELDS.len() * 4);

        for attribute in RESPONSE_FIELDS {
            let Some(Field::Scalar(raw)) = data.get(attribute) else {
                continue;
            };

            let value = Value::coerce(raw);
            let snake = underscore(attribute);

            fields.insert(format!("get_{snake}"), value.clone());
            fields.insert(format!("get{}", camelcase(attribute)), value.clone());
            fields.insert(snake, value.clone());
            fields.insert(attribute.to_string(), value);
        }

        Self { fields }
    }

    /// Looks a field up by any of its four spellings.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn result_code(&self) -> Option<i64> {
        self.get("resultCode").and_then(Value::as_integer)
    }

    pub fn result_text(&self) -> Option<&Value> {
        self.get("resultText")
    }

    pub fn verify_id(&self) -> Option<&Value> {
        self.get("verifyID")
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spellings(attribute: &str) -> [String; 4] {
        let snake = underscore(attribute);
        [
            attribute.to_string(),
            format!("get_{snake}"),
            format!("get{}", camelcase(attribute)),
            snake,
        ]
    }

    #[test]
    fn exposes_every_field_under_four_spellings() {
        let data: ReturnData = RESPONSE_FIELDS
            .iter()
            .map(|attribute| (*attribute, Field::Scalar("ABC".to_string())))
            .collect();

        let response = Response::normalize(&data);

        // `amount` is its own snake-case spelling
        assert_eq!(response.len(), RESPONSE_FIELDS.len() * 4 - 1);
        for attribute in RESPONSE_FIELDS {
            for key in spellings(attribute) {
                assert_eq!(
                    response.get(&key),
                    Some(&Value::Text("ABC".to_string())),
                    "{key}"
                );
            }
        }
    }

    #[test]
    fn numeric_values_are_integers_under_every_spelling() {
        let data: ReturnData = [
            ("resultCode", Field::Scalar("42".to_string())),
            ("amount", Field::Scalar("0".to_string())),
            ("resultText", Field::Scalar("ABC".to_string())),
        ]
        .into_iter()
        .collect();

        let response = Response::normalize(&data);

        for key in spellings("resultCode") {
            assert_eq!(response.get(&key), Some(&Value::Integer(42)));
        }
        for key in spellings("amount") {
            assert_eq!(response.get(&key), Some(&Value::Integer(0)));
        }
        for key in spellings("resultText") {
            assert_eq!(response.get(&key), Some(&Value::Text("ABC".to_string())));
        }
        assert_eq!(response.result_code(), Some(42));
    }

    #[test]
    fn acronym_fields_use_the_expected_keys() {
        let data: ReturnData = [
            ("aCSUrl", Field::Scalar("https://acs.example.com".to_string())),
            ("verifyID", Field::Scalar("1234567".to_string())),
        ]
        .into_iter()
        .collect();

        let response = Response::normalize(&data);

        assert!(response.get("get_a_cs_url").is_some());
        assert!(response.get("getACSUrl").is_some());
        assert!(response.get("a_cs_url").is_some());
        assert_eq!(response.get("get_verify_id"), Some(&Value::Integer(1234567)));
        assert_eq!(response.get("getVerifyID"), Some(&Value::Integer(1234567)));
        assert_eq!(response.verify_id(), Some(&Value::Integer(1234567)));
    }

    #[test]
    fn nested_and_nil_fields_are_omitted() {
        let data: ReturnData = [
            ("acquirerAddress", Field::Nested),
            ("errorMsg", Field::Nil),
            ("resultCode", Field::Scalar("0".to_string())),
        ]
        .into_iter()
        .collect();

        let response = Response::normalize(&data);

        assert_eq!(response.len(), 4);
        for key in spellings("acquirerAddress")
            .into_iter()
            .chain(spellings("errorMsg"))
        {
            assert_eq!(response.get(&key), None, "{key}");
        }
    }

    #[test]
    fn undeclared_fields_are_ignored() {
        let data: ReturnData = [("somethingElse", Field::Scalar("1".to_string()))]
            .into_iter()
            .collect();

        assert!(Response::normalize(&data).is_empty());
    }

    #[test]
    fn timeout_stand_in_normalizes_to_403() {
        let response = Response::normalize(&ReturnData::timeout());

        assert_eq!(response.result_code(), Some(403));
        assert_eq!(response.get("get_result_code"), Some(&Value::Integer(403)));
        assert_eq!(
            response.result_text(),
            Some(&Value::Text("SOAP Timeout".to_string()))
        );
    }
}
