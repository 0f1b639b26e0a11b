use crate::support::api;
use debitech_soap::{ApiError, Arguments, Value};

#[test]
fn timeout_returns_a_soap_timeout_response() {
    let api = api("slowshop", "testing", "123456");

    let response = api
        .auth_reversal(Arguments::positional([1234567, 100]))
        .unwrap();

    assert_eq!(response.result_code(), Some(403));
    assert_eq!(response.get("getResultText"), Some(&Value::from("SOAP Timeout")));
    assert_eq!(response.get("verifyID"), None);
}

#[test]
fn timeout_during_probe_is_unexpected() {
    let api = api("slowshop", "testing", "123456");

    assert!(matches!(
        api.valid_credentials(),
        Err(ApiError::UnexpectedResultText(text)) if text == "SOAP Timeout"
    ));
}
