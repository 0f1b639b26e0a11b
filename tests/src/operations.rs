use crate::support::api;
use debitech_soap::{ApiError, Arguments, TransportError, Value};

#[test]
fn settle_with_positional_arguments() {
    let api = api("testshop", "testing", "123456");

    let response = api
        .settle(vec![
            Value::from(7654321),
            Value::from("order-1"),
            Value::from(2500),
        ])
        .unwrap();

    for key in ["resultCode", "get_result_code", "getResultCode", "result_code"] {
        assert_eq!(response.get(key), Some(&Value::Integer(200)));
    }
    assert_eq!(response.get("getVerifyID"), Some(&Value::Integer(7654321)));
    assert_eq!(response.get("amount"), Some(&Value::Integer(2500)));
    assert_eq!(
        response.get("info_description"),
        Some(&Value::from("settle for order-1"))
    );
    assert_eq!(response.get("acquirerAddress"), None);
    assert_eq!(response.get("errorMsg"), None);
}

#[test]
fn aliases_reach_the_same_operation() {
    let api = api("testshop", "testing", "123456");

    let camel = api
        .call(
            "authorizeAndSettle".to_string(),
            Arguments::named([("transID", "order-2"), ("currency", "SEK")]),
        )
        .unwrap();
    let snake = api
        .call(
            "authorize_and_settle".to_string(),
            Arguments::named([("transID", "order-2"), ("currency", "SEK")]),
        )
        .unwrap();

    assert_eq!(camel, snake);
    assert_eq!(
        camel.get("infoDescription"),
        Some(&Value::from("authorizeAndSettle for order-2"))
    );
}

#[test]
fn escaped_values_survive_the_round_trip() {
    let api = api("testshop", "testing", "123456");

    let response = api
        .authorize(Arguments::named([("transID", "Fish & Chips <1>")]))
        .unwrap();

    assert_eq!(
        response.get("infoDescription"),
        Some(&Value::from("authorize for Fish & Chips <1>"))
    );
}

#[test]
fn wrong_login_is_reported_in_the_response() {
    let api = api("testshop", "nobody", "123456");

    let response = api.refund(Arguments::positional([1234567])).unwrap();

    assert_eq!(response.result_code(), Some(336));
    assert_eq!(
        response.get("get_result_text"),
        Some(&Value::Integer(336))
    );
    assert_eq!(response.get("resultText"), Some(&Value::Integer(336)));
}

#[test]
fn soap_fault_is_an_error() {
    let api = api("faultshop", "testing", "123456");

    let result = api.subscribe(Arguments::default());

    match result {
        Err(ApiError::Transport(TransportError::Fault { code, message })) => {
            assert_eq!(code, "soapenv:Server");
            assert_eq!(message, "Internal error");
        }
        other => panic!("expected a SOAP fault, got {other:?}"),
    }
}
