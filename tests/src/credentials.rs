use crate::support::api;
use debitech_soap::ApiError;

#[test]
fn valid_credentials() {
    let api = api("testshop", "testing", "123456");

    assert!(api.valid_credentials().unwrap());
}

#[test]
fn invalid_credentials() {
    let api = api("testshop", "testing", "wrong");

    assert!(!api.valid_credentials().unwrap());
}

#[test]
fn fault_during_probe_is_an_error() {
    let api = api("faultshop", "testing", "123456");

    assert!(matches!(
        api.valid_credentials(),
        Err(ApiError::Transport(_))
    ));
}
