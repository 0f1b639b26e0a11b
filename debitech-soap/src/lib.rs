//! A client for the DIBS DebiTech SOAP payment API: authorizations, settlements, refunds, subscriptions and
//! 3-D Secure flows.
//!
//! Every operation takes either named arguments or positional ones in the service's parameter order, and returns
//! a flat [Response] where each field can be read under four spellings (`resultCode`, `get_result_code`,
//! `getResultCode`, `result_code`).
//! # Usage
//! ```no_run
//! use debitech_soap::{Api, Arguments, Value};
//!
//! let api = Api::new(
//!     "testshop".to_string(),
//!     "testing".to_string(),
//!     "123456".to_string(),
//! )
//! .unwrap();
//!
//! if api.valid_credentials().unwrap() {
//!     // Positional, in the order verifyID, transID, amount, extra
//!     let response = api
//!         .settle(vec![Value::from(1234567), Value::from("order-1"), Value::from(2500)])
//!         .unwrap();
//!
//!     // Named
//!     let response = api
//!         .refund(Arguments::named([("verifyID", 1234567), ("amount", 2500)]))
//!         .unwrap();
//!
//!     println!("{:?}", response.get("getResultText"));
//! }
//! ```
//! # Configuration
//! [ClientConfig::from_env] reads `DEBITECH_SOAP_ENDPOINT`, `DEBITECH_SOAP_TIMEOUT` (seconds) and
//! `DIBS_HTTPCLIENT_CIPHERS`. Set [wiredump][ClientConfig::wiredump] to log request and response envelopes at trace
//! level.
//! # Bindings
//! Bindings for Kotlin and Swift can be generated with
//! [UniFFI](https://mozilla.github.io/uniffi-rs/latest/tutorial/foreign_language_bindings.html#multi-crate-workspaces).
//!

pub mod client;
pub mod config;
pub mod errors;
mod exports;
pub mod http;
pub mod models;
pub mod operation;
pub mod string_case;
pub mod transport;

uniffi::setup_scaffolding!();

pub use client::Client;
pub use config::ClientConfig;
pub use errors::api_error::ApiError;
pub use errors::transport_error::TransportError;
pub use exports::api::Api;
pub use models::arguments::Arguments;
pub use models::credentials::Credentials;
pub use models::response::Response;
pub use models::value::Value;
pub use operation::Operation;
