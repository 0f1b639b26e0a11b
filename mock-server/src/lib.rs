//! A stand-in for the DebiTech SOAP service, answering just enough of the API for integration tests.

pub mod mock_gateway;

pub use mock_gateway::MockGateway;
