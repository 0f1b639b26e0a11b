pub mod soap_client;
pub(crate) mod xml;
