pub mod api_error;
pub mod transport_error;
