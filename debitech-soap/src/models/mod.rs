pub mod arguments;
pub mod credentials;
pub mod response;
pub mod return_data;
pub mod value;
