pub(crate) mod envelope;
pub(crate) mod return_parser;
