use std::net::AddrParseError;
use strum_macros::Display;

/// Failures of the transport layer. The flight core itself never fails.
#[derive(Debug, Display)]
pub enum ServerError {
    InvalidAddress(AddrParseError),
    Io(std::io::Error),
}

impl std::error::Error for ServerError {}

impl From<std::io::Error> for ServerError {
    fn from(value: std::io::Error) -> Self { ServerError::Io(value) }
}

impl From<AddrParseError> for ServerError {
    fn from(value: AddrParseError) -> Self { ServerError::InvalidAddress(value) }
}
