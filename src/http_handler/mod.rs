pub(crate) mod http_request;
pub(crate) mod http_response;
pub mod http_server;

pub use http_response::response_common::ServerError;
pub use http_server::{bind, serve};
