pub(crate) mod health;
pub(crate) mod response_common;
