pub(crate) mod altitude_post;
pub(crate) mod battery_consume_post;
pub(crate) mod position_post;
pub(crate) mod request_common;
mod sensor_post;
pub(crate) mod speed_post;
