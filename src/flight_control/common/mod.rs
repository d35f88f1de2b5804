pub(crate) mod vec2d;
