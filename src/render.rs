pub(crate) mod draw;
pub(crate) mod frame;
