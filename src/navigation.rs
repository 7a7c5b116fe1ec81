pub(crate) mod cursor;
pub(crate) mod input;
pub(crate) mod repeat;
