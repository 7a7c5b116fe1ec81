pub(crate) mod effects;
pub(crate) mod host;
pub(crate) mod session;
pub(crate) mod spinner;
pub(crate) mod state;
