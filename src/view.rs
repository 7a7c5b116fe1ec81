pub(crate) mod selection;
pub(crate) mod sidebar;
pub(crate) mod viewport;
