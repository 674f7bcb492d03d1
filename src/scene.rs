pub(crate) mod build;
pub(crate) mod entity;
pub(crate) mod state;
