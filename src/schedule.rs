pub(crate) mod clock;
pub(crate) mod refresh;
pub(crate) mod scheduler;
