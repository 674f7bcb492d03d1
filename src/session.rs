pub(crate) mod backdrop;
