pub(crate) mod drawer;
