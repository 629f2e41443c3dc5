pub(crate) mod component_grid;
pub(crate) mod dialog;
