pub(crate) mod backdrop;
pub(crate) mod curve_plot;
pub(crate) mod icon_button;
pub(crate) mod nav_item;
pub(crate) mod section;
pub(crate) mod token_row;
