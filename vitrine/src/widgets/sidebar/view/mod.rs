pub(crate) mod desktop_panel;
pub(crate) mod mobile_sheet;
