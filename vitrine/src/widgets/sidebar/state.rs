/// Local hover state of the desktop panel.
#[derive(Debug, Default)]
pub(super) struct SidebarState {
    panel_hovered: bool,
}

impl SidebarState {
    pub(super) fn is_panel_hovered(&self) -> bool {
        self.panel_hovered
    }

    pub(super) fn set_panel_hovered(&mut self, hovered: bool) {
        self.panel_hovered = hovered;
    }
}
