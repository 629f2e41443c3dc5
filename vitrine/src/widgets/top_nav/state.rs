use super::model::NavSection;

#[derive(Debug, Default)]
pub(super) struct TopNavState {
    active_section: NavSection,
}

impl TopNavState {
    pub(super) fn active_section(&self) -> NavSection {
        self.active_section
    }

    pub(super) fn set_active_section(&mut self, section: NavSection) {
        self.active_section = section;
    }
}
