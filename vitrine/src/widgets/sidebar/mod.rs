pub(crate) mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

use iced::Task;

pub(crate) use self::event::{SidebarEffect, SidebarEvent, SidebarIntent};
use self::model::SidebarViewModel;
use self::state::SidebarState;

/// Sidebar presentation widget; disclosure lives in the shell.
pub(crate) struct SidebarWidget {
    state: SidebarState,
}

impl SidebarWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: SidebarState::default(),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(&mut self, event: SidebarIntent) -> Task<SidebarEvent> {
        reducer::reduce(&mut self.state, event)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> SidebarViewModel {
        SidebarViewModel {
            panel_hovered: self.state.is_panel_hovered(),
        }
    }
}
