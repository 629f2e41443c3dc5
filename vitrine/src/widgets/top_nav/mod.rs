pub(crate) mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

use iced::Task;

pub(crate) use self::event::{TopNavEffect, TopNavEvent, TopNavIntent};
use self::model::TopNavViewModel;
use self::state::TopNavState;

/// Floating pill navigation with local section selection.
pub(crate) struct TopNavWidget {
    state: TopNavState,
}

impl TopNavWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: TopNavState::default(),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(&mut self, event: TopNavIntent) -> Task<TopNavEvent> {
        reducer::reduce(&mut self.state, event)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> TopNavViewModel {
        TopNavViewModel {
            active_section: self.state.active_section(),
        }
    }
}
