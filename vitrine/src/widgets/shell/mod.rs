pub(crate) mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

use iced::Task;

pub(crate) use self::event::{ShellEffect, ShellEvent, ShellIntent};
use self::model::ShellViewModel;
pub(crate) use self::reducer::ShellCtx;
use self::state::ShellState;
use crate::navigation::Route;

/// Shell coordinator owning the disclosure state of the app frame.
pub(crate) struct ShellWidget {
    state: ShellState,
}

impl ShellWidget {
    /// Create the shell with every affordance closed.
    pub(crate) fn new(initial_route: Route) -> Self {
        Self {
            state: ShellState::new(initial_route),
        }
    }

    /// Reduce a shell intent into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: ShellIntent,
        ctx: &ShellCtx,
    ) -> Task<ShellEvent> {
        reducer::reduce(&mut self.state, event, ctx)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> ShellViewModel {
        ShellViewModel {
            mobile_sidebar_open: self.state.is_mobile_sidebar_open(),
            sidebar_collapsed: self.state.is_sidebar_collapsed(),
            drawer_open: self.state.is_drawer_open(),
            active_nav_item: self.state.active_nav_item(),
        }
    }
}
