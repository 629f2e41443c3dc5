pub(crate) mod event;
pub(crate) mod model;
mod reducer;
mod state;

use iced::Task;

pub(crate) use self::event::{ViewportEffect, ViewportEvent, ViewportIntent};
pub(crate) use self::model::ViewportMode;
use self::state::ViewportState;

/// Responsive mode resolver fed by window measurements.
pub(crate) struct ViewportWidget {
    state: ViewportState,
}

impl ViewportWidget {
    /// Create an unmeasured resolver classifying against `breakpoint`.
    pub(crate) fn new(breakpoint: f32) -> Self {
        Self {
            state: ViewportState::new(breakpoint),
        }
    }

    /// Reduce a viewport intent into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: ViewportIntent,
    ) -> Task<ViewportEvent> {
        reducer::reduce(&mut self.state, event)
    }

    /// Return the current mode; mobile until the first measurement.
    pub(crate) fn mode(&self) -> ViewportMode {
        self.state.mode()
    }

    /// Return the last measured width, or `0.0` before any measurement.
    pub(crate) fn width(&self) -> f32 {
        self.state.width().unwrap_or(0.0)
    }
}
