use iced::Task;

use super::event::{ViewportEffect, ViewportEvent, ViewportIntent};
use super::model::ViewportMode;
use super::state::ViewportState;

/// Reduce a viewport intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut ViewportState,
    event: ViewportIntent,
) -> Task<ViewportEvent> {
    match event {
        ViewportIntent::Measured(width) => {
            let before = state.mode();
            let previous = state.measure(width);

            match announced_mode(previous, before, state.mode()) {
                Some(mode) => Task::done(ViewportEvent::Effect(
                    ViewportEffect::ModeChanged(mode),
                )),
                None => Task::none(),
            }
        },
    }
}

/// Return the mode to announce after a measurement, if any.
fn announced_mode(
    previous_width: Option<f32>,
    before: ViewportMode,
    after: ViewportMode,
) -> Option<ViewportMode> {
    (previous_width.is_none() || before != after).then_some(after)
}
