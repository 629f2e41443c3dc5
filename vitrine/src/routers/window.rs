use iced::time::Instant;
use iced::{Size, Task};

use crate::app::{App, AppEvent};
use crate::layout::ShellLayout;
use crate::widgets::viewport::{ViewportEvent, ViewportIntent};

/// Record the new window size and feed its width to the viewport.
pub(crate) fn handle_resize(app: &mut App, size: Size) -> Task<AppEvent> {
    app.state.window_size = size;
    Task::done(AppEvent::Viewport(ViewportEvent::Intent(
        ViewportIntent::Measured(size.width),
    )))
}

/// Advance running transitions to the frame timestamp.
pub(crate) fn handle_frame(app: &mut App, now: Instant) {
    app.motion.advance(now);
}

/// Retarget transitions at the current settled layout.
pub(crate) fn sync_layout(app: &mut App) {
    let layout = current_layout(app);
    let drawer_open = app.widgets.shell.vm().drawer_open;
    app.motion.retarget(&layout, drawer_open, Instant::now());
}

/// Compute the settled shell layout from app state.
pub(crate) fn current_layout(app: &App) -> ShellLayout {
    ShellLayout::compute(
        &app.widgets.shell.vm(),
        app.widgets.viewport.mode(),
        app.widgets.viewport.width(),
    )
}
