use iced::{Subscription, window};

use crate::app::{App, AppEvent};

/// Build the active subscription set from current app state.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    let win_subs = window::events().map(|(_id, event)| AppEvent::Window(event));

    let mut subs = vec![win_subs];

    // Frame ticks only while a transition is running.
    if app.motion.is_animating() {
        subs.push(window::frames().map(AppEvent::Frame));
    }

    Subscription::batch(subs)
}
