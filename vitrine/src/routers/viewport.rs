use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::viewport::{ViewportEffect, ViewportEvent, ViewportIntent};

/// Route a viewport event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: ViewportEvent) -> Task<AppEvent> {
    match event {
        ViewportEvent::Intent(intent) => route_intent(app, intent),
        ViewportEvent::Effect(effect) => route_effect(effect),
    }
}

fn route_intent(app: &mut App, intent: ViewportIntent) -> Task<AppEvent> {
    app.widgets.viewport.reduce(intent).map(AppEvent::Viewport)
}

fn route_effect(effect: ViewportEffect) -> Task<AppEvent> {
    match effect {
        ViewportEffect::ModeChanged(mode) => {
            log::debug!("viewport mode changed: desktop={}", mode.is_desktop);
            Task::done(AppEvent::SyncLayout)
        },
    }
}
