use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::gallery::{GalleryEffect, GalleryEvent, GalleryIntent};

/// Route a gallery event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: GalleryEvent) -> Task<AppEvent> {
    match event {
        GalleryEvent::Intent(intent) => route_intent(app, intent),
        GalleryEvent::Effect(effect) => {
            route_effect(app, effect);
            Task::none()
        },
    }
}

fn route_intent(app: &mut App, intent: GalleryIntent) -> Task<AppEvent> {
    app.widgets.gallery.reduce(intent).map(AppEvent::Gallery)
}

fn route_effect(app: &mut App, effect: GalleryEffect) {
    match effect {
        GalleryEffect::ReducedMotionChanged(reduced) => {
            log::debug!("reduced motion set to {reduced}");
            app.motion.set_reduced(reduced);
        },
    }
}
