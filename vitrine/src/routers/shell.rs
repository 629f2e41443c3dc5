use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::shell::{ShellCtx, ShellEffect, ShellEvent, ShellIntent};

/// Route a shell event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: ShellEvent) -> Task<AppEvent> {
    match event {
        ShellEvent::Intent(intent) => route_intent(app, intent),
        ShellEvent::Effect(effect) => route_effect(app, effect),
    }
}

/// Queue a shell intent from another widget's router.
pub(crate) fn dispatch(intent: ShellIntent) -> Task<AppEvent> {
    Task::done(AppEvent::Shell(ShellEvent::Intent(intent)))
}

fn route_intent(app: &mut App, intent: ShellIntent) -> Task<AppEvent> {
    let ctx = ShellCtx {
        viewport: app.widgets.viewport.mode(),
    };
    app.widgets.shell.reduce(intent, &ctx).map(AppEvent::Shell)
}

fn route_effect(app: &mut App, effect: ShellEffect) -> Task<AppEvent> {
    match effect {
        ShellEffect::Navigate(route) => {
            if app.navigator.navigate(route) {
                log::debug!("navigated to {}", route.path());
            }
            Task::none()
        },
        ShellEffect::LayoutChanged => Task::done(AppEvent::SyncLayout),
    }
}
