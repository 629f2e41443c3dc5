use iced::Task;

use super::shell;
use crate::app::{App, AppEvent};
use crate::widgets::shell::ShellIntent;
use crate::widgets::top_nav::{TopNavEffect, TopNavEvent, TopNavIntent};

/// Route a top nav event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: TopNavEvent) -> Task<AppEvent> {
    match event {
        TopNavEvent::Intent(intent) => route_intent(app, intent),
        TopNavEvent::Effect(effect) => route_effect(app, effect),
    }
}

fn route_intent(app: &mut App, intent: TopNavIntent) -> Task<AppEvent> {
    app.widgets.top_nav.reduce(intent).map(AppEvent::TopNav)
}

fn route_effect(app: &mut App, effect: TopNavEffect) -> Task<AppEvent> {
    match effect {
        TopNavEffect::ToggleMobileSidebar => {
            shell::dispatch(ShellIntent::ToggleMobileSidebar)
        },
        TopNavEffect::ToggleDrawer => shell::dispatch(ShellIntent::ToggleDrawer),
        TopNavEffect::ToggleTheme => {
            let kind = app.theme_manager.toggle();
            log::debug!("theme switched to {kind:?}");
            Task::none()
        },
    }
}
