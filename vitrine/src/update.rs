use iced::{Task, window};

use super::{App, AppEvent};
use crate::routers;

/// Thin dispatch: route each event to its owning router or handler.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    route(app, event)
}

fn route(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        // Shell coordinator
        AppEvent::Shell(event) => routers::shell::route(app, event),
        // Responsive mode resolver
        AppEvent::Viewport(event) => routers::viewport::route(app, event),
        // Navigation presentation
        AppEvent::Sidebar(event) => routers::sidebar::route(app, event),
        AppEvent::TopNav(event) => routers::top_nav::route(app, event),
        // Pages
        AppEvent::Gallery(event) => routers::gallery::route(app, event),
        AppEvent::Overview(event) => routers::overview::route(app, event),
        // Direct operations
        AppEvent::SyncLayout => {
            routers::window::sync_layout(app);
            Task::none()
        },
        AppEvent::Window(window::Event::Opened { size, .. })
        | AppEvent::Window(window::Event::Resized(size)) => {
            routers::window::handle_resize(app, size)
        },
        AppEvent::Window(_) => Task::none(),
        AppEvent::Frame(now) => {
            routers::window::handle_frame(app, now);
            Task::none()
        },
    }
}
