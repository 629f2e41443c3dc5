use iced::Task;

use super::shell;
use crate::app::{App, AppEvent};
use crate::navigation::Route;
use crate::pages::overview::OverviewEvent;
use crate::widgets::shell::ShellIntent;

/// Route hero calls to action to the route boundary and the shell.
pub(crate) fn route(app: &mut App, event: OverviewEvent) -> Task<AppEvent> {
    match event {
        OverviewEvent::ExploreComponents => {
            let route = Route::Components;
            if app.navigator.navigate(route) {
                log::debug!("navigated to {}", route.path());
            }
            shell::dispatch(ShellIntent::SyncActiveRoute(route))
        },
        OverviewEvent::OpenDrawer => shell::dispatch(ShellIntent::OpenDrawer),
    }
}
