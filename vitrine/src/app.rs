#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use iced::time::Instant;
use iced::{Element, Size, Subscription, Task, Theme, window};

use crate::config::{self, ShellConfig};
use crate::layout::SidebarWidth;
use crate::motion::ShellMotion;
use crate::navigation::Navigator;
use crate::pages::overview::OverviewEvent;
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::{ThemeKind, ThemeManager};
use crate::state::State;
use crate::widgets::gallery::{GalleryEvent, GalleryWidget};
use crate::widgets::shell::{ShellEvent, ShellWidget};
use crate::widgets::sidebar::{SidebarEvent, SidebarWidget};
use crate::widgets::top_nav::{TopNavEvent, TopNavWidget};
use crate::widgets::viewport::{ViewportEvent, ViewportWidget};

pub(crate) const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub(crate) const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;
pub(crate) const MIN_WINDOW_WIDTH: f32 = 360.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    // Shell coordinator
    Shell(ShellEvent),
    // Responsive mode resolver
    Viewport(ViewportEvent),
    // Navigation presentation
    Sidebar(SidebarEvent),
    TopNav(TopNavEvent),
    // Pages
    Gallery(GalleryEvent),
    Overview(OverviewEvent),
    // Direct operations
    SyncLayout,
    Window(window::Event),
    Frame(Instant),
}

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) shell: ShellWidget,
    pub(crate) viewport: ViewportWidget,
    pub(crate) sidebar: SidebarWidget,
    pub(crate) top_nav: TopNavWidget,
    pub(crate) gallery: GalleryWidget,
}

/// Root application state.
pub(crate) struct App {
    pub(crate) theme_manager: ThemeManager,
    pub(crate) fonts: FontsConfig,
    pub(crate) navigator: Navigator,
    pub(crate) motion: ShellMotion,
    pub(crate) state: State,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let config = config::load_initial_config();
        (Self::from_config(&config), Task::none())
    }

    fn from_config(config: &ShellConfig) -> Self {
        let initial_route = config.initial_route();
        let theme_kind = if config.dark_theme {
            ThemeKind::Dark
        } else {
            ThemeKind::Light
        };

        let widgets = Widgets {
            shell: ShellWidget::new(initial_route),
            viewport: ViewportWidget::new(config.breakpoint),
            sidebar: SidebarWidget::new(),
            top_nav: TopNavWidget::new(),
            gallery: GalleryWidget::new(config.reduced_motion),
        };

        App {
            theme_manager: ThemeManager::new(theme_kind),
            fonts: FontsConfig::default(),
            navigator: Navigator::new(initial_route),
            motion: ShellMotion::new(
                SidebarWidth::Expanded.px(),
                config.reduced_motion,
            ),
            state: State::new(Size {
                width: DEFAULT_WINDOW_WIDTH,
                height: DEFAULT_WINDOW_HEIGHT,
            }),
            widgets,
        }
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        format!("Vitrine \u{b7} {}", self.navigator.current().label())
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        self.theme_manager.iced_theme()
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}

#[cfg(test)]
mod tests {
    use iced::Size;
    use iced::window;

    use super::{App, AppEvent};
    use crate::config::ShellConfig;
    use crate::navigation::Route;
    use crate::pages::overview::OverviewEvent;
    use crate::routers;
    use crate::widgets::shell::{ShellEffect, ShellEvent, ShellIntent};
    use crate::widgets::top_nav::{TopNavEffect, TopNavEvent};
    use crate::widgets::viewport::{ViewportEvent, ViewportIntent};

    fn app() -> App {
        App::from_config(&ShellConfig::default())
    }

    fn measure(app: &mut App, width: f32) {
        let _task = routers::window::handle_resize(app, Size::new(width, 800.0));
        let _task = app.update(AppEvent::Viewport(ViewportEvent::Intent(
            ViewportIntent::Measured(width),
        )));
    }

    fn shell(app: &mut App, intent: ShellIntent) {
        let _task = app.update(AppEvent::Shell(ShellEvent::Intent(intent)));
    }

    #[test]
    fn given_default_config_when_app_starts_then_overview_is_current() {
        let app = app();

        assert_eq!(app.navigator.current(), Route::Overview);
        assert!(!app.widgets.viewport.mode().is_desktop);
        assert_eq!(app.title(), "Vitrine \u{b7} Overview");
    }

    #[test]
    fn given_desktop_window_when_collapsing_then_content_offset_shrinks() {
        let mut app = app();
        measure(&mut app, 1280.0);
        assert_eq!(routers::window::current_layout(&app).content_offset, 220.0);

        shell(&mut app, ShellIntent::ToggleSidebarCollapsed);

        assert_eq!(routers::window::current_layout(&app).content_offset, 60.0);
    }

    #[test]
    fn given_open_mobile_sheet_when_item_selected_then_route_and_sheet_update() {
        let mut app = app();
        measure(&mut app, 600.0);
        shell(&mut app, ShellIntent::ToggleMobileSidebar);
        assert!(routers::window::current_layout(&app).mobile_sheet_visible);

        shell(&mut app, ShellIntent::SelectNavItem(Route::Components));
        let _task = app.update(AppEvent::Shell(ShellEvent::Effect(
            ShellEffect::Navigate(Route::Components),
        )));

        assert_eq!(app.navigator.current(), Route::Components);
        assert!(!app.widgets.shell.vm().mobile_sidebar_open);
    }

    #[test]
    fn given_hero_cta_when_exploring_then_navigator_moves_to_components() {
        let mut app = app();
        let _task =
            app.update(AppEvent::Overview(OverviewEvent::ExploreComponents));

        assert_eq!(app.navigator.current(), Route::Components);
    }

    #[test]
    fn given_theme_toggle_effect_when_routed_then_theme_flips() {
        let mut app = app();
        let before = app.theme_manager.current().kind();
        let _task = app.update(AppEvent::TopNav(TopNavEvent::Effect(
            TopNavEffect::ToggleTheme,
        )));

        assert_ne!(app.theme_manager.current().kind(), before);
    }

    #[test]
    fn given_resize_event_when_routed_then_window_size_is_recorded() {
        let mut app = app();
        let _task = app.update(AppEvent::Window(window::Event::Resized(
            Size::new(900.0, 700.0),
        )));

        assert_eq!(app.state.window_size, Size::new(900.0, 700.0));
    }
}
