use iced::widget::{Space, Stack, container, row, scrollable};
use iced::{Element, Length, Padding, Theme, alignment};

use super::{App, AppEvent};
use crate::components::primitive::section;
use crate::layout::{NavAnchor, ShellLayout};
use crate::navigation::Route;
use crate::pages::{
    self, PageFrame, colors, layout as layout_page, motion as motion_page,
    overview, typography,
};
use crate::routers;
use crate::shared::ui::style;
use crate::shared::ui::theme::ThemeProps;
use crate::shared::ui::tokens::panel;
use crate::widgets::gallery::GalleryEvent;
use crate::widgets::gallery::view::{component_grid, dialog};
use crate::widgets::shell::ShellEvent;
use crate::widgets::shell::view::drawer;
use crate::widgets::sidebar::SidebarEvent;
use crate::widgets::sidebar::view::{desktop_panel, mobile_sheet};
use crate::widgets::top_nav::TopNavEvent;
use crate::widgets::top_nav::view::floating_nav;

const PAGE_TOP_PADDING: f32 = 80.0;
const PAGE_BOTTOM_PADDING: f32 = 128.0;
const PAGE_SIDE_PADDING: f32 = 24.0;
const GALLERY_MIN_CELL: f32 = 320.0;
const GALLERY_MAX_COLUMNS: usize = 2;

/// Render the root application view.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme_props = ThemeProps::new(app.theme_manager.current());
    let layout = routers::window::current_layout(app);
    let shell_vm = app.widgets.shell.vm();
    let mode = app.widgets.viewport.mode();
    let window_width = app.state.window_size.width;

    // Animated geometry overrides the settled widths.
    let sidebar_width = app.motion.sidebar_width();
    let content_offset = if layout.desktop_sidebar_visible {
        sidebar_width
    } else {
        0.0
    };

    let mut layers: Vec<Element<'_, AppEvent, Theme, iced::Renderer>> =
        vec![view_content(app, theme_props, content_offset)];

    if layout.desktop_sidebar_visible {
        layers.push(
            desktop_panel::view(desktop_panel::DesktopPanelProps {
                shell: shell_vm,
                sidebar: app.widgets.sidebar.vm(),
                current_route: app.navigator.current(),
                width: sidebar_width,
                theme: theme_props,
                fonts: &app.fonts,
            })
            .map(|intent| AppEvent::Sidebar(SidebarEvent::Intent(intent))),
        );
    }

    layers.push(view_floating_nav(
        app,
        theme_props,
        &layout,
        NavAnchor::resolve(sidebar_width, mode, window_width),
    ));

    if layout.mobile_sheet_visible {
        layers.push(
            mobile_sheet::view(mobile_sheet::MobileSheetProps {
                current_route: app.navigator.current(),
                theme: theme_props,
                fonts: &app.fonts,
            })
            .map(|intent| AppEvent::Sidebar(SidebarEvent::Intent(intent))),
        );
    }

    // Keep the drawer mounted while its exit transition runs.
    let reveal = app.motion.drawer_reveal();
    if shell_vm.drawer_open || reveal > 0.0 {
        layers.push(
            drawer::view(drawer::DrawerProps {
                reveal,
                theme: theme_props,
                fonts: &app.fonts,
            })
            .map(|intent| AppEvent::Shell(ShellEvent::Intent(intent))),
        );
    }

    if app.navigator.current() == Route::Components
        && let Some(kind) = app.widgets.gallery.vm().dialog
    {
        layers.push(
            dialog::view(dialog::DialogProps {
                kind,
                theme: theme_props,
                fonts: &app.fonts,
            })
            .map(|intent| AppEvent::Gallery(GalleryEvent::Intent(intent))),
        );
    }

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Render the current page right of the sidebar offset.
fn view_content<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
    content_offset: f32,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let palette = *theme_props.palette();
    let content_width = app.state.content_width(
        content_offset + PAGE_SIDE_PADDING * 2.0,
        panel::CONTENT_MAX_WIDTH,
    );
    let frame = PageFrame {
        fluid: section::fluid_factor(content_width),
        content_width,
        theme: theme_props,
        fonts: &app.fonts,
    };

    let body: Element<'a, AppEvent, Theme, iced::Renderer> =
        match app.navigator.current() {
            // The hero centers itself in the full area and never scrolls.
            Route::Overview => return view_hero(app, frame, content_offset),
            Route::Components => component_grid::view(
                component_grid::ComponentGridProps {
                    vm: app.widgets.gallery.vm(),
                    columns: pages::columns_for(
                        content_width,
                        GALLERY_MIN_CELL,
                        GALLERY_MAX_COLUMNS,
                    ),
                    fluid: frame.fluid,
                    theme: theme_props,
                    fonts: &app.fonts,
                },
            )
            .map(|intent| AppEvent::Gallery(GalleryEvent::Intent(intent))),
            Route::Colors => colors::view(colors::ColorsProps { frame }),
            Route::Typography => {
                typography::view(typography::TypographyProps { frame })
            },
            Route::Layout => {
                layout_page::view(layout_page::LayoutProps { frame })
            },
            Route::Motion => {
                motion_page::view(motion_page::MotionProps { frame })
            },
        };

    let page = container(
        container(body)
            .max_width(panel::CONTENT_MAX_WIDTH)
            .width(Length::Fill),
    )
    .width(Length::Fill)
    .padding(Padding {
        top: PAGE_TOP_PADDING,
        right: PAGE_SIDE_PADDING,
        bottom: PAGE_BOTTOM_PADDING,
        left: PAGE_SIDE_PADDING,
    })
    .align_x(alignment::Horizontal::Center);

    row![
        Space::new().width(Length::Fixed(content_offset)),
        scrollable(page)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(style::thin_scroll_style(palette)),
    ]
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn view_hero<'a>(
    app: &'a App,
    frame: PageFrame<'a>,
    content_offset: f32,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let hero = overview::view(overview::OverviewProps {
        fluid: frame.fluid,
        theme: frame.theme,
        fonts: &app.fonts,
    })
    .map(AppEvent::Overview);

    row![
        Space::new().width(Length::Fixed(content_offset)),
        container(hero)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding([0.0, PAGE_SIDE_PADDING]),
    ]
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn view_floating_nav<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
    layout: &ShellLayout,
    anchor: NavAnchor,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let shell_vm = app.widgets.shell.vm();

    floating_nav::view(floating_nav::FloatingNavProps {
        vm: app.widgets.top_nav.vm(),
        anchor,
        is_desktop: layout.desktop_sidebar_visible,
        mobile_sidebar_open: layout.mobile_sheet_visible,
        drawer_open: shell_vm.drawer_open,
        is_dark: app.theme_manager.current().kind().is_dark(),
        theme: theme_props,
        fonts: &app.fonts,
    })
    .map(|intent| AppEvent::TopNav(TopNavEvent::Intent(intent)))
}
