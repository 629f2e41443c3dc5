use iced::widget::{
    Space, Stack, button, column, container, mouse_area, row, text,
};
use iced::{Border, Element, Length, alignment};

use super::super::event::SidebarIntent;
use super::super::model::{SidebarViewModel, handle_opacity};
use crate::components::primitive::nav_item::{self, NavItemProps};
use crate::navigation::{NAV_ITEMS, Route};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::style;
use crate::shared::ui::theme::{ThemeProps, with_alpha};
use crate::shared::ui::tokens::{RadiusToken, ink, panel};
use crate::widgets::shell::model::ShellViewModel;

const HEADER_HEIGHT: f32 = 48.0;
const MONOGRAM: &str = "DS";
const TITLE: &str = "Design System";
const SUBTITLE: &str = "Reference";
const ITEM_SPACING: f32 = 2.0;
const PANEL_PADDING: f32 = 8.0;
const HANDLE_WIDTH: f32 = 4.0;
const HANDLE_HEIGHT: f32 = 32.0;
const HANDLE_HIT_WIDTH: f32 = 12.0;
// Below this animated width rows collapse to icons.
const COMPACT_THRESHOLD: f32 =
    (panel::SIDEBAR_WIDTH + panel::SIDEBAR_COLLAPSED_WIDTH) / 2.0;

/// Props for the floating desktop sidebar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DesktopPanelProps<'a> {
    pub(crate) shell: ShellViewModel,
    pub(crate) sidebar: SidebarViewModel,
    pub(crate) current_route: Route,
    /// Rendered width, possibly mid-transition.
    pub(crate) width: f32,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the floating sidebar panel with its collapse handle.
pub(crate) fn view<'a>(props: DesktopPanelProps<'a>) -> Element<'a, SidebarIntent> {
    let palette = *props.theme.palette();
    let compact = props.width < COMPACT_THRESHOLD;

    let header: Element<'a, SidebarIntent> = if compact {
        container(
            text(MONOGRAM)
                .size(15.0)
                .font(props.fonts.display.font_type)
                .color(palette.text_primary),
        )
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
    } else {
        container(
            column![
                text(TITLE)
                    .size(16.0)
                    .font(props.fonts.display.font_type)
                    .color(palette.text_primary),
                text(SUBTITLE.to_uppercase())
                    .size(10.0)
                    .font(props.fonts.code.font_type)
                    .color(palette.ink_alpha(ink::MUTED)),
            ]
            .spacing(2.0),
        )
        .height(Length::Fixed(HEADER_HEIGHT))
        .padding([0.0, 10.0])
        .align_y(alignment::Vertical::Center)
        .into()
    };

    let items = NAV_ITEMS.iter().map(|item| {
        nav_item::view(NavItemProps {
            item,
            is_active: props.current_route == item.route,
            compact,
            theme: props.theme,
            fonts: props.fonts,
        })
        .map(move |_| SidebarIntent::ItemPressed(item.route))
    });

    let nav = column(items).spacing(ITEM_SPACING).width(Length::Fill);

    let surface = container(
        column![header, nav, Space::new().height(Length::Fill)]
            .spacing(8.0)
            .width(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(PANEL_PADDING)
    .clip(true)
    .style(style::glass_panel_style(palette, RadiusToken::Lg));

    let opacity =
        handle_opacity(props.shell.sidebar_collapsed, props.sidebar.panel_hovered);
    let handle_color = with_alpha(palette.ink, ink::MUTED * opacity);
    let handle = button(Space::new().width(HANDLE_WIDTH).height(HANDLE_HEIGHT))
        .on_press(SidebarIntent::ToggleCollapse)
        .padding([0.0, (HANDLE_HIT_WIDTH - HANDLE_WIDTH) / 2.0])
        .style(move |_, status| {
            let color = if matches!(status, iced::widget::button::Status::Hovered)
                && opacity > 0.0
            {
                with_alpha(palette.ink, ink::SUBTLE)
            } else {
                handle_color
            };
            iced::widget::button::Style {
                background: Some(color.into()),
                border: Border {
                    radius: RadiusToken::Pill.px().into(),
                    ..Border::default()
                },
                ..iced::widget::button::Style::default()
            }
        });

    let handle_layer = container(
        row![Space::new().width(Length::Fill), handle]
            .align_y(alignment::Vertical::Center)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    let panel_stack = Stack::with_children(vec![surface.into(), handle_layer.into()])
        .width(Length::Fill)
        .height(Length::Fill);

    let framed = container(panel_stack)
        .width(Length::Fixed(props.width))
        .height(Length::Fill)
        .padding(panel::PANEL_INSET);

    mouse_area(framed)
        .on_enter(SidebarIntent::PanelHovered(true))
        .on_exit(SidebarIntent::PanelHovered(false))
        .into()
}
