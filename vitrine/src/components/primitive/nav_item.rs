use iced::widget::{button, container, row, svg, text, tooltip};
use iced::{Element, Length, alignment};

use crate::navigation::NavItem;
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::style;
use crate::shared::ui::theme::ThemeProps;

const ITEM_HEIGHT: f32 = 36.0;
const ITEM_ICON_SIZE: f32 = 18.0;
const ITEM_LABEL_SIZE: f32 = 14.0;
const ITEM_GAP: f32 = 12.0;
const ITEM_PADDING_X: f32 = 10.0;
const TOOLTIP_GAP: f32 = 8.0;

/// UI events emitted by a navigation row.
#[derive(Debug, Clone)]
pub(crate) enum NavItemEvent {
    Pressed,
}

/// Props for rendering one navigation destination.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NavItemProps<'a> {
    pub(crate) item: &'a NavItem,
    pub(crate) is_active: bool,
    /// Render the icon only and show the label as a tooltip.
    pub(crate) compact: bool,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render a sidebar row with icon and label.
pub(crate) fn view<'a>(props: NavItemProps<'a>) -> Element<'a, NavItemEvent> {
    let palette = *props.theme.palette();
    let is_active = props.is_active;
    let icon_color = if is_active {
        palette.text_primary
    } else {
        palette.text_secondary
    };

    let icon = svg::Svg::new(svg::Handle::from_memory(props.item.icon))
        .width(Length::Fixed(ITEM_ICON_SIZE))
        .height(Length::Fixed(ITEM_ICON_SIZE))
        .style(move |_, status| {
            let color = if matches!(status, svg::Status::Hovered) {
                palette.text_primary
            } else {
                icon_color
            };
            svg::Style { color: Some(color) }
        });

    let content: Element<'a, NavItemEvent> = if props.compact {
        container(icon)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .into()
    } else {
        let font = if is_active {
            props.fonts.body_strong()
        } else {
            props.fonts.body.font_type
        };
        row![icon, text(props.item.label).size(ITEM_LABEL_SIZE).font(font)]
            .spacing(ITEM_GAP)
            .align_y(alignment::Vertical::Center)
            .into()
    };

    let item = button(
        container(content)
            .height(Length::Fill)
            .align_y(alignment::Vertical::Center),
    )
    .on_press(NavItemEvent::Pressed)
    .width(Length::Fill)
    .height(Length::Fixed(ITEM_HEIGHT))
    .padding([0.0, ITEM_PADDING_X])
    .style(style::ghost_button_style(palette, is_active));

    if !props.compact {
        return item.into();
    }

    let label = container(text(props.item.label).size(ITEM_LABEL_SIZE - 1.0))
        .padding([4.0, 8.0])
        .style(style::tooltip_style(palette));

    tooltip(item, label, tooltip::Position::Right)
        .gap(TOOLTIP_GAP)
        .into()
}
