use iced::font::Style as FontStyle;
use iced::widget::{button, column, container, row, text};
use iced::{Element, Font, Length, alignment};

use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::style;
use crate::shared::ui::theme::ThemeProps;
use crate::shared::ui::tokens::{HEADING_SCALE, ink};

const EYEBROW: &str = "UI System / Reference";
const HEADLINE: &str = "Every pixel is a ";
const HEADLINE_EMPHASIS: &str = "decision";
const SUBTEXT: &str = "A system of restraint, motion, and glass. Every element \
                       earns its place through purpose, not decoration.";
const SUBTEXT_WIDTH: f32 = 440.0;
const CTA_TEXT_SIZE: f32 = 13.0;
const CTA_PADDING: [f32; 2] = [11.0, 20.0];

/// Events emitted by the overview hero.
#[derive(Debug, Clone)]
pub(crate) enum OverviewEvent {
    ExploreComponents,
    OpenDrawer,
}

/// Props for the landing hero.
#[derive(Debug, Clone, Copy)]
pub(crate) struct OverviewProps<'a> {
    pub(crate) fluid: f32,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the centered hero with its two calls to action.
pub(crate) fn view<'a>(props: OverviewProps<'a>) -> Element<'a, OverviewEvent> {
    let palette = *props.theme.palette();
    let hero = HEADING_SCALE[0];
    let size = hero.min + (hero.max - hero.min) * props.fluid.clamp(0.0, 1.0);
    let display = Font {
        weight: iced::font::Weight::Bold,
        ..props.fonts.display.font_type
    };

    let headline = row![
        text(HEADLINE)
            .size(size)
            .font(display)
            .color(palette.text_primary),
        text(HEADLINE_EMPHASIS)
            .size(size)
            .font(Font {
                style: FontStyle::Italic,
                ..display
            })
            .color(palette.text_secondary),
    ]
    .wrap();

    let explore = button(
        text("Explore Components")
            .size(CTA_TEXT_SIZE)
            .font(props.fonts.body_strong()),
    )
    .on_press(OverviewEvent::ExploreComponents)
    .padding(CTA_PADDING)
    .style(style::primary_button_style(palette));

    let drawer = button(
        text("Open Drawer \u{2192}")
            .size(CTA_TEXT_SIZE)
            .font(props.fonts.body_strong()),
    )
    .on_press(OverviewEvent::OpenDrawer)
    .padding(CTA_PADDING)
    .style(style::ghost_button_style(palette, false));

    let content = column![
        text(EYEBROW.to_uppercase())
            .size(11.0)
            .font(props.fonts.code.font_type)
            .color(palette.ink_alpha(ink::MUTED)),
        headline,
        container(
            text(SUBTEXT)
                .size(props.fonts.body.size + 1.0)
                .color(palette.text_tertiary)
                .align_x(alignment::Horizontal::Center),
        )
        .max_width(SUBTEXT_WIDTH),
        row![explore, drawer].spacing(12.0),
    ]
    .spacing(24.0)
    .align_x(alignment::Horizontal::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
