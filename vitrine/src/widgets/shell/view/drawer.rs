use iced::widget::{
    Space, column, container, opaque, row, scrollable, text,
};
use iced::{Element, Length, alignment};

use super::super::event::ShellIntent;
use crate::components::primitive::backdrop::{self, BackdropProps};
use crate::components::primitive::curve_plot::{self, CurvePlotProps};
use crate::components::primitive::icon_button::{
    self, IconButtonProps, IconButtonVariant,
};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::icons;
use crate::shared::ui::style;
use crate::shared::ui::theme::{ThemeProps, parse_hex_color, with_alpha};
use crate::shared::ui::tokens::{
    EasingToken, INSPECTOR_TOKENS, NEUTRAL_PALETTE, RadiusToken, ink, panel,
};

const HEADER_HEIGHT: f32 = 44.0;
const CLOSE_BUTTON_SIZE: f32 = 32.0;
const CLOSE_ICON_SIZE: f32 = 16.0;
const DRAWER_PADDING: f32 = 20.0;
const SECTION_SPACING: f32 = 28.0;
const SWATCH_SIZE: f32 = 26.0;
const PREVIEW_HEIGHT: f32 = 140.0;

/// Props for the inspector drawer.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DrawerProps<'a> {
    /// Slide progress, `0.0` hidden to `1.0` fully shown.
    pub(crate) reveal: f32,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the right-hand inspector with its dismissing backdrop.
pub(crate) fn view<'a>(props: DrawerProps<'a>) -> Element<'a, ShellIntent> {
    let palette = *props.theme.palette();
    let reveal = props.reveal.clamp(0.0, 1.0);
    let inner_width = panel::DRAWER_WIDTH - panel::PANEL_INSET * 2.0;

    let close = icon_button::view(IconButtonProps {
        icon: icons::CLOSE,
        theme: props.theme,
        size: CLOSE_BUTTON_SIZE,
        icon_size: CLOSE_ICON_SIZE,
        variant: IconButtonVariant::Standard,
    })
    .map(|_| ShellIntent::CloseDrawer);

    let header = row![
        text("Inspector")
            .size(18.0)
            .font(props.fonts.display.font_type)
            .color(palette.text_primary),
        Space::new().width(Length::Fill),
        close,
    ]
    .height(Length::Fixed(HEADER_HEIGHT))
    .align_y(alignment::Vertical::Center);

    let token_rows: Vec<Element<'a, ShellIntent>> = INSPECTOR_TOKENS
        .iter()
        .map(|token| {
            row![
                text(token.label)
                    .size(12.0)
                    .font(props.fonts.code.font_type)
                    .color(palette.text_secondary),
                Space::new().width(Length::Fill),
                text(token.value)
                    .size(12.0)
                    .font(props.fonts.code.font_type)
                    .color(palette.text_primary),
            ]
            .into()
        })
        .collect();

    let swatches: Vec<Element<'a, ShellIntent>> = NEUTRAL_PALETTE
        .iter()
        .map(|step| {
            let color =
                parse_hex_color(step.hex).unwrap_or(palette.background);
            container(Space::new())
                .width(Length::Fixed(SWATCH_SIZE))
                .height(Length::Fixed(SWATCH_SIZE))
                .style(style::swatch_style(
                    color,
                    palette.ink_alpha(ink::BORDER_STRONG),
                    RadiusToken::Xs.px(),
                ))
                .into()
        })
        .collect();

    let spring = EasingToken::Spring.curve();
    let preview = container(curve_plot::view(CurvePlotProps {
        curve: spring,
        stroke: palette.text_primary,
        guide: palette.ink_alpha(ink::FAINT),
        width: inner_width - DRAWER_PADDING * 2.0,
        height: PREVIEW_HEIGHT,
    }))
    .style(style::card_style(palette, false));

    let body = column![
        header,
        section(
            "Design Tokens",
            column(token_rows).spacing(10.0).into(),
            props,
        ),
        section("Palette", row(swatches).spacing(6.0).into(), props),
        section(
            "Spring Easing",
            column![
                preview,
                text(spring.css())
                    .size(11.0)
                    .font(props.fonts.code.font_type)
                    .color(palette.text_tertiary),
            ]
            .spacing(8.0)
            .into(),
            props,
        ),
    ]
    .spacing(SECTION_SPACING)
    .padding(DRAWER_PADDING)
    .width(Length::Fixed(inner_width));

    let surface = container(
        scrollable(body).style(style::thin_scroll_style(palette)),
    )
    .width(Length::Fixed(inner_width))
    .height(Length::Fill)
    .style(style::glass_panel_style(palette, RadiusToken::Xl));

    let slot = container(surface)
        .width(Length::Fixed(panel::DRAWER_WIDTH * reveal))
        .height(Length::Fill)
        .padding(panel::PANEL_INSET)
        .clip(true);
    let slot = opaque(slot);

    let dismiss = backdrop::view(BackdropProps {
        color: with_alpha(palette.shadow, palette.overlay().a * reveal),
    })
    .map(|_| ShellIntent::CloseDrawer);

    row![dismiss, slot]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn section<'a>(
    title: &'a str,
    content: Element<'a, ShellIntent>,
    props: DrawerProps<'a>,
) -> Element<'a, ShellIntent> {
    let palette = props.theme.palette();
    column![
        text(title.to_uppercase())
            .size(11.0)
            .font(props.fonts.code.font_type)
            .color(palette.ink_alpha(ink::MUTED)),
        content,
    ]
    .spacing(12.0)
    .into()
}

#[cfg(test)]
mod tests {
    use iced::widget::{Space, Stack, button};
    use iced::{Element, Event, Length, Point, mouse};

    use super::{DrawerProps, view};
    use crate::shared::ui::fonts::FontsConfig;
    use crate::shared::ui::theme::{AppTheme, ThemeKind, ThemeProps};
    use crate::widgets::shell::ShellIntent;

    #[derive(Debug, Clone)]
    enum Layer {
        Page,
        Drawer(ShellIntent),
    }

    #[test]
    fn given_open_drawer_when_body_clicked_then_page_does_not_react() {
        let theme = AppTheme::new(ThemeKind::Light);
        let fonts = FontsConfig::default();
        let page = button(Space::new().width(Length::Fill).height(Length::Fill))
            .on_press(Layer::Page)
            .width(Length::Fill)
            .height(Length::Fill);
        let drawer = view(DrawerProps {
            reveal: 1.0,
            theme: ThemeProps::new(&theme),
            fonts: &fonts,
        })
        .map(Layer::Drawer);
        let stack: Element<'_, Layer> = Stack::with_children([page.into(), drawer])
            .width(Length::Fill)
            .height(Length::Fill)
            .into();

        // Default simulator window is 1024 wide; the drawer spans its right 380px.
        let position = Point::new(900.0, 700.0);
        let mut ui = iced_test::simulator(stack);
        ui.point_at(position);
        let _ = ui.simulate([
            Event::Mouse(mouse::Event::CursorMoved { position }),
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)),
        ]);
        let messages: Vec<Layer> = ui.into_messages().collect();

        assert!(
            !messages.iter().any(|message| matches!(message, Layer::Page)),
            "drawer click reached the page: {messages:?}"
        );
    }
}
