use iced::widget::{Space, column, container, text};
use iced::{Element, Length, alignment};

use super::{PageFrame, block, grid, page, reference_table};
use crate::shared::ui::style;
use crate::shared::ui::tokens::{
    PANEL_DIMENSIONS, RadiusToken, SPACING_PATTERNS,
    SURFACE_PATTERNS, ink,
};

const RADIUS_BOX_SIZE: f32 = 64.0;
const RADIUS_MIN_CELL: f32 = 112.0;
// The pill radius is drawn clamped to the box.
const RADIUS_PREVIEW_CAP: f32 = RADIUS_BOX_SIZE / 2.0;

/// Props for the layout page.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LayoutProps<'a> {
    pub(crate) frame: PageFrame<'a>,
}

/// Render radii, panel dimensions, spacing and surface alpha tables.
pub(crate) fn view<'a, Message: 'a>(
    props: LayoutProps<'a>,
) -> Element<'a, Message> {
    let frame = props.frame;

    let radii: Vec<Element<'a, Message>> = RadiusToken::ALL
        .iter()
        .map(|&token| radius_box(frame, token))
        .collect();

    page(
        frame,
        "Layout",
        "4px grid, proximity equals relationship, every measurement on a \
         consistent scale.",
        vec![
            block(
                frame,
                "Radius",
                "Border Radius Scale",
                grid(radii, frame.columns(RADIUS_MIN_CELL, 6), 16.0),
            ),
            block(
                frame,
                "Dimensions",
                "Panel Sizes",
                reference_table(frame, &PANEL_DIMENSIONS),
            ),
            block(
                frame,
                "Spacing",
                "Common Patterns",
                reference_table(frame, &SPACING_PATTERNS),
            ),
            block(
                frame,
                "Surfaces",
                "Border & Surface Alpha",
                reference_table(frame, &SURFACE_PATTERNS),
            ),
        ],
    )
}

fn radius_caption(token: RadiusToken) -> String {
    if token == RadiusToken::Pill {
        format!("{} \u{b7} 9999px", token.name())
    } else {
        format!("{} \u{b7} {}px", token.name(), token.px())
    }
}

fn radius_box<'a, Message: 'a>(
    frame: PageFrame<'a>,
    token: RadiusToken,
) -> Element<'a, Message> {
    let palette = *frame.theme.palette();

    column![
        container(Space::new())
            .width(Length::Fixed(RADIUS_BOX_SIZE))
            .height(Length::Fixed(RADIUS_BOX_SIZE))
            .style(style::swatch_style(
                palette.ink_alpha(ink::HOVER),
                palette.ink_alpha(ink::FAINT),
                token.px().min(RADIUS_PREVIEW_CAP),
            )),
        text(token.variable())
            .size(11.0)
            .font(frame.fonts.code.font_type)
            .color(palette.ink_alpha(ink::STRONG)),
        text(radius_caption(token))
            .size(11.0)
            .font(frame.fonts.code.font_type)
            .color(palette.ink_alpha(ink::SUBTLE)),
        text(token.usage())
            .size(11.0)
            .color(palette.ink_alpha(0.35))
            .align_x(alignment::Horizontal::Center),
    ]
    .spacing(6.0)
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .into()
}

#[cfg(test)]
mod tests {
    use super::radius_caption;
    use crate::shared::ui::tokens::RadiusToken;

    #[test]
    fn given_radius_tokens_when_captioned_then_name_and_value_are_shown() {
        assert_eq!(radius_caption(RadiusToken::Md), "md \u{b7} 10px");
        assert_eq!(radius_caption(RadiusToken::Pill), "pill \u{b7} 9999px");
    }
}
