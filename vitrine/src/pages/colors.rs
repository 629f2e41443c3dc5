use iced::widget::{Space, column, container, text};
use iced::{Element, Length};

use super::{PageFrame, block, grid, page};
use crate::components::primitive::token_row::{self, TokenRowProps};
use crate::shared::ui::style;
use crate::shared::ui::theme::parse_hex_color;
use crate::shared::ui::tokens::{
    GLASS_TOKENS, NEUTRAL_PALETTE, NeutralStep, RadiusToken, SEMANTIC_TEXT,
    SHADOW_TOKENS, StatusTone, TokenRow, ink,
};

const SWATCH_HEIGHT: f32 = 64.0;
const SWATCH_MIN_WIDTH: f32 = 132.0;
const STATUS_MIN_WIDTH: f32 = 120.0;

/// Props for the colors page.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ColorsProps<'a> {
    pub(crate) frame: PageFrame<'a>,
}

/// Render palette, surfaces, elevation and status colors.
pub(crate) fn view<'a, Message: 'a>(
    props: ColorsProps<'a>,
) -> Element<'a, Message> {
    let frame = props.frame;

    let neutrals: Vec<Element<'a, Message>> = NEUTRAL_PALETTE
        .iter()
        .map(|step| {
            swatch(frame, step.hex, neutral_title(step), step.usage)
        })
        .collect();

    let statuses: Vec<Element<'a, Message>> = StatusTone::ALL
        .iter()
        .map(|tone| {
            let hex = tone.hex().unwrap_or("ink / 0.5");
            swatch(frame, hex, tone.label().to_string(), hex)
        })
        .collect();

    page(
        frame,
        "Colors",
        "Warm-shifted neutrals, semantic tokens, and glass morphism \
         surfaces. Every color earns its place.",
        vec![
            block(
                frame,
                "Foundation",
                "Neutral Palette",
                grid(neutrals, frame.columns(SWATCH_MIN_WIDTH, 5), 12.0),
            ),
            block(
                frame,
                "Text",
                "Semantic Text",
                token_table(frame, &SEMANTIC_TEXT),
            ),
            block(
                frame,
                "Surfaces",
                "Glass Morphism",
                token_table(frame, &GLASS_TOKENS),
            ),
            block(
                frame,
                "Elevation",
                "Shadows",
                token_table(frame, &SHADOW_TOKENS),
            ),
            block(
                frame,
                "Semantic",
                "Status Colors",
                grid(statuses, frame.columns(STATUS_MIN_WIDTH, 5), 12.0),
            ),
        ],
    )
}

fn neutral_title(step: &NeutralStep) -> String {
    format!("{} \u{b7} {}", step.variable, step.hex)
}

fn swatch<'a, Message: 'a>(
    frame: PageFrame<'a>,
    hex: &'a str,
    title: String,
    caption: &'a str,
) -> Element<'a, Message> {
    let palette = *frame.theme.palette();
    // Non-hex tones render in the theme ink.
    let color =
        parse_hex_color(hex).unwrap_or_else(|| palette.ink_alpha(ink::SUBTLE));

    column![
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fixed(SWATCH_HEIGHT))
            .style(style::swatch_style(
                color,
                palette.ink_alpha(ink::BORDER_STRONG),
                RadiusToken::Md.px(),
            )),
        text(title)
            .size(12.0)
            .font(frame.fonts.code.font_type)
            .color(palette.ink_alpha(ink::STRONG)),
        text(caption)
            .size(11.0)
            .color(palette.ink_alpha(0.35)),
    ]
    .spacing(6.0)
    .width(Length::Fill)
    .into()
}

fn token_table<'a, Message: 'a>(
    frame: PageFrame<'a>,
    rows: &'a [TokenRow],
) -> Element<'a, Message> {
    token_row::table(
        rows.iter()
            .map(|row| {
                token_row::view(TokenRowProps {
                    name: row.variable,
                    value: row.value,
                    note: row.description,
                    theme: frame.theme,
                    fonts: frame.fonts,
                })
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::neutral_title;
    use crate::shared::ui::tokens::NEUTRAL_PALETTE;

    #[test]
    fn given_neutral_step_when_titled_then_variable_and_hex_are_shown() {
        let step = &NEUTRAL_PALETTE[0];
        let title = neutral_title(step);

        assert!(title.starts_with("--neutral-1"));
        assert!(title.ends_with(step.hex));
    }
}
