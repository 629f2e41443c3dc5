use iced::widget::{column, container, row, text};
use iced::{Element, Font, Length, alignment};

use super::{PageFrame, block, page, reference_table};
use crate::shared::ui::style;
use crate::shared::ui::tokens::{
    FONT_FAMILIES, FontFamilyToken, HEADING_SCALE, HeadingToken, TEXT_STYLES,
    TYPOGRAPHY_RULES, TextStyleToken, ink,
};

const SPECIMEN_SIZE: f32 = 20.0;
const META_SIZE: f32 = 11.0;
const SCALE_LABEL_WIDTH: f32 = 96.0;

/// Props for the typography page.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TypographyProps<'a> {
    pub(crate) frame: PageFrame<'a>,
}

pub(crate) fn view<'a, Message: 'a>(
    props: TypographyProps<'a>,
) -> Element<'a, Message> {
    let frame = props.frame;

    let families = column(
        FONT_FAMILIES
            .iter()
            .map(|family| family_card(frame, family)),
    )
    .spacing(12.0);

    let scale = column(
        HEADING_SCALE
            .iter()
            .map(|heading| heading_row(frame, heading)),
    )
    .spacing(20.0);

    let styles = column(
        TEXT_STYLES
            .iter()
            .map(|style_token| text_style_row(frame, style_token)),
    )
    .spacing(12.0);

    let rules = reference_table(frame, &TYPOGRAPHY_RULES);

    page(
        frame,
        "Typography",
        "Three fonts. Display for presence, sans for clarity, mono for \
         precision.",
        vec![
            block(frame, "Families", "Font Stack", families.into()),
            block(frame, "Scale", "Heading Sizes", scale.into()),
            block(frame, "Styles", "Text Styles", styles.into()),
            block(frame, "Rules", "Usage Guidelines", rules),
        ],
    )
}

fn family_card<'a, Message: 'a>(
    frame: PageFrame<'a>,
    family: &'a FontFamilyToken,
) -> Element<'a, Message> {
    let palette = *frame.theme.palette();

    let header = row![
        text(family.name)
            .size(14.0)
            .font(frame.fonts.body_strong())
            .color(palette.text_primary)
            .width(Length::Fill),
        text(family.variable)
            .size(META_SIZE)
            .font(frame.fonts.code.font_type)
            .color(palette.ink_alpha(ink::SUBTLE)),
    ]
    .align_y(alignment::Vertical::Center);

    container(
        column![
            header,
            text(family.specimen)
                .size(SPECIMEN_SIZE)
                .font(frame.fonts.face(family.role))
                .color(palette.text_secondary),
            text(format!("{} \u{b7} fallback: {}", family.usage, family.fallback))
                .size(META_SIZE)
                .color(palette.ink_alpha(0.35)),
        ]
        .spacing(10.0),
    )
    .width(Length::Fill)
    .padding(20.0)
    .style(style::card_style(palette, false))
    .into()
}

fn heading_row<'a, Message: 'a>(
    frame: PageFrame<'a>,
    heading: &'a HeadingToken,
) -> Element<'a, Message> {
    let palette = *frame.theme.palette();
    let size = heading.min + (heading.max - heading.min) * frame.fluid;
    let face = frame.fonts.face(heading.role);
    let font = if heading.bold {
        Font {
            weight: iced::font::Weight::Bold,
            ..face
        }
    } else {
        face
    };
    let bounds = if (heading.max - heading.min).abs() < f32::EPSILON {
        format!("{}px", heading.max)
    } else {
        format!("{}px \u{2192} {}px", heading.min, heading.max)
    };

    column![
        row![
            text(heading.label.to_uppercase())
                .size(META_SIZE)
                .font(frame.fonts.code.font_type)
                .color(palette.ink_alpha(ink::MUTED))
                .width(Length::Fixed(SCALE_LABEL_WIDTH)),
            text(format!("{bounds} \u{b7} tracking {}", heading.tracking))
                .size(META_SIZE)
                .font(frame.fonts.code.font_type)
                .color(palette.ink_alpha(0.35)),
        ],
        text(heading.label)
            .size(size)
            .font(font)
            .color(palette.text_primary),
    ]
    .spacing(6.0)
    .into()
}

fn text_style_row<'a, Message: 'a>(
    frame: PageFrame<'a>,
    token: &'a TextStyleToken,
) -> Element<'a, Message> {
    let palette = *frame.theme.palette();

    container(
        row![
            text(token.label)
                .size(token.size)
                .line_height(token.line_height)
                .font(frame.fonts.face(token.role))
                .color(palette.ink_alpha(token.alpha))
                .width(Length::Fill),
            text(format!(
                "{}px / {} / ink {}",
                token.size, token.line_height, token.alpha
            ))
            .size(META_SIZE)
            .font(frame.fonts.code.font_type)
            .color(palette.ink_alpha(ink::SUBTLE)),
        ]
        .spacing(16.0)
        .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fill)
    .padding([14.0, 20.0])
    .style(style::card_style(palette, false))
    .into()
}
