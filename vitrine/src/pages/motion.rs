use iced::widget::{column, container, row, text};
use iced::{Element, Length, alignment};

use super::{PageFrame, block, grid, page, reference_table};
use crate::components::primitive::curve_plot::{self, CurvePlotProps};
use crate::shared::ui::style;
use crate::shared::ui::tokens::{
    DurationToken, EasingToken, MOTION_PRINCIPLES, ink,
};

const PLOT_WIDTH: f32 = 160.0;
const PLOT_HEIGHT: f32 = 120.0;
const CURVE_MIN_CELL: f32 = 220.0;

/// Props for the motion page.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MotionProps<'a> {
    pub(crate) frame: PageFrame<'a>,
}

/// Render easing curves, durations and motion principles.
pub(crate) fn view<'a, Message: 'a>(
    props: MotionProps<'a>,
) -> Element<'a, Message> {
    let frame = props.frame;

    let curves: Vec<Element<'a, Message>> = EasingToken::ALL
        .iter()
        .map(|&token| easing_card(frame, token))
        .collect();

    let durations = column(
        DurationToken::ALL
            .iter()
            .map(|&token| duration_row(frame, token)),
    )
    .spacing(8.0);

    page(
        frame,
        "Motion",
        "Three easing curves, three durations, six principles. Motion \
         should feel inevitable, not decorative.",
        vec![
            block(
                frame,
                "Easing",
                "Curves",
                grid(curves, frame.columns(CURVE_MIN_CELL, 3), 12.0),
            ),
            block(frame, "Timing", "Duration Scale", durations.into()),
            block(
                frame,
                "Rules",
                "Motion Principles",
                reference_table(frame, &MOTION_PRINCIPLES),
            ),
        ],
    )
}

fn easing_card<'a, Message: 'a>(
    frame: PageFrame<'a>,
    token: EasingToken,
) -> Element<'a, Message> {
    let palette = *frame.theme.palette();
    let curve = token.curve();

    let plot = curve_plot::view(CurvePlotProps {
        curve,
        stroke: palette.text_primary,
        guide: palette.ink_alpha(ink::BORDER_STRONG),
        width: PLOT_WIDTH,
        height: PLOT_HEIGHT,
    });

    container(
        column![
            container(plot)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
            row![
                text(token.name())
                    .size(14.0)
                    .font(frame.fonts.body_strong())
                    .color(palette.text_primary)
                    .width(Length::Fill),
                text(token.variable())
                    .size(11.0)
                    .font(frame.fonts.code.font_type)
                    .color(palette.ink_alpha(ink::SUBTLE)),
            ]
            .align_y(alignment::Vertical::Center),
            text(curve.css())
                .size(11.0)
                .font(frame.fonts.code.font_type)
                .color(palette.ink_alpha(ink::STRONG)),
            text(token.usage())
                .size(12.0)
                .color(palette.ink_alpha(0.35)),
        ]
        .spacing(8.0),
    )
    .width(Length::Fill)
    .padding(20.0)
    .style(style::card_style(palette, false))
    .into()
}

fn duration_row<'a, Message: 'a>(
    frame: PageFrame<'a>,
    token: DurationToken,
) -> Element<'a, Message> {
    let palette = *frame.theme.palette();
    let millis = token.duration().as_millis();

    container(
        row![
            text(token.name())
                .size(13.0)
                .font(frame.fonts.body_strong())
                .color(palette.text_primary)
                .width(Length::Fixed(72.0)),
            text(token.variable())
                .size(11.0)
                .font(frame.fonts.code.font_type)
                .color(palette.ink_alpha(ink::SUBTLE))
                .width(Length::Fixed(144.0)),
            text(token.usage())
                .size(12.0)
                .color(palette.ink_alpha(0.35))
                .width(Length::Fill),
            text(format!("{millis}ms"))
                .size(12.0)
                .font(frame.fonts.code.font_type)
                .color(palette.ink_alpha(ink::STRONG)),
        ]
        .spacing(16.0)
        .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fill)
    .padding([12.0, 20.0])
    .style(style::card_style(palette, false))
    .into()
}
