use iced::widget::{Space, column, container, row, text};
use iced::{Element, Length, alignment};

use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::style;
use crate::shared::ui::theme::ThemeProps;
use crate::shared::ui::tokens::ink;

const NAME_WIDTH: f32 = 176.0;
const ROW_TEXT_SIZE: f32 = 12.0;

/// Props for one row of a token reference table.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TokenRowProps<'a> {
    pub(crate) name: &'a str,
    pub(crate) value: &'a str,
    pub(crate) note: &'a str,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render a bordered row with a code-face name, note and value.
pub(crate) fn view<'a, Message: 'a>(
    props: TokenRowProps<'a>,
) -> Element<'a, Message> {
    let palette = *props.theme.palette();

    let name = text(props.name)
        .size(ROW_TEXT_SIZE)
        .font(props.fonts.code.font_type)
        .color(palette.ink_alpha(0.6))
        .width(Length::Fixed(NAME_WIDTH));
    let note = text(props.note)
        .size(ROW_TEXT_SIZE)
        .color(palette.ink_alpha(0.35))
        .width(Length::Fill);
    let value = text(props.value)
        .size(ROW_TEXT_SIZE)
        .font(props.fonts.code.font_type)
        .color(palette.ink_alpha(ink::STRONG));

    container(
        row![name, note, value]
            .spacing(16.0)
            .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fill)
    .padding([12.0, 20.0])
    .style(style::card_style(palette, false))
    .into()
}

/// Stack rows with the reference table spacing.
pub(crate) fn table<'a, Message: 'a>(
    rows: Vec<Element<'a, Message>>,
) -> Element<'a, Message> {
    if rows.is_empty() {
        return Space::new().into();
    }
    column(rows).spacing(8.0).width(Length::Fill).into()
}
