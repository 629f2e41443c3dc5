use iced::widget::{
    Space, Stack, button, column, container, opaque, row, text,
};
use iced::{Element, Length, alignment};

use super::super::event::GalleryIntent;
use super::super::model::DialogKind;
use crate::components::primitive::backdrop::{self, BackdropProps};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::style;
use crate::shared::ui::theme::ThemeProps;
use crate::shared::ui::tokens::{RadiusToken, ink};

const DIALOG_WIDTH: f32 = 420.0;
const DIALOG_PADDING: f32 = 24.0;

/// Props for the modal gallery dialog.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DialogProps<'a> {
    pub(crate) kind: DialogKind,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render a centered dialog over a dismissing backdrop.
pub(crate) fn view<'a>(props: DialogProps<'a>) -> Element<'a, GalleryIntent> {
    let palette = *props.theme.palette();

    let mut body = column![
        text(props.kind.title())
            .size(20.0)
            .font(props.fonts.display.font_type)
            .color(palette.text_primary),
        text(props.kind.description())
            .size(13.0)
            .color(palette.ink_alpha(ink::SUBTLE)),
    ]
    .spacing(8.0);

    if props.kind.has_actions() {
        let actions = row![
            Space::new().width(Length::Fill),
            button(text("Cancel").size(13.0))
                .on_press(GalleryIntent::DialogDismissed)
                .padding([6.0, 12.0])
                .style(style::ghost_button_style(palette, false)),
            button(text("Confirm").size(13.0).font(props.fonts.body_strong()))
                .on_press(GalleryIntent::DialogDismissed)
                .padding([6.0, 12.0])
                .style(style::primary_button_style(palette)),
        ]
        .spacing(8.0);
        body = body.push(Space::new().height(8.0)).push(actions);
    }

    let card = container(body)
        .width(Length::Fixed(DIALOG_WIDTH))
        .padding(DIALOG_PADDING)
        .style(style::glass_panel_style(palette, RadiusToken::Xl));

    let dismiss = backdrop::view(BackdropProps {
        color: palette.overlay(),
    })
    .map(|_| GalleryIntent::DialogDismissed);

    let centered = container(opaque(card))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    Stack::with_children(vec![dismiss, centered.into()])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
