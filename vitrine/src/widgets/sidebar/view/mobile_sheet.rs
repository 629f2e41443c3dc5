use iced::widget::{Space, column, container, opaque, row, text};
use iced::{Element, Length, alignment};

use super::super::event::SidebarIntent;
use crate::components::primitive::backdrop::{self, BackdropProps};
use crate::components::primitive::icon_button::{
    self, IconButtonProps, IconButtonVariant,
};
use crate::components::primitive::nav_item::{self, NavItemProps};
use crate::navigation::{NAV_ITEMS, Route};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::icons;
use crate::shared::ui::style;
use crate::shared::ui::theme::ThemeProps;
use crate::shared::ui::tokens::{RadiusToken, ink, panel};

const HEADER_HEIGHT: f32 = 48.0;
const CLOSE_BUTTON_SIZE: f32 = 32.0;
const CLOSE_ICON_SIZE: f32 = 16.0;
const ITEM_SPACING: f32 = 2.0;
const SHEET_PADDING: f32 = 10.0;

/// Props for the mobile navigation sheet.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MobileSheetProps<'a> {
    pub(crate) current_route: Route,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the slide-in sheet next to a dismissing backdrop.
pub(crate) fn view<'a>(props: MobileSheetProps<'a>) -> Element<'a, SidebarIntent> {
    let palette = *props.theme.palette();

    let close = icon_button::view(IconButtonProps {
        icon: icons::CLOSE,
        theme: props.theme,
        size: CLOSE_BUTTON_SIZE,
        icon_size: CLOSE_ICON_SIZE,
        variant: IconButtonVariant::Standard,
    })
    .map(|_| SidebarIntent::CloseSheet);

    let header = row![
        column![
            text("Design System")
                .size(16.0)
                .font(props.fonts.display.font_type)
                .color(palette.text_primary),
            text("REFERENCE")
                .size(10.0)
                .font(props.fonts.code.font_type)
                .color(palette.ink_alpha(ink::MUTED)),
        ]
        .spacing(2.0),
        Space::new().width(Length::Fill),
        close,
    ]
    .height(Length::Fixed(HEADER_HEIGHT))
    .padding([0.0, 10.0])
    .align_y(alignment::Vertical::Center);

    let items = NAV_ITEMS.iter().map(|item| {
        nav_item::view(NavItemProps {
            item,
            is_active: props.current_route == item.route,
            compact: false,
            theme: props.theme,
            fonts: props.fonts,
        })
        .map(move |_| SidebarIntent::ItemPressed(item.route))
    });

    let sheet = container(
        column![header, column(items).spacing(ITEM_SPACING)]
            .spacing(8.0)
            .width(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(SHEET_PADDING)
    .style(style::glass_panel_style(palette, RadiusToken::Lg));

    let sheet = container(sheet)
        .width(Length::Fixed(panel::MOBILE_SHEET_WIDTH))
        .height(Length::Fill)
        .padding(panel::PANEL_INSET);

    // The page underneath must not react to clicks on the sheet.
    let sheet = opaque(sheet);

    let dismiss = backdrop::view(BackdropProps {
        color: palette.overlay(),
    })
    .map(|_| SidebarIntent::CloseSheet);

    row![sheet, dismiss]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use iced::widget::{Space, Stack, button};
    use iced::{Element, Event, Length, Point, mouse};

    use super::{MobileSheetProps, view};
    use crate::navigation::Route;
    use crate::shared::ui::fonts::FontsConfig;
    use crate::shared::ui::theme::{AppTheme, ThemeKind, ThemeProps};
    use crate::widgets::sidebar::SidebarIntent;

    #[derive(Debug, Clone)]
    enum Layer {
        Page,
        Sheet(SidebarIntent),
    }

    fn click_at(element: Element<'_, Layer>, position: Point) -> Vec<Layer> {
        let mut ui = iced_test::simulator(element);
        ui.point_at(position);
        let _ = ui.simulate([
            Event::Mouse(mouse::Event::CursorMoved { position }),
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)),
        ]);
        ui.into_messages().collect()
    }

    fn page_with_sheet<'a>(
        theme: &'a AppTheme,
        fonts: &'a FontsConfig,
    ) -> Element<'a, Layer> {
        let page = button(Space::new().width(Length::Fill).height(Length::Fill))
            .on_press(Layer::Page)
            .width(Length::Fill)
            .height(Length::Fill);
        let sheet = view(MobileSheetProps {
            current_route: Route::Overview,
            theme: ThemeProps::new(theme),
            fonts,
        })
        .map(Layer::Sheet);

        Stack::with_children([page.into(), sheet])
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    #[test]
    fn given_open_sheet_when_empty_area_clicked_then_page_does_not_react() {
        let theme = AppTheme::new(ThemeKind::Dark);
        let fonts = FontsConfig::default();

        let messages =
            click_at(page_with_sheet(&theme, &fonts), Point::new(120.0, 600.0));

        assert!(
            !messages.iter().any(|message| matches!(message, Layer::Page)),
            "sheet click reached the page: {messages:?}"
        );
    }

    #[test]
    fn given_open_sheet_when_backdrop_clicked_then_sheet_closes() {
        let theme = AppTheme::new(ThemeKind::Dark);
        let fonts = FontsConfig::default();

        let messages =
            click_at(page_with_sheet(&theme, &fonts), Point::new(700.0, 400.0));

        assert!(messages.iter().any(|message| matches!(
            message,
            Layer::Sheet(SidebarIntent::CloseSheet)
        )));
        assert!(!messages.iter().any(|message| matches!(message, Layer::Page)));
    }
}
