use iced::widget::{Space, button, column, container, row, text};
use iced::{Element, Length, alignment};

use super::super::event::TopNavIntent;
use super::super::model::{NavSection, TopNavViewModel};
use crate::components::primitive::icon_button::{
    self, IconButtonProps, IconButtonVariant,
};
use crate::layout::NavAnchor;
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::icons;
use crate::shared::ui::style;
use crate::shared::ui::theme::{StyleOverrides, ThemeProps};
use crate::shared::ui::tokens::{RadiusToken, ink, panel};

const NAV_HEIGHT: f32 = 44.0;
const NAV_PADDING: f32 = 5.0;
const NAV_SPACING: f32 = 2.0;
const SECTION_LABEL_SIZE: f32 = 13.0;
const SECTION_PADDING: [f32; 2] = [6.0, 14.0];
const ACTION_BUTTON_SIZE: f32 = 32.0;
const ACTION_ICON_SIZE: f32 = 16.0;
const DIVIDER_HEIGHT: f32 = 18.0;

/// Props for the floating pill nav.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FloatingNavProps<'a> {
    pub(crate) vm: TopNavViewModel,
    pub(crate) anchor: NavAnchor,
    pub(crate) is_desktop: bool,
    pub(crate) mobile_sidebar_open: bool,
    pub(crate) drawer_open: bool,
    pub(crate) is_dark: bool,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the pill nav centered on its anchor region.
pub(crate) fn view<'a>(
    props: FloatingNavProps<'a>,
) -> Element<'a, TopNavIntent> {
    let palette = *props.theme.palette();
    let mut pill = row![]
        .spacing(NAV_SPACING)
        .align_y(alignment::Vertical::Center);

    if !props.is_desktop {
        pill = pill.push(menu_button(props));
    }

    if props.is_desktop {
        for section in NavSection::ALL {
            pill = pill.push(section_button(
                section,
                section == props.vm.active_section,
                props,
            ));
        }
    } else {
        pill = pill.push(section_button(
            props.vm.active_section,
            true,
            props,
        ));
    }

    let divider = container(Space::new().width(1.0).height(DIVIDER_HEIGHT))
        .padding([0.0, 4.0])
        .style(move |_| iced::widget::container::Style {
            background: Some(palette.ink_alpha(ink::BORDER_STRONG).into()),
            ..Default::default()
        });

    let inspector_variant = if props.drawer_open {
        IconButtonVariant::Active
    } else {
        IconButtonVariant::Standard
    };
    let theme_icon = if props.is_dark {
        icons::THEME_LIGHT
    } else {
        icons::THEME_DARK
    };

    pill = pill
        .push(divider)
        .push(
            action_button(icons::INSPECTOR, inspector_variant, props.theme)
                .map(|_| TopNavIntent::InspectorPressed),
        )
        .push(
            action_button(theme_icon, IconButtonVariant::Standard, props.theme)
                .map(|_| TopNavIntent::ThemeTogglePressed),
        );

    let surface = container(pill)
        .height(Length::Fixed(NAV_HEIGHT))
        .padding(NAV_PADDING)
        .align_y(alignment::Vertical::Center)
        .style(style::glass_panel_style(palette, RadiusToken::Xl));

    let region = container(surface)
        .width(Length::Fixed(props.anchor.region_width))
        .align_x(alignment::Horizontal::Center);

    column![
        Space::new().height(panel::NAV_TOP_OFFSET),
        row![Space::new().width(props.anchor.region_start), region],
    ]
    .into()
}

fn section_button<'a>(
    section: NavSection,
    is_active: bool,
    props: FloatingNavProps<'a>,
) -> Element<'a, TopNavIntent> {
    let palette = *props.theme.palette();
    let font = if is_active {
        props.fonts.body_strong()
    } else {
        props.fonts.body.font_type
    };

    button(text(section.label()).size(SECTION_LABEL_SIZE).font(font))
        .on_press(TopNavIntent::SectionPressed(section))
        .padding(SECTION_PADDING)
        .style(move |theme, status| {
            let mut style =
                style::ghost_button_style(palette, is_active)(theme, status);
            style.border.radius = RadiusToken::Md.px().into();
            if is_active {
                style.shadow = style::active_shadow(&palette);
            }
            style
        })
        .into()
}

fn menu_button<'a>(props: FloatingNavProps<'a>) -> Element<'a, TopNavIntent> {
    let palette = props.theme.palette();
    let theme = if props.mobile_sidebar_open {
        props.theme.with_overrides(StyleOverrides {
            background: Some(palette.ink_alpha(ink::SELECTED)),
            foreground: Some(palette.text_primary),
            border_radius: Some(RadiusToken::Md.px()),
        })
    } else {
        props.theme
    };

    action_button(icons::MENU, IconButtonVariant::Standard, theme)
        .map(|_| TopNavIntent::MenuPressed)
}

fn action_button<'a>(
    icon: &'static [u8],
    variant: IconButtonVariant,
    theme: ThemeProps<'a>,
) -> Element<'a, icon_button::IconButtonEvent> {
    icon_button::view(IconButtonProps {
        icon,
        theme,
        size: ACTION_BUTTON_SIZE,
        icon_size: ACTION_ICON_SIZE,
        variant,
    })
}
