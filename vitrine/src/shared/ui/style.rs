use iced::widget::{button, container, scrollable, text_input};
use iced::{Background, Border, Shadow, Vector};

use super::theme::{IcedColorPalette, with_alpha};
use super::tokens::{RadiusToken, ink};

pub(crate) fn glass_shadow(palette: &IcedColorPalette) -> Shadow {
    Shadow {
        color: with_alpha(palette.shadow, 0.4),
        offset: Vector::new(0.0, 8.0),
        blur_radius: 32.0,
    }
}

pub(crate) fn panel_shadow(palette: &IcedColorPalette) -> Shadow {
    Shadow {
        color: with_alpha(palette.shadow, 0.12),
        offset: Vector::new(0.0, 4.0),
        blur_radius: 24.0,
    }
}

pub(crate) fn active_shadow(palette: &IcedColorPalette) -> Shadow {
    Shadow {
        color: with_alpha(palette.shadow, 0.2),
        offset: Vector::new(0.0, 2.0),
        blur_radius: 8.0,
    }
}

/// Frosted floating surface used by the nav pill, sidebar and drawer.
pub(crate) fn glass_panel_style(
    palette: IcedColorPalette,
    radius: RadiusToken,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    move |_theme: &iced::Theme| container::Style {
        background: Some(palette.surface.into()),
        text_color: Some(palette.text_primary),
        border: Border {
            color: palette.ink_alpha(ink::BORDER),
            width: 1.0,
            radius: radius.px().into(),
        },
        shadow: glass_shadow(&palette),
        ..Default::default()
    }
}

/// Bordered card on the page background.
pub(crate) fn card_style(
    palette: IcedColorPalette,
    is_active: bool,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    move |_theme: &iced::Theme| {
        let border_alpha = if is_active {
            ink::FAINT
        } else {
            ink::BORDER
        };

        container::Style {
            background: Some(palette.ink_alpha(ink::TINT).into()),
            text_color: Some(palette.text_primary),
            border: Border {
                color: palette.ink_alpha(border_alpha),
                width: 1.0,
                radius: RadiusToken::Lg.px().into(),
            },
            ..Default::default()
        }
    }
}

/// Solid color block, used by swatches and previews.
pub(crate) fn swatch_style(
    color: iced::Color,
    border: iced::Color,
    radius: f32,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    move |_theme: &iced::Theme| container::Style {
        background: Some(color.into()),
        border: Border {
            color: border,
            width: 1.0,
            radius: radius.into(),
        },
        ..Default::default()
    }
}

/// Transparent button that tints on hover and when active.
pub(crate) fn ghost_button_style(
    palette: IcedColorPalette,
    is_active: bool,
) -> impl Fn(&iced::Theme, button::Status) -> button::Style + 'static {
    move |_theme, status| {
        let tint = if is_active {
            Some(ink::ACTIVE)
        } else {
            match status {
                button::Status::Hovered => Some(ink::HOVER),
                button::Status::Pressed => Some(ink::ACTIVE),
                button::Status::Active | button::Status::Disabled => None,
            }
        };
        let text_color = if is_active {
            palette.text_primary
        } else if matches!(status, button::Status::Hovered) {
            with_alpha(palette.ink, ink::STRONG)
        } else {
            palette.text_secondary
        };

        button::Style {
            background: tint.map(|alpha| palette.ink_alpha(alpha).into()),
            text_color,
            border: Border {
                radius: RadiusToken::Sm.px().into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    }
}

/// Filled button in ink color, the strongest call to action.
pub(crate) fn primary_button_style(
    palette: IcedColorPalette,
) -> impl Fn(&iced::Theme, button::Status) -> button::Style + 'static {
    move |_theme, status| {
        let alpha = match status {
            button::Status::Hovered => 0.9,
            button::Status::Pressed => 0.8,
            button::Status::Disabled => ink::MUTED,
            button::Status::Active => 1.0,
        };

        button::Style {
            background: Some(palette.ink_alpha(alpha).into()),
            text_color: palette.background,
            border: Border {
                radius: RadiusToken::Pill.px().into(),
                ..Border::default()
            },
            shadow: active_shadow(&palette),
            ..button::Style::default()
        }
    }
}

/// Outlined button with a hairline ink border.
pub(crate) fn secondary_button_style(
    palette: IcedColorPalette,
) -> impl Fn(&iced::Theme, button::Status) -> button::Style + 'static {
    move |_theme, status| {
        let background = match status {
            button::Status::Hovered => Some(palette.ink_alpha(ink::HOVER)),
            button::Status::Pressed => Some(palette.ink_alpha(ink::ACTIVE)),
            button::Status::Active | button::Status::Disabled => None,
        };

        button::Style {
            background: background.map(Background::Color),
            text_color: palette.text_primary,
            border: Border {
                color: palette.ink_alpha(ink::BORDER_STRONG),
                width: 1.0,
                radius: RadiusToken::Pill.px().into(),
            },
            ..button::Style::default()
        }
    }
}

/// Tinted button in the danger color.
pub(crate) fn danger_button_style(
    palette: IcedColorPalette,
) -> impl Fn(&iced::Theme, button::Status) -> button::Style + 'static {
    move |_theme, status| {
        let alpha = match status {
            button::Status::Hovered => 0.18,
            button::Status::Pressed => 0.24,
            button::Status::Active | button::Status::Disabled => 0.12,
        };

        button::Style {
            background: Some(with_alpha(palette.danger, alpha).into()),
            text_color: palette.danger,
            border: Border {
                color: with_alpha(palette.danger, ink::FAINT),
                width: 1.0,
                radius: RadiusToken::Pill.px().into(),
            },
            ..button::Style::default()
        }
    }
}

/// Small elevated label used by tooltips.
pub(crate) fn tooltip_style(
    palette: IcedColorPalette,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    move |_theme: &iced::Theme| container::Style {
        background: Some(palette.elevated.into()),
        text_color: Some(palette.text_primary),
        border: Border {
            color: palette.ink_alpha(ink::BORDER_STRONG),
            width: 1.0,
            radius: RadiusToken::Xs.px().into(),
        },
        shadow: panel_shadow(&palette),
        ..Default::default()
    }
}

pub(crate) fn text_input_style(
    palette: IcedColorPalette,
) -> impl Fn(&iced::Theme, text_input::Status) -> text_input::Style + 'static {
    move |theme, status| {
        let mut style = text_input::default(theme, status);
        let border_alpha = match status {
            text_input::Status::Focused { .. } => ink::FAINT,
            _ => ink::BORDER_STRONG,
        };

        style.background = Background::Color(palette.ink_alpha(ink::TINT));
        style.border = Border {
            color: palette.ink_alpha(border_alpha),
            width: 1.0,
            radius: RadiusToken::Md.px().into(),
        };
        style.placeholder = palette.ink_alpha(ink::MUTED);
        style.value = palette.text_primary;
        style.selection = palette.ink_alpha(ink::FAINT);
        style
    }
}

pub(crate) fn thin_scroll_style(
    palette: IcedColorPalette,
) -> impl Fn(&iced::Theme, scrollable::Status) -> scrollable::Style + 'static {
    move |theme, status| {
        let mut style = scrollable::default(theme, status);
        let radius = iced::border::Radius::from(RadiusToken::Pill.px());

        style.vertical_rail.background = None;
        style.vertical_rail.border.radius = radius;
        style.vertical_rail.scroller.border.radius = radius;
        style.vertical_rail.scroller.background =
            Background::Color(palette.ink_alpha(ink::BORDER_STRONG));

        style
    }
}
