use iced::theme::Palette;
use iced::{Color, Theme};

use super::tokens::glass;

/// Light or dark variant of the design language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum ThemeKind {
    #[default]
    Dark,
    Light,
}

impl ThemeKind {
    pub(crate) fn toggled(self) -> Self {
        match self {
            ThemeKind::Dark => ThemeKind::Light,
            ThemeKind::Light => ThemeKind::Dark,
        }
    }

    pub(crate) fn is_dark(self) -> bool {
        self == ThemeKind::Dark
    }
}

/// Hex color definitions for one theme variant.
#[derive(Debug, Clone)]
pub(crate) struct ColorPalette {
    pub(crate) background: &'static str,
    pub(crate) surface: &'static str,
    pub(crate) elevated: &'static str,
    pub(crate) ink: &'static str,
    pub(crate) text_primary: &'static str,
    pub(crate) text_secondary: &'static str,
    pub(crate) text_tertiary: &'static str,
    pub(crate) success: &'static str,
    pub(crate) warning: &'static str,
    pub(crate) danger: &'static str,
    pub(crate) shadow: &'static str,
}

impl ColorPalette {
    pub(crate) fn dark() -> Self {
        Self {
            background: "#0f0e0d",
            surface: "#111111",
            elevated: "#1a1918",
            ink: "#ffffff",
            text_primary: "#e8e8e8",
            text_secondary: "#8a8a8a",
            text_tertiary: "#6b6b6b",
            success: "#34d399",
            warning: "#facc15",
            danger: "#f87171",
            shadow: "#000000",
        }
    }

    pub(crate) fn light() -> Self {
        Self {
            background: "#f7f6f4",
            surface: "#ffffff",
            elevated: "#ffffff",
            ink: "#0f0e0d",
            text_primary: "#1a1918",
            text_secondary: "#6b6b6b",
            text_tertiary: "#8a8a8a",
            success: "#059669",
            warning: "#ca8a04",
            danger: "#dc2626",
            shadow: "#000000",
        }
    }
}

/// Resolved palette used by views.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IcedColorPalette {
    pub(crate) background: Color,
    /// Glass surface, already at surface alpha.
    pub(crate) surface: Color,
    pub(crate) elevated: Color,
    /// Base for translucent tints and borders.
    pub(crate) ink: Color,
    pub(crate) text_primary: Color,
    pub(crate) text_secondary: Color,
    pub(crate) text_tertiary: Color,
    pub(crate) success: Color,
    pub(crate) warning: Color,
    pub(crate) danger: Color,
    pub(crate) shadow: Color,
}

impl IcedColorPalette {
    /// Return `ink` at the given opacity.
    pub(crate) fn ink_alpha(&self, alpha: f32) -> Color {
        with_alpha(self.ink, alpha)
    }

    /// Return the overlay color drawn behind sheets and dialogs.
    pub(crate) fn overlay(&self) -> Color {
        with_alpha(self.shadow, glass::OVERLAY_ALPHA)
    }
}

impl From<&ColorPalette> for IcedColorPalette {
    fn from(p: &ColorPalette) -> Self {
        Self {
            background: hex_or_black(p.background),
            surface: with_alpha(hex_or_black(p.surface), glass::SURFACE_ALPHA),
            elevated: hex_or_black(p.elevated),
            ink: hex_or_black(p.ink),
            text_primary: hex_or_black(p.text_primary),
            text_secondary: hex_or_black(p.text_secondary),
            text_tertiary: hex_or_black(p.text_tertiary),
            success: hex_or_black(p.success),
            warning: hex_or_black(p.warning),
            danger: hex_or_black(p.danger),
            shadow: hex_or_black(p.shadow),
        }
    }
}

/// Optional overrides for widget/component styling.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct StyleOverrides {
    pub(crate) background: Option<Color>,
    pub(crate) foreground: Option<Color>,
    pub(crate) border_radius: Option<f32>,
}

/// Application theme shared by every view.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    kind: ThemeKind,
    iced_palette: IcedColorPalette,
}

impl AppTheme {
    pub(crate) fn new(kind: ThemeKind) -> Self {
        let raw_palette = match kind {
            ThemeKind::Dark => ColorPalette::dark(),
            ThemeKind::Light => ColorPalette::light(),
        };
        Self {
            kind,
            iced_palette: IcedColorPalette::from(&raw_palette),
        }
    }

    pub(crate) fn kind(&self) -> ThemeKind {
        self.kind
    }

    pub(crate) fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.iced_palette;
        let id = match value.kind {
            ThemeKind::Dark => "vitrine-dark",
            ThemeKind::Light => "vitrine-light",
        };

        Theme::custom(
            id.to_string(),
            Palette {
                background: palette.background,
                text: palette.text_primary,
                primary: palette.ink,
                success: palette.success,
                warning: palette.warning,
                danger: palette.danger,
            },
        )
    }
}

/// Theme props passed through App -> Page -> Widget -> Component.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
    pub(crate) overrides: Option<StyleOverrides>,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self {
            theme,
            overrides: None,
        }
    }

    pub(crate) fn with_overrides(self, overrides: StyleOverrides) -> Self {
        Self {
            overrides: Some(overrides),
            ..self
        }
    }

    pub(crate) fn palette(&self) -> &'a IcedColorPalette {
        self.theme.iced_palette()
    }
}

/// Manages the current light/dark theme.
#[derive(Debug, Clone)]
pub(crate) struct ThemeManager {
    current: AppTheme,
}

impl ThemeManager {
    pub(crate) fn new(kind: ThemeKind) -> Self {
        Self {
            current: AppTheme::new(kind),
        }
    }

    pub(crate) fn current(&self) -> &AppTheme {
        &self.current
    }

    pub(crate) fn iced_theme(&self) -> Theme {
        Theme::from(&self.current)
    }

    /// Switch to the opposite variant and return it.
    pub(crate) fn toggle(&mut self) -> ThemeKind {
        let next = self.current.kind().toggled();
        self.current = AppTheme::new(next);
        next
    }
}

/// Parse `#rrggbb` (leading `#` optional) into a color.
pub(crate) fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#').unwrap_or(value);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).ok()
    };

    Some(Color::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

pub(crate) fn with_alpha(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

fn hex_or_black(value: &str) -> Color {
    parse_hex_color(value).unwrap_or(Color::BLACK)
}

#[cfg(test)]
mod tests {
    use iced::Color;

    use super::{ThemeKind, ThemeManager, parse_hex_color};

    #[test]
    fn given_hex_with_hash_when_parsed_then_channels_match() {
        assert_eq!(
            parse_hex_color("#1a1918"),
            Some(Color::from_rgb8(0x1a, 0x19, 0x18))
        );
    }

    #[test]
    fn given_hex_without_hash_when_parsed_then_color_is_returned() {
        assert_eq!(parse_hex_color("ffffff"), Some(Color::WHITE));
    }

    #[test]
    fn given_malformed_hex_when_parsed_then_none_is_returned() {
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color("#gg0000"), None);
        assert_eq!(parse_hex_color("#ffffff00"), None);
    }

    #[test]
    fn given_dark_manager_when_toggled_twice_then_theme_returns_to_dark() {
        let mut manager = ThemeManager::new(ThemeKind::Dark);

        assert_eq!(manager.toggle(), ThemeKind::Light);
        assert_eq!(manager.current().kind(), ThemeKind::Light);
        assert_eq!(manager.toggle(), ThemeKind::Dark);
    }

    #[test]
    fn given_dark_theme_when_resolving_surface_then_glass_alpha_is_applied() {
        let manager = ThemeManager::new(ThemeKind::Dark);
        let surface = manager.current().iced_palette().surface;
        assert!((surface.a - 0.85).abs() < f32::EPSILON);
    }
}
