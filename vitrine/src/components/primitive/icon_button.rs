use iced::widget::{button, container, svg};
use iced::{Border, Color, Element, Length, alignment};

use crate::shared::ui::theme::{StyleOverrides, ThemeProps};
use crate::shared::ui::tokens::{RadiusToken, ink};

/// UI events emitted by an icon button.
#[derive(Debug, Clone)]
pub(crate) enum IconButtonEvent {
    Pressed,
}

/// Visual variants for an icon button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IconButtonVariant {
    /// Muted icon that brightens on hover.
    Standard,
    /// Tinted background marking a toggled-on control.
    Active,
}

/// Props for rendering an icon button.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IconButtonProps<'a> {
    pub(crate) icon: &'static [u8],
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) size: f32,
    pub(crate) icon_size: f32,
    pub(crate) variant: IconButtonVariant,
}

/// Render a square icon button used across the shell chrome.
pub(crate) fn view<'a>(
    props: IconButtonProps<'a>,
) -> Element<'a, IconButtonEvent> {
    let palette = *props.theme.palette();
    let colors = resolve_variant_colors(
        props.variant,
        palette.text_secondary,
        palette.text_primary,
        props.theme.overrides,
    );
    let radius = props
        .theme
        .overrides
        .and_then(|o| o.border_radius)
        .unwrap_or(RadiusToken::Sm.px());
    let is_active = props.variant == IconButtonVariant::Active;

    let icon = svg::Svg::new(svg::Handle::from_memory(props.icon))
        .width(Length::Fixed(props.icon_size))
        .height(Length::Fixed(props.icon_size))
        .style(move |_, status| {
            let color = if matches!(status, svg::Status::Hovered) {
                colors.hover
            } else {
                colors.base
            };

            svg::Style { color: Some(color) }
        });

    let icon_container = container(icon)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    button(icon_container)
        .on_press(IconButtonEvent::Pressed)
        .padding(0.0)
        .width(Length::Fixed(props.size))
        .height(Length::Fixed(props.size))
        .style(move |_, status| {
            let tint = match (is_active, status) {
                (true, _) => Some(ink::ACTIVE),
                (false, button::Status::Hovered) => Some(ink::HOVER),
                (false, button::Status::Pressed) => Some(ink::ACTIVE),
                (false, _) => None,
            };

            button::Style {
                background: tint
                    .map(|alpha| palette.ink_alpha(alpha).into())
                    .or(colors.background.map(Into::into)),
                border: Border {
                    radius: radius.into(),
                    ..Border::default()
                },
                ..button::Style::default()
            }
        })
        .into()
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct VariantColors {
    base: Color,
    hover: Color,
    background: Option<Color>,
}

fn resolve_variant_colors(
    variant: IconButtonVariant,
    muted: Color,
    strong: Color,
    overrides: Option<StyleOverrides>,
) -> VariantColors {
    let background = overrides.and_then(|o| o.background);
    if let Some(color) = overrides.and_then(|o| o.foreground) {
        return VariantColors {
            base: color,
            hover: color,
            background,
        };
    }

    match variant {
        IconButtonVariant::Standard => VariantColors {
            base: muted,
            hover: strong,
            background,
        },
        IconButtonVariant::Active => VariantColors {
            base: strong,
            hover: strong,
            background,
        },
    }
}

#[cfg(test)]
mod tests {
    use iced::Color;

    use super::{IconButtonVariant, resolve_variant_colors};
    use crate::shared::ui::theme::StyleOverrides;

    const MUTED: Color = Color::from_rgb(0.5, 0.5, 0.5);
    const STRONG: Color = Color::from_rgb(0.9, 0.9, 0.9);

    #[test]
    fn given_standard_variant_when_resolving_without_override_then_hover_brightens()
     {
        let colors = resolve_variant_colors(
            IconButtonVariant::Standard,
            MUTED,
            STRONG,
            None,
        );

        assert_eq!(colors.base, MUTED);
        assert_eq!(colors.hover, STRONG);
        assert_eq!(colors.background, None);
    }

    #[test]
    fn given_active_variant_when_resolving_then_icon_is_always_strong() {
        let colors =
            resolve_variant_colors(IconButtonVariant::Active, MUTED, STRONG, None);

        assert_eq!(colors.base, STRONG);
        assert_eq!(colors.hover, STRONG);
    }

    #[test]
    fn given_foreground_override_when_resolving_then_override_is_used_for_all_states()
     {
        let override_color = Color::from_rgb(0.3, 0.2, 0.1);
        let overrides = Some(StyleOverrides {
            background: Some(Color::BLACK),
            foreground: Some(override_color),
            border_radius: None,
        });

        let colors = resolve_variant_colors(
            IconButtonVariant::Standard,
            MUTED,
            STRONG,
            overrides,
        );

        assert_eq!(colors.base, override_color);
        assert_eq!(colors.hover, override_color);
        assert_eq!(colors.background, Some(Color::BLACK));
    }
}
