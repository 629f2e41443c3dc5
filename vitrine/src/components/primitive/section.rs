use iced::widget::{column, text};
use iced::{Element, alignment};

use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::ThemeProps;
use crate::shared::ui::tokens::{HEADING_SCALE, ink};

const EYEBROW_SIZE: f32 = 11.0;
const DESCRIPTION_SIZE: f32 = 15.0;
const HEADER_SPACING: f32 = 12.0;

/// Props for a page or section heading block.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SectionProps<'a> {
    pub(crate) eyebrow: &'a str,
    pub(crate) title: &'a str,
    pub(crate) description: Option<&'a str>,
    /// Index into the heading scale.
    pub(crate) level: usize,
    /// Interpolates heading size between its fluid bounds.
    pub(crate) fluid: f32,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render eyebrow, heading and optional description.
pub(crate) fn view<'a, Message: 'a>(
    props: SectionProps<'a>,
) -> Element<'a, Message> {
    let palette = props.theme.palette();
    let heading = HEADING_SCALE[props.level.min(HEADING_SCALE.len() - 1)];
    let fluid = props.fluid.clamp(0.0, 1.0);
    let size = heading.min + (heading.max - heading.min) * fluid;

    let mut block = column![
        text(props.eyebrow.to_uppercase())
            .size(EYEBROW_SIZE)
            .font(props.fonts.code.font_type)
            .color(palette.ink_alpha(ink::MUTED)),
        text(props.title)
            .size(size)
            .font(props.fonts.face(heading.role))
            .color(palette.text_primary),
    ]
    .spacing(HEADER_SPACING)
    .align_x(alignment::Horizontal::Left);

    if let Some(description) = props.description {
        block = block.push(
            text(description)
                .size(DESCRIPTION_SIZE)
                .font(props.fonts.body.font_type)
                .color(palette.text_secondary),
        );
    }

    block.into()
}

/// Map a content width onto the fluid heading range.
pub(crate) fn fluid_factor(content_width: f32) -> f32 {
    ((content_width - 360.0) / (1280.0 - 360.0)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::fluid_factor;

    #[test]
    fn given_narrow_and_wide_widths_when_mapped_then_factor_is_clamped() {
        assert_eq!(fluid_factor(200.0), 0.0);
        assert_eq!(fluid_factor(2000.0), 1.0);
        let mid = fluid_factor(820.0);
        assert!(mid > 0.4 && mid < 0.6);
    }
}
