use iced::Font;
use iced::font::{Family, Weight};

use super::tokens::FontRole;

/// A font face and its base size.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FontSettings {
    pub(crate) font_type: Font,
    pub(crate) size: f32,
}

/// Font configuration for display, body and code text.
///
/// Families are resolved by name from the system; when a family is missing
/// the renderer falls back to its default face.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FontsConfig {
    pub(crate) display: FontSettings,
    pub(crate) body: FontSettings,
    pub(crate) code: FontSettings,
}

impl Default for FontsConfig {
    fn default() -> Self {
        Self {
            display: FontSettings {
                font_type: Font {
                    weight: Weight::Medium,
                    family: Family::Name("EB Garamond"),
                    ..Font::default()
                },
                size: 32.0,
            },
            body: FontSettings {
                font_type: Font {
                    family: Family::Name("DM Sans"),
                    ..Font::default()
                },
                size: 15.0,
            },
            code: FontSettings {
                font_type: Font {
                    family: Family::Name("JetBrains Mono"),
                    ..Font::MONOSPACE
                },
                size: 12.0,
            },
        }
    }
}

impl FontsConfig {
    /// Return the face used for a typographic role.
    pub(crate) fn face(&self, role: FontRole) -> Font {
        match role {
            FontRole::Display => self.display.font_type,
            FontRole::Body => self.body.font_type,
            FontRole::Code => self.code.font_type,
        }
    }

    /// Return the body face at bold weight.
    pub(crate) fn body_strong(&self) -> Font {
        Font {
            weight: Weight::Semibold,
            ..self.body.font_type
        }
    }
}
