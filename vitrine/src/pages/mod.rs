//! Reference pages rendered in the shell content area.

pub(crate) mod colors;
pub(crate) mod layout;
pub(crate) mod motion;
pub(crate) mod overview;
pub(crate) mod typography;

use iced::widget::column;
use iced::{Element, Length};

use crate::components::primitive::section::{self, SectionProps};
use crate::components::primitive::token_row::{self, TokenRowProps};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::ThemeProps;
use crate::shared::ui::tokens::ReferenceRow;

const PAGE_SPACING: f32 = 64.0;
const BLOCK_SPACING: f32 = 24.0;
const PAGE_TITLE_LEVEL: usize = 1;
const BLOCK_TITLE_LEVEL: usize = 2;

/// Layout inputs shared by every token page.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PageFrame<'a> {
    /// Heading interpolation factor.
    pub(crate) fluid: f32,
    /// Width available to the page body.
    pub(crate) content_width: f32,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Stack a page header above its titled blocks.
fn page<'a, Message: 'a>(
    frame: PageFrame<'a>,
    title: &'a str,
    description: &'a str,
    blocks: Vec<Element<'a, Message>>,
) -> Element<'a, Message> {
    let header = section::view(SectionProps {
        eyebrow: "Design Tokens",
        title,
        description: Some(description),
        level: PAGE_TITLE_LEVEL,
        fluid: frame.fluid,
        theme: frame.theme,
        fonts: frame.fonts,
    });

    let mut children = vec![header];
    children.extend(blocks);
    column(children)
        .spacing(PAGE_SPACING)
        .width(Length::Fill)
        .into()
}

impl PageFrame<'_> {
    /// Number of cells of `min_cell` width that fit this page.
    fn columns(&self, min_cell: f32, max_columns: usize) -> usize {
        columns_for(self.content_width, min_cell, max_columns)
    }
}

/// A titled block inside a page.
fn block<'a, Message: 'a>(
    frame: PageFrame<'a>,
    eyebrow: &'a str,
    title: &'a str,
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    let header = section::view(SectionProps {
        eyebrow,
        title,
        description: None,
        level: BLOCK_TITLE_LEVEL,
        fluid: frame.fluid,
        theme: frame.theme,
        fonts: frame.fonts,
    });

    column![header, content]
        .spacing(BLOCK_SPACING)
        .width(Length::Fill)
        .into()
}

/// Split `items` into rows of `columns` cells, padding the last row.
fn grid<'a, Message: 'a>(
    items: Vec<Element<'a, Message>>,
    columns: usize,
    spacing: f32,
) -> Element<'a, Message> {
    let columns = columns.max(1);
    let mut rows: Vec<Element<'a, Message>> = Vec::new();
    let mut current: Vec<Element<'a, Message>> = Vec::with_capacity(columns);

    for item in items {
        current.push(item);
        if current.len() == columns {
            rows.push(
                iced::widget::row(std::mem::take(&mut current))
                    .spacing(spacing)
                    .into(),
            );
        }
    }
    if !current.is_empty() {
        while current.len() < columns {
            current.push(
                iced::widget::Space::new().width(Length::Fill).into(),
            );
        }
        rows.push(iced::widget::row(current).spacing(spacing).into());
    }

    column(rows).spacing(spacing).width(Length::Fill).into()
}

fn reference_table<'a, Message: 'a>(
    frame: PageFrame<'a>,
    rows: &'a [ReferenceRow],
) -> Element<'a, Message> {
    token_row::table(
        rows.iter()
            .map(|row| {
                token_row::view(TokenRowProps {
                    name: row.label,
                    value: row.value,
                    note: row.note,
                    theme: frame.theme,
                    fonts: frame.fonts,
                })
            })
            .collect(),
    )
}

/// Number of cells of `min_cell` width that fit `content_width`.
pub(crate) fn columns_for(
    content_width: f32,
    min_cell: f32,
    max_columns: usize,
) -> usize {
    if content_width <= 0.0 || min_cell <= 0.0 {
        return 1;
    }
    let fit = (content_width / min_cell).floor() as usize;
    fit.clamp(1, max_columns.max(1))
}

#[cfg(test)]
mod tests {
    use super::columns_for;

    #[test]
    fn given_content_width_when_fitting_cells_then_columns_are_bounded() {
        assert_eq!(columns_for(768.0, 320.0, 2), 2);
        assert_eq!(columns_for(500.0, 320.0, 2), 1);
        assert_eq!(columns_for(2000.0, 120.0, 5), 5);
    }

    #[test]
    fn given_degenerate_width_when_fitting_cells_then_one_column_is_used() {
        assert_eq!(columns_for(0.0, 320.0, 2), 1);
        assert_eq!(columns_for(800.0, 0.0, 2), 1);
    }
}
