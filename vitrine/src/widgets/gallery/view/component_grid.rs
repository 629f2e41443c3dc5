use iced::widget::{
    Space, button, column, container, row, svg, text, text_input, toggler,
    tooltip,
};
use iced::{Border, Element, Length, Padding, alignment};

use super::super::event::GalleryIntent;
use super::super::model::{
    ComponentKind, DialogKind, GalleryViewModel, PillTab, PreferenceSwitch,
    UnderlineTab,
};
use crate::components::primitive::section::{self, SectionProps};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::icons;
use crate::shared::ui::style;
use crate::shared::ui::theme::{
    IcedColorPalette, ThemeProps, parse_hex_color, with_alpha,
};
use crate::shared::ui::tokens::{RadiusToken, StatusTone, ink};

const GRID_SPACING: f32 = 16.0;
const CARD_PADDING: f32 = 20.0;
const CARD_LABEL_SIZE: f32 = 11.0;
const VARIANT_LABEL_SIZE: f32 = 10.0;
const CAPTION_SIZE: f32 = 13.0;
const CHEVRON_SIZE: f32 = 12.0;
const SAMPLE_TEXT_SIZE: f32 = 13.0;
const SEARCH_ICON_SIZE: f32 = 15.0;
const INPUT_PADDING: f32 = 9.0;
const COLLAPSED_INPUT_WIDTH: f32 = 200.0;
const AVATAR_SIZES: [(&str, f32); 5] = [
    ("xs", 24.0),
    ("sm", 32.0),
    ("md", 40.0),
    ("lg", 48.0),
    ("xl", 56.0),
];
const AVATAR_GROUP: [&str; 4] = ["JD", "RF", "AK", "+3"];
const SWITCH_SIZES: [(&str, f32); 3] =
    [("sm", 14.0), ("md", 18.0), ("lg", 22.0)];
const TOOLTIP_SIDES: [(&str, tooltip::Position); 4] = [
    ("top", tooltip::Position::Top),
    ("right", tooltip::Position::Right),
    ("bottom", tooltip::Position::Bottom),
    ("left", tooltip::Position::Left),
];

/// Sample button variants shown by the button card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SampleVariant {
    Primary,
    Secondary,
    Ghost,
    Danger,
}

impl SampleVariant {
    const ALL: [SampleVariant; 4] = [
        SampleVariant::Primary,
        SampleVariant::Secondary,
        SampleVariant::Ghost,
        SampleVariant::Danger,
    ];

    fn label(self) -> &'static str {
        match self {
            SampleVariant::Primary => "primary",
            SampleVariant::Secondary => "secondary",
            SampleVariant::Ghost => "ghost",
            SampleVariant::Danger => "danger",
        }
    }

    fn title(self) -> &'static str {
        match self {
            SampleVariant::Primary => "Primary",
            SampleVariant::Secondary => "Secondary",
            SampleVariant::Ghost => "Ghost",
            SampleVariant::Danger => "Danger",
        }
    }
}

/// Props for the components page gallery.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ComponentGridProps<'a> {
    pub(crate) vm: GalleryViewModel<'a>,
    /// Cards per row; full-width cards ignore it.
    pub(crate) columns: usize,
    /// Heading interpolation factor for the page title.
    pub(crate) fluid: f32,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the page header and the card grid.
pub(crate) fn view<'a>(
    props: ComponentGridProps<'a>,
) -> Element<'a, GalleryIntent> {
    let header = section::view(SectionProps {
        eyebrow: "Component Library",
        title: "Components",
        description: Some("Interactive primitives. Click to explore variants."),
        level: 1,
        fluid: props.fluid,
        theme: props.theme,
        fonts: props.fonts,
    });

    let columns = props.columns.max(1);
    let mut rows: Vec<Element<'a, GalleryIntent>> = Vec::new();
    let mut pending: Vec<Element<'a, GalleryIntent>> = Vec::new();

    for kind in ComponentKind::ALL {
        if kind.is_full_width() {
            flush_row(&mut rows, &mut pending, columns);
            rows.push(card(kind, props));
            continue;
        }
        pending.push(card(kind, props));
        if pending.len() == columns {
            flush_row(&mut rows, &mut pending, columns);
        }
    }
    flush_row(&mut rows, &mut pending, columns);

    column![header, column(rows).spacing(GRID_SPACING)]
        .spacing(40.0)
        .width(Length::Fill)
        .into()
}

fn flush_row<'a>(
    rows: &mut Vec<Element<'a, GalleryIntent>>,
    pending: &mut Vec<Element<'a, GalleryIntent>>,
    columns: usize,
) {
    if pending.is_empty() {
        return;
    }
    while pending.len() < columns {
        pending.push(Space::new().width(Length::Fill).into());
    }
    rows.push(
        row(std::mem::take(pending))
            .spacing(GRID_SPACING)
            .width(Length::Fill)
            .into(),
    );
}

fn card<'a>(
    kind: ComponentKind,
    props: ComponentGridProps<'a>,
) -> Element<'a, GalleryIntent> {
    let palette = *props.theme.palette();
    let is_expanded = props.vm.expanded == Some(kind);

    let mut body = column![
        card_header(kind, is_expanded, props),
        container(collapsed_preview(kind, props))
            .width(Length::Fill)
            .padding([8.0, 0.0])
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    ]
    .spacing(16.0)
    .padding(CARD_PADDING);

    if is_expanded {
        let divider = container(Space::new().width(Length::Fill).height(1.0))
            .style(style::swatch_style(
                palette.ink_alpha(ink::BORDER),
                palette.ink_alpha(ink::BORDER),
                0.0,
            ));
        body = body.push(divider).push(expanded_variants(kind, props));
    }

    container(body)
        .width(Length::Fill)
        .style(style::card_style(palette, is_expanded))
        .into()
}

fn card_header<'a>(
    kind: ComponentKind,
    is_expanded: bool,
    props: ComponentGridProps<'a>,
) -> Element<'a, GalleryIntent> {
    let palette = *props.theme.palette();
    let label = text(kind.name().to_uppercase())
        .size(CARD_LABEL_SIZE)
        .font(props.fonts.code.font_type)
        .color(palette.ink_alpha(ink::MUTED));

    if !kind.is_expandable() {
        return label.into();
    }

    // The chevron points up while expanded.
    let chevron_icon = if is_expanded {
        icons::CHEVRON_UP
    } else {
        icons::CHEVRON_DOWN
    };
    let chevron = svg::Svg::new(svg::Handle::from_memory(chevron_icon))
        .width(Length::Fixed(CHEVRON_SIZE))
        .height(Length::Fixed(CHEVRON_SIZE))
        .style(move |_, _| svg::Style {
            color: Some(palette.ink_alpha(ink::FAINT)),
        });

    button(
        row![label, chevron]
            .spacing(6.0)
            .align_y(alignment::Vertical::Center),
    )
    .on_press(GalleryIntent::CardToggled(kind))
    .padding(0.0)
    .width(Length::Fill)
    .style(|_, _| button::Style::default())
    .into()
}

fn collapsed_preview<'a>(
    kind: ComponentKind,
    props: ComponentGridProps<'a>,
) -> Element<'a, GalleryIntent> {
    let palette = *props.theme.palette();
    match kind {
        ComponentKind::Button => {
            sample_button("Get Started", SampleVariant::Primary, props)
        },
        ComponentKind::Switch => toggler(props.vm.preview_switch)
            .on_toggle(GalleryIntent::PreviewSwitchToggled)
            .into(),
        ComponentKind::Tabs => pill_tabs(props),
        ComponentKind::Input => text_input("Search...", props.vm.search_value)
            .on_input(GalleryIntent::SearchChanged)
            .size(SAMPLE_TEXT_SIZE)
            .padding(INPUT_PADDING)
            .width(Length::Fixed(COLLAPSED_INPUT_WIDTH))
            .style(style::text_input_style(palette))
            .into(),
        ComponentKind::Dialog => button(
            text("Open Dialog").size(SAMPLE_TEXT_SIZE),
        )
        .on_press(GalleryIntent::DialogOpened(DialogKind::Example))
        .padding([6.0, 12.0])
        .style(style::secondary_button_style(palette))
        .into(),
        ComponentKind::Tooltip => with_tooltip(
            sample_button("Hover me", SampleVariant::Ghost, props),
            "Glass tooltip",
            tooltip::Position::Top,
            props,
        ),
        ComponentKind::Avatar => {
            let avatars: Vec<Element<'a, GalleryIntent>> = AVATAR_GROUP
                .iter()
                .map(|&initials| avatar(initials, 40.0, props))
                .collect();
            row(avatars).spacing(4.0).into()
        },
        ComponentKind::Badge => {
            let badges: Vec<Element<'a, GalleryIntent>> = StatusTone::ALL
                .iter()
                .map(|&tone| badge(tone, props))
                .collect();
            row(badges).spacing(8.0).into()
        },
    }
}

fn expanded_variants<'a>(
    kind: ComponentKind,
    props: ComponentGridProps<'a>,
) -> Element<'a, GalleryIntent> {
    match kind {
        ComponentKind::Button => button_variants(props),
        ComponentKind::Switch => switch_variants(props),
        ComponentKind::Tabs => column![
            labeled("pill", pill_tabs(props), props),
            text(props.vm.pill_tab.caption())
                .size(CAPTION_SIZE)
                .color(props.theme.palette().ink_alpha(ink::MUTED)),
            labeled("underline", underline_tabs(props), props),
            text(props.vm.underline_tab.caption())
                .size(CAPTION_SIZE)
                .color(props.theme.palette().ink_alpha(ink::MUTED)),
        ]
        .spacing(12.0)
        .into(),
        ComponentKind::Input => input_variants(props),
        ComponentKind::Dialog => column![
            labeled(
                "with description",
                dialog_trigger("Open Dialog", DialogKind::Confirm, props),
                props,
            ),
            labeled(
                "minimal",
                dialog_trigger("Simple Dialog", DialogKind::Simple, props),
                props,
            ),
        ]
        .spacing(24.0)
        .into(),
        ComponentKind::Tooltip => {
            let sides: Vec<Element<'a, GalleryIntent>> = TOOLTIP_SIDES
                .iter()
                .map(|&(side, position)| {
                    let trigger =
                        sample_button(side, SampleVariant::Secondary, props);
                    with_caption(
                        with_tooltip(trigger, "Tooltip", position, props),
                        side,
                        props,
                    )
                })
                .collect();
            labeled("positions", row(sides).spacing(16.0).into(), props)
        },
        ComponentKind::Avatar => {
            let sizes: Vec<Element<'a, GalleryIntent>> = AVATAR_SIZES
                .iter()
                .map(|&(label, size)| {
                    let initials = if label == "xs" { "A" } else { "AB" };
                    with_caption(avatar(initials, size, props), label, props)
                })
                .collect();
            labeled(
                "sizes",
                row(sizes)
                    .spacing(16.0)
                    .align_y(alignment::Vertical::Bottom)
                    .into(),
                props,
            )
        },
        ComponentKind::Badge => Space::new().into(),
    }
}

fn button_variants<'a>(props: ComponentGridProps<'a>) -> Element<'a, GalleryIntent> {
    let palette = *props.theme.palette();
    let mut samples: Vec<Element<'a, GalleryIntent>> = SampleVariant::ALL
        .iter()
        .map(|variant| {
            with_caption(
                sample_button(variant.title(), *variant, props),
                variant.label(),
                props,
            )
        })
        .collect();

    let icons_row = row![
        icon_sample(icons::PLUS, "add", props),
        icon_sample(icons::HEART, "like", props),
    ]
    .spacing(8.0);
    samples.push(with_caption(icons_row.into(), "icon", props));

    let pressed = props
        .vm
        .last_pressed
        .map(|label| format!("last pressed: {label}"))
        .unwrap_or_else(|| String::from("press a variant"));

    column![
        labeled(
            "variants",
            row(samples)
                .spacing(12.0)
                .align_y(alignment::Vertical::Bottom)
                .into(),
            props,
        ),
        text(pressed)
            .size(VARIANT_LABEL_SIZE)
            .font(props.fonts.code.font_type)
            .color(palette.ink_alpha(ink::FAINT)),
    ]
    .spacing(12.0)
    .into()
}

fn switch_variants<'a>(props: ComponentGridProps<'a>) -> Element<'a, GalleryIntent> {
    let palette = *props.theme.palette();
    let rows: Vec<Element<'a, GalleryIntent>> = PreferenceSwitch::ALL
        .iter()
        .map(|switch| {
            let switch = *switch;
            container(
                row![
                    text(switch.label())
                        .size(CAPTION_SIZE)
                        .color(palette.ink_alpha(ink::STRONG)),
                    Space::new().width(Length::Fill),
                    toggler(props.vm.preference(switch)).on_toggle(
                        move |value| {
                            GalleryIntent::PreferenceToggled(switch, value)
                        }
                    ),
                ]
                .align_y(alignment::Vertical::Center),
            )
            .padding([12.0, 16.0])
            .style(move |_| container::Style {
                background: Some(palette.ink_alpha(ink::TINT).into()),
                border: Border {
                    color: palette.ink_alpha(ink::BORDER),
                    width: 1.0,
                    radius: RadiusToken::Md.px().into(),
                },
                ..Default::default()
            })
            .into()
        })
        .collect();

    let sizes: Vec<Element<'a, GalleryIntent>> = SWITCH_SIZES
        .iter()
        .map(|&(label, size)| {
            with_caption(
                toggler(props.vm.preview_switch)
                    .size(size)
                    .on_toggle(GalleryIntent::PreviewSwitchToggled)
                    .into(),
                label,
                props,
            )
        })
        .collect();

    column![
        labeled("toggle rows", column(rows).spacing(8.0).into(), props),
        labeled(
            "sizes",
            row(sizes)
                .spacing(32.0)
                .align_y(alignment::Vertical::Bottom)
                .into(),
            props,
        ),
    ]
    .spacing(24.0)
    .into()
}

fn input_variants<'a>(props: ComponentGridProps<'a>) -> Element<'a, GalleryIntent> {
    let palette = *props.theme.palette();
    let plain = text_input("Enter value...", props.vm.input_value)
        .on_input(GalleryIntent::InputChanged)
        .size(SAMPLE_TEXT_SIZE)
        .padding(INPUT_PADDING)
        .style(style::text_input_style(palette));

    let search_icon = svg::Svg::new(svg::Handle::from_memory(icons::SEARCH))
        .width(Length::Fixed(SEARCH_ICON_SIZE))
        .height(Length::Fixed(SEARCH_ICON_SIZE))
        .style(move |_, _| svg::Style {
            color: Some(palette.ink_alpha(ink::MUTED)),
        });
    let search = text_input("Search components...", props.vm.search_value)
        .on_input(GalleryIntent::SearchChanged)
        .size(SAMPLE_TEXT_SIZE)
        .padding(INPUT_PADDING)
        .style(style::text_input_style(palette));

    column![
        labeled("plain", plain.into(), props),
        labeled(
            "with icon",
            row![search_icon, search]
                .spacing(8.0)
                .align_y(alignment::Vertical::Center)
                .into(),
            props,
        ),
    ]
    .spacing(16.0)
    .into()
}

fn pill_tabs<'a>(props: ComponentGridProps<'a>) -> Element<'a, GalleryIntent> {
    let palette = *props.theme.palette();
    let tabs: Vec<Element<'a, GalleryIntent>> = PillTab::ALL
        .iter()
        .map(|tab| {
            let is_active = *tab == props.vm.pill_tab;
            button(text(tab.label()).size(12.0))
                .on_press(GalleryIntent::PillTabSelected(*tab))
                .padding([4.0, 12.0])
                .style(move |theme, status| {
                    let mut style =
                        style::ghost_button_style(palette, false)(theme, status);
                    if is_active {
                        style.background =
                            Some(palette.ink_alpha(ink::SELECTED).into());
                        style.text_color = palette.text_primary;
                        style.shadow = style::active_shadow(&palette);
                    }
                    style
                })
                .into()
        })
        .collect();

    container(row(tabs).spacing(2.0))
        .padding(4.0)
        .style(move |_| container::Style {
            background: Some(palette.ink_alpha(0.03).into()),
            border: Border {
                color: palette.ink_alpha(ink::BORDER),
                width: 1.0,
                radius: RadiusToken::Lg.px().into(),
            },
            ..Default::default()
        })
        .into()
}

fn underline_tabs<'a>(
    props: ComponentGridProps<'a>,
) -> Element<'a, GalleryIntent> {
    let palette = *props.theme.palette();
    let tabs: Vec<Element<'a, GalleryIntent>> = UnderlineTab::ALL
        .iter()
        .map(|tab| {
            let is_active = *tab == props.vm.underline_tab;
            let text_color = if is_active {
                palette.text_primary
            } else {
                palette.ink_alpha(0.4)
            };
            let underline = if is_active {
                palette.ink_alpha(0.6)
            } else {
                iced::Color::TRANSPARENT
            };

            button(
                column![
                    text(tab.label()).size(12.0).color(text_color),
                    container(Space::new().width(Length::Fill).height(2.0))
                        .style(style::swatch_style(underline, underline, 0.0)),
                ]
                .spacing(8.0)
                .width(Length::Shrink),
            )
            .on_press(GalleryIntent::UnderlineTabSelected(*tab))
            .padding(Padding {
                top: 8.0,
                right: 16.0,
                bottom: 0.0,
                left: 16.0,
            })
            .style(|_, _| button::Style::default())
            .into()
        })
        .collect();

    column![
        row(tabs),
        container(Space::new().width(Length::Fill).height(1.0)).style(
            style::swatch_style(
                palette.ink_alpha(ink::BORDER),
                palette.ink_alpha(ink::BORDER),
                0.0,
            )
        ),
    ]
    .into()
}

fn sample_button<'a>(
    label: &'a str,
    variant: SampleVariant,
    props: ComponentGridProps<'a>,
) -> Element<'a, GalleryIntent> {
    let palette = *props.theme.palette();
    let content = text(label)
        .size(SAMPLE_TEXT_SIZE)
        .font(props.fonts.body_strong());
    let sample = button(content)
        .on_press(GalleryIntent::SamplePressed(variant.label()))
        .padding([8.0, 16.0]);

    match variant {
        SampleVariant::Primary => {
            sample.style(style::primary_button_style(palette)).into()
        },
        SampleVariant::Secondary => {
            sample.style(style::secondary_button_style(palette)).into()
        },
        SampleVariant::Ghost => sample
            .style(style::ghost_button_style(palette, false))
            .into(),
        SampleVariant::Danger => {
            sample.style(style::danger_button_style(palette)).into()
        },
    }
}

fn icon_sample<'a>(
    icon: &'static [u8],
    label: &'static str,
    props: ComponentGridProps<'a>,
) -> Element<'a, GalleryIntent> {
    let palette = *props.theme.palette();
    let glyph = svg::Svg::new(svg::Handle::from_memory(icon))
        .width(Length::Fixed(16.0))
        .height(Length::Fixed(16.0))
        .style(move |_, _| svg::Style {
            color: Some(palette.text_primary),
        });

    button(glyph)
        .on_press(GalleryIntent::SamplePressed(label))
        .padding(10.0)
        .style(style::secondary_button_style(palette))
        .into()
}

fn dialog_trigger<'a>(
    label: &'a str,
    kind: DialogKind,
    props: ComponentGridProps<'a>,
) -> Element<'a, GalleryIntent> {
    let palette = *props.theme.palette();
    button(text(label).size(SAMPLE_TEXT_SIZE))
        .on_press(GalleryIntent::DialogOpened(kind))
        .padding([6.0, 12.0])
        .style(style::secondary_button_style(palette))
        .into()
}

fn with_tooltip<'a>(
    trigger: Element<'a, GalleryIntent>,
    tip: &'a str,
    position: tooltip::Position,
    props: ComponentGridProps<'a>,
) -> Element<'a, GalleryIntent> {
    let palette = *props.theme.palette();
    let label = container(text(tip).size(12.0))
        .padding([4.0, 8.0])
        .style(style::tooltip_style(palette));

    tooltip(trigger, label, position).gap(6.0).into()
}

fn avatar<'a>(
    initials: &'a str,
    size: f32,
    props: ComponentGridProps<'a>,
) -> Element<'a, GalleryIntent> {
    let palette = *props.theme.palette();
    container(
        text(initials)
            .size((size * 0.36).max(10.0))
            .font(props.fonts.body_strong())
            .color(palette.ink_alpha(ink::STRONG)),
    )
    .width(Length::Fixed(size))
    .height(Length::Fixed(size))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(move |_| container::Style {
        background: Some(palette.elevated.into()),
        border: Border {
            color: palette.background,
            width: 2.0,
            radius: (size / 2.0).into(),
        },
        ..Default::default()
    })
    .into()
}

fn badge<'a>(
    tone: StatusTone,
    props: ComponentGridProps<'a>,
) -> Element<'a, GalleryIntent> {
    let palette = *props.theme.palette();
    let (base, fill) = badge_colors(tone, &palette);

    container(text(tone.label()).size(11.0).font(props.fonts.body_strong()))
        .padding([2.0, 8.0])
        .style(move |_| container::Style {
            background: Some(fill.into()),
            text_color: Some(base),
            border: Border {
                color: with_alpha(base, ink::FAINT),
                width: 1.0,
                radius: RadiusToken::Xs.px().into(),
            },
            ..Default::default()
        })
        .into()
}

/// Resolve text and fill colors of a status badge.
fn badge_colors(
    tone: StatusTone,
    palette: &IcedColorPalette,
) -> (iced::Color, iced::Color) {
    match tone.hex().and_then(parse_hex_color) {
        Some(color) => (color, with_alpha(color, ink::SELECTED)),
        None => (palette.ink_alpha(ink::SUBTLE), palette.ink_alpha(0.05)),
    }
}

fn labeled<'a>(
    label: &'a str,
    content: Element<'a, GalleryIntent>,
    props: ComponentGridProps<'a>,
) -> Element<'a, GalleryIntent> {
    column![variant_label(label, props), content]
        .spacing(12.0)
        .into()
}

fn with_caption<'a>(
    content: Element<'a, GalleryIntent>,
    caption: &'a str,
    props: ComponentGridProps<'a>,
) -> Element<'a, GalleryIntent> {
    column![content, variant_label(caption, props)]
        .spacing(8.0)
        .align_x(alignment::Horizontal::Center)
        .into()
}

fn variant_label<'a>(
    label: &'a str,
    props: ComponentGridProps<'a>,
) -> Element<'a, GalleryIntent> {
    text(label)
        .size(VARIANT_LABEL_SIZE)
        .font(props.fonts.code.font_type)
        .color(props.theme.palette().ink_alpha(ink::FAINT))
        .into()
}
