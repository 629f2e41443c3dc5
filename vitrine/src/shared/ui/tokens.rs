//! Design tokens.
//!
//! Every value the presentation layer needs from the design language lives
//! here as typed constants: radii, easing curves, durations, panel metrics,
//! palettes and the reference tables rendered by the token pages.

use std::time::Duration;

use crate::motion::CubicBezier;

/// Border radius scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RadiusToken {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Pill,
}

impl RadiusToken {
    pub(crate) const ALL: [RadiusToken; 6] = [
        RadiusToken::Xs,
        RadiusToken::Sm,
        RadiusToken::Md,
        RadiusToken::Lg,
        RadiusToken::Xl,
        RadiusToken::Pill,
    ];

    pub(crate) fn px(self) -> f32 {
        match self {
            RadiusToken::Xs => 6.0,
            RadiusToken::Sm => 8.0,
            RadiusToken::Md => 10.0,
            RadiusToken::Lg => 12.0,
            RadiusToken::Xl => 16.0,
            RadiusToken::Pill => 9999.0,
        }
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            RadiusToken::Xs => "xs",
            RadiusToken::Sm => "sm",
            RadiusToken::Md => "md",
            RadiusToken::Lg => "lg",
            RadiusToken::Xl => "xl",
            RadiusToken::Pill => "pill",
        }
    }

    pub(crate) fn variable(self) -> &'static str {
        match self {
            RadiusToken::Xs => "--radius-xs",
            RadiusToken::Sm => "--radius-sm",
            RadiusToken::Md => "--radius-md",
            RadiusToken::Lg => "--radius-lg",
            RadiusToken::Xl => "--radius-xl",
            RadiusToken::Pill => "--radius-pill",
        }
    }

    pub(crate) fn usage(self) -> &'static str {
        match self {
            RadiusToken::Xs => "Badges, small chips",
            RadiusToken::Sm => "Buttons, nav items, inputs",
            RadiusToken::Md => "Cards, form fields",
            RadiusToken::Lg => "Panels, containers, sections",
            RadiusToken::Xl => "Floating nav pill, large cards",
            RadiusToken::Pill => "Pills, fully rounded elements",
        }
    }
}

/// Named timing curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EasingToken {
    Spring,
    Panel,
    Switch,
}

impl EasingToken {
    pub(crate) const ALL: [EasingToken; 3] =
        [EasingToken::Spring, EasingToken::Panel, EasingToken::Switch];

    pub(crate) fn curve(self) -> CubicBezier {
        match self {
            EasingToken::Spring => CubicBezier::new(0.22, 1.0, 0.36, 1.0),
            EasingToken::Panel => CubicBezier::new(0.32, 0.72, 0.0, 1.0),
            EasingToken::Switch => CubicBezier::new(0.34, 1.56, 0.64, 1.0),
        }
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            EasingToken::Spring => "Spring",
            EasingToken::Panel => "Panel",
            EasingToken::Switch => "Switch",
        }
    }

    pub(crate) fn variable(self) -> &'static str {
        match self {
            EasingToken::Spring => "--ease-spring",
            EasingToken::Panel => "--ease-panel",
            EasingToken::Switch => "--ease-switch",
        }
    }

    pub(crate) fn usage(self) -> &'static str {
        match self {
            EasingToken::Spring => {
                "Interactive elements: buttons, links, tab switches, hover states"
            },
            EasingToken::Panel => {
                "Panels: sidebar collapse, drawer slide, layout transitions"
            },
            EasingToken::Switch => {
                "Toggle controls: overshoot bounce for tactile feedback"
            },
        }
    }
}

/// Named transition durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DurationToken {
    Hover,
    Enter,
    Exit,
}

impl DurationToken {
    pub(crate) const ALL: [DurationToken; 3] =
        [DurationToken::Hover, DurationToken::Enter, DurationToken::Exit];

    pub(crate) fn duration(self) -> Duration {
        match self {
            DurationToken::Hover => Duration::from_millis(200),
            DurationToken::Enter => Duration::from_millis(300),
            DurationToken::Exit => Duration::from_millis(210),
        }
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            DurationToken::Hover => "Hover",
            DurationToken::Enter => "Enter",
            DurationToken::Exit => "Exit",
        }
    }

    pub(crate) fn variable(self) -> &'static str {
        match self {
            DurationToken::Hover => "--duration-hover",
            DurationToken::Enter => "--duration-enter",
            DurationToken::Exit => "--duration-exit",
        }
    }

    pub(crate) fn usage(self) -> &'static str {
        match self {
            DurationToken::Hover => "Color/opacity changes on hover",
            DurationToken::Enter => "Elements appearing, panels opening",
            DurationToken::Exit => "Elements leaving, panels closing",
        }
    }
}

/// Shell panel metrics in logical pixels.
pub(crate) mod panel {
    pub(crate) const SIDEBAR_WIDTH: f32 = 220.0;
    pub(crate) const SIDEBAR_COLLAPSED_WIDTH: f32 = 60.0;
    pub(crate) const PANEL_INSET: f32 = 10.0;
    pub(crate) const DRAWER_WIDTH: f32 = 380.0;
    pub(crate) const MOBILE_SHEET_WIDTH: f32 = 260.0;
    pub(crate) const CONTENT_MAX_WIDTH: f32 = 768.0;
    pub(crate) const DESKTOP_BREAKPOINT: f32 = 1024.0;
    pub(crate) const NAV_TOP_OFFSET: f32 = 16.0;
}

/// Glass surface parameters.
pub(crate) mod glass {
    pub(crate) const SURFACE_ALPHA: f32 = 0.85;
    pub(crate) const OVERLAY_ALPHA: f32 = 0.5;
}

/// Ink opacity steps used for borders, tints and muted text.
pub(crate) mod ink {
    pub(crate) const BORDER: f32 = 0.06;
    pub(crate) const BORDER_STRONG: f32 = 0.08;
    pub(crate) const TINT: f32 = 0.02;
    pub(crate) const HOVER: f32 = 0.04;
    pub(crate) const ACTIVE: f32 = 0.08;
    pub(crate) const SELECTED: f32 = 0.1;
    pub(crate) const FAINT: f32 = 0.2;
    pub(crate) const MUTED: f32 = 0.3;
    pub(crate) const SUBTLE: f32 = 0.5;
    pub(crate) const STRONG: f32 = 0.7;
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct NeutralStep {
    pub(crate) hex: &'static str,
    pub(crate) variable: &'static str,
    pub(crate) usage: &'static str,
}

pub(crate) const NEUTRAL_PALETTE: [NeutralStep; 10] = [
    NeutralStep {
        hex: "#0f0e0d",
        variable: "--neutral-1",
        usage: "Background, darkest surface",
    },
    NeutralStep {
        hex: "#1a1918",
        variable: "--neutral-2",
        usage: "Elevated surface, cards",
    },
    NeutralStep {
        hex: "#262524",
        variable: "--neutral-3",
        usage: "Subtle borders, dividers",
    },
    NeutralStep {
        hex: "#333231",
        variable: "--neutral-4",
        usage: "Hover backgrounds",
    },
    NeutralStep {
        hex: "#444342",
        variable: "--neutral-5",
        usage: "Active backgrounds, pressed",
    },
    NeutralStep {
        hex: "#6b6b6b",
        variable: "--neutral-6",
        usage: "Tertiary text, placeholders",
    },
    NeutralStep {
        hex: "#8a8a8a",
        variable: "--neutral-7",
        usage: "Secondary text",
    },
    NeutralStep {
        hex: "#b3b3b3",
        variable: "--neutral-8",
        usage: "Body text (light contexts)",
    },
    NeutralStep {
        hex: "#d9d9d9",
        variable: "--neutral-9",
        usage: "Emphasized text",
    },
    NeutralStep {
        hex: "#ffffff",
        variable: "--neutral-10",
        usage: "Primary text, headings",
    },
];

/// A documented token row: CSS-style variable, value and description.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TokenRow {
    pub(crate) variable: &'static str,
    pub(crate) value: &'static str,
    pub(crate) description: &'static str,
}

pub(crate) const GLASS_TOKENS: [TokenRow; 5] = [
    TokenRow {
        variable: "--surface-glass",
        value: "rgba(17, 17, 17, 0.85)",
        description: "Glass panel background",
    },
    TokenRow {
        variable: "--glass-blur",
        value: "20px",
        description: "Backdrop blur amount",
    },
    TokenRow {
        variable: "--glass-saturate",
        value: "180%",
        description: "Backdrop color saturation",
    },
    TokenRow {
        variable: "--glass-surface-alpha",
        value: "0.85",
        description: "Surface transparency",
    },
    TokenRow {
        variable: "--overlay-dark",
        value: "rgba(0, 0, 0, 0.5)",
        description: "Modal/drawer overlay",
    },
];

pub(crate) const SHADOW_TOKENS: [TokenRow; 3] = [
    TokenRow {
        variable: "--shadow-glass",
        value: "0 8px 32px rgba(0,0,0,0.4), inset 0 1px 0 rgba(255,255,255,0.06)",
        description: "Glass panels (nav, drawer)",
    },
    TokenRow {
        variable: "--shadow-panel",
        value: "0 4px 24px rgba(0,0,0,0.12), 0 1px 4px rgba(0,0,0,0.08)",
        description: "Sidebar, floating panels",
    },
    TokenRow {
        variable: "--shadow-active",
        value: "0 2px 8px rgba(0,0,0,0.2)",
        description: "Active tab, pressed state",
    },
];

pub(crate) const SEMANTIC_TEXT: [TokenRow; 3] = [
    TokenRow {
        variable: "--text-primary",
        value: "#e8e8e8",
        description: "Headings, primary content",
    },
    TokenRow {
        variable: "--text-secondary",
        value: "var(--neutral-7)",
        description: "Supporting text, labels",
    },
    TokenRow {
        variable: "--text-tertiary",
        value: "var(--neutral-6)",
        description: "Muted text, placeholders",
    },
];

/// Status badge tones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StatusTone {
    Live,
    Draft,
    Deprecated,
    Beta,
    New,
}

impl StatusTone {
    pub(crate) const ALL: [StatusTone; 5] = [
        StatusTone::Live,
        StatusTone::Draft,
        StatusTone::Deprecated,
        StatusTone::Beta,
        StatusTone::New,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            StatusTone::Live => "Live",
            StatusTone::Draft => "Draft",
            StatusTone::Deprecated => "Deprecated",
            StatusTone::Beta => "Beta",
            StatusTone::New => "New",
        }
    }

    /// Hue of the tone; `None` renders with ink.
    pub(crate) fn hex(self) -> Option<&'static str> {
        match self {
            StatusTone::Live => Some("#34d399"),
            StatusTone::Draft => None,
            StatusTone::Deprecated => Some("#f87171"),
            StatusTone::Beta => Some("#c084fc"),
            StatusTone::New => Some("#facc15"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FontRole {
    Display,
    Body,
    Code,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct FontFamilyToken {
    pub(crate) name: &'static str,
    pub(crate) variable: &'static str,
    pub(crate) fallback: &'static str,
    pub(crate) usage: &'static str,
    pub(crate) specimen: &'static str,
    pub(crate) role: FontRole,
}

pub(crate) const FONT_FAMILIES: [FontFamilyToken; 3] = [
    FontFamilyToken {
        name: "EB Garamond",
        variable: "--font-display",
        fallback: "Georgia, 'Times New Roman', serif",
        usage: "Headings, hero text, display type",
        specimen: "Every pixel is a decision",
        role: FontRole::Display,
    },
    FontFamilyToken {
        name: "DM Sans",
        variable: "--font-body",
        fallback: "system-ui, -apple-system, sans-serif",
        usage: "Body text, labels, navigation, UI elements",
        specimen: "A system of restraint, motion, and glass.",
        role: FontRole::Body,
    },
    FontFamilyToken {
        name: "JetBrains Mono",
        variable: "--font-code",
        fallback: "'Courier New', monospace",
        usage: "Code, tokens, variable names, technical labels",
        specimen: "--ease-spring: cubic-bezier(0.22, 1, 0.36, 1);",
        role: FontRole::Code,
    },
];

/// A fluid heading size: `min` on narrow windows, `max` on wide ones.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HeadingToken {
    pub(crate) label: &'static str,
    pub(crate) min: f32,
    pub(crate) max: f32,
    pub(crate) role: FontRole,
    pub(crate) tracking: &'static str,
    pub(crate) bold: bool,
}

pub(crate) const HEADING_SCALE: [HeadingToken; 4] = [
    HeadingToken {
        label: "Hero",
        min: 36.0,
        max: 64.0,
        role: FontRole::Display,
        tracking: "-0.02em",
        bold: true,
    },
    HeadingToken {
        label: "Page Title",
        min: 28.0,
        max: 48.0,
        role: FontRole::Display,
        tracking: "-0.02em",
        bold: true,
    },
    HeadingToken {
        label: "Section",
        min: 20.0,
        max: 32.0,
        role: FontRole::Display,
        tracking: "-0.01em",
        bold: true,
    },
    HeadingToken {
        label: "Card Title",
        min: 14.0,
        max: 14.0,
        role: FontRole::Body,
        tracking: "0",
        bold: false,
    },
];

#[derive(Debug, Clone, Copy)]
pub(crate) struct TextStyleToken {
    pub(crate) label: &'static str,
    pub(crate) size: f32,
    pub(crate) line_height: f32,
    pub(crate) role: FontRole,
    pub(crate) alpha: f32,
}

pub(crate) const TEXT_STYLES: [TextStyleToken; 5] = [
    TextStyleToken {
        label: "Body",
        size: 15.0,
        line_height: 1.6,
        role: FontRole::Body,
        alpha: 0.42,
    },
    TextStyleToken {
        label: "Small",
        size: 13.0,
        line_height: 1.5,
        role: FontRole::Body,
        alpha: ink::SUBTLE,
    },
    TextStyleToken {
        label: "Eyebrow",
        size: 11.0,
        line_height: 1.0,
        role: FontRole::Code,
        alpha: ink::MUTED,
    },
    TextStyleToken {
        label: "Code",
        size: 12.0,
        line_height: 1.5,
        role: FontRole::Code,
        alpha: ink::STRONG,
    },
    TextStyleToken {
        label: "Caption",
        size: 10.0,
        line_height: 1.4,
        role: FontRole::Code,
        alpha: 0.25,
    },
];

/// Free-form reference row: label, value, note.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ReferenceRow {
    pub(crate) label: &'static str,
    pub(crate) value: &'static str,
    pub(crate) note: &'static str,
}

pub(crate) const PANEL_DIMENSIONS: [ReferenceRow; 6] = [
    ReferenceRow {
        label: "Sidebar (expanded)",
        value: "220px",
        note: "--sidebar-width",
    },
    ReferenceRow {
        label: "Sidebar (collapsed)",
        value: "60px",
        note: "--sidebar-collapsed-width",
    },
    ReferenceRow {
        label: "Panel inset",
        value: "10px",
        note: "--panel-inset",
    },
    ReferenceRow {
        label: "Right drawer",
        value: "380px",
        note: "fixed",
    },
    ReferenceRow {
        label: "Mobile sheet",
        value: "260px",
        note: "fixed",
    },
    ReferenceRow {
        label: "Max content width",
        value: "768px",
        note: "fixed",
    },
];

pub(crate) const SPACING_PATTERNS: [ReferenceRow; 8] = [
    ReferenceRow {
        label: "Between nav items",
        value: "2px",
        note: "Tight, items are grouped",
    },
    ReferenceRow {
        label: "Section padding",
        value: "32px",
        note: "Comfortable breathing room",
    },
    ReferenceRow {
        label: "Card internal padding",
        value: "20px-24px",
        note: "Content density",
    },
    ReferenceRow {
        label: "Between sections",
        value: "64px",
        note: "Clear visual separation",
    },
    ReferenceRow {
        label: "Page top padding",
        value: "80px",
        note: "Below floating nav clearance",
    },
    ReferenceRow {
        label: "Page bottom padding",
        value: "128px",
        note: "Generous scroll end",
    },
    ReferenceRow {
        label: "Floating panel inset",
        value: "10px",
        note: "Distance from viewport edge",
    },
    ReferenceRow {
        label: "Icon to label gap",
        value: "12px",
        note: "Standard icon-text pairing",
    },
];

pub(crate) const MOTION_PRINCIPLES: [ReferenceRow; 6] = [
    ReferenceRow {
        label: "Exit 30% faster than enter",
        value: "300ms / 210ms",
        note: "Users care about what is arriving, not what is leaving.",
    },
    ReferenceRow {
        label: "Spring easing for interactive elements",
        value: "--ease-spring",
        note: "Anything the user directly manipulates gets spring easing.",
    },
    ReferenceRow {
        label: "Panel easing for layout changes",
        value: "--ease-panel",
        note: "Sidebar collapse, drawer slide and content reflow.",
    },
    ReferenceRow {
        label: "150ms hover, 300ms modals",
        value: "--duration-hover",
        note: "Hover feedback is near-instant, larger transitions take time.",
    },
    ReferenceRow {
        label: "No easing on opacity-only transitions",
        value: "linear",
        note: "Pure fades use linear or ease-out; springs are for transforms.",
    },
    ReferenceRow {
        label: "Active state: scale(0.97)",
        value: "0.97",
        note: "Button press feedback, spring easing on release.",
    },
];

/// Summary rows shown in the inspector drawer.
pub(crate) const INSPECTOR_TOKENS: [ReferenceRow; 5] = [
    ReferenceRow {
        label: "border-radius",
        value: "6 / 8 / 10 / 12 / 16px",
        note: "",
    },
    ReferenceRow {
        label: "transition",
        value: "cubic-bezier(0.22, 1, 0.36, 1)",
        note: "",
    },
    ReferenceRow {
        label: "glass-blur",
        value: "20px",
        note: "",
    },
    ReferenceRow {
        label: "glass-saturate",
        value: "180%",
        note: "",
    },
    ReferenceRow {
        label: "surface-alpha",
        value: "0.85",
        note: "",
    },
];

pub(crate) const SURFACE_PATTERNS: [ReferenceRow; 5] = [
    ReferenceRow {
        label: "border ink 0.06",
        value: "ink::BORDER",
        note: "Default container border, barely visible",
    },
    ReferenceRow {
        label: "border ink 0.08",
        value: "ink::BORDER_STRONG",
        note: "Hover state or emphasized border",
    },
    ReferenceRow {
        label: "surface ink 0.02",
        value: "ink::TINT",
        note: "Subtle surface tint for containers",
    },
    ReferenceRow {
        label: "surface ink 0.04",
        value: "ink::HOVER",
        note: "Hover background for interactive items",
    },
    ReferenceRow {
        label: "surface ink 0.08",
        value: "ink::ACTIVE",
        note: "Active or selected item background",
    },
];

pub(crate) const TYPOGRAPHY_RULES: [ReferenceRow; 4] = [
    ReferenceRow {
        label: "Fluid headings.",
        value: "",
        note: "Heading sizes interpolate between their mobile and desktop \
               bounds. Never hardcode a heading size.",
    },
    ReferenceRow {
        label: "65ch max width for body text.",
        value: "",
        note: "Long-form content never exceeds 65 characters per line.",
    },
    ReferenceRow {
        label: "Tabular numbers on changing data.",
        value: "",
        note: "Counters, prices and timers use tabular figures to avoid \
               layout shift.",
    },
    ReferenceRow {
        label: "Code font for tokens and variables.",
        value: "",
        note: "Token names and technical identifiers render in the code \
               face at 11 to 12px.",
    },
];
