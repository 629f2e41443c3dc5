/// Components shown as cards in the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum ComponentKind {
    Button,
    Switch,
    Tabs,
    Input,
    Dialog,
    Tooltip,
    Avatar,
    Badge,
}

impl ComponentKind {
    pub(crate) const ALL: [ComponentKind; 8] = [
        ComponentKind::Button,
        ComponentKind::Switch,
        ComponentKind::Tabs,
        ComponentKind::Input,
        ComponentKind::Dialog,
        ComponentKind::Tooltip,
        ComponentKind::Avatar,
        ComponentKind::Badge,
    ];

    pub(crate) fn name(self) -> &'static str {
        match self {
            ComponentKind::Button => "Button",
            ComponentKind::Switch => "Switch",
            ComponentKind::Tabs => "Tabs",
            ComponentKind::Input => "Input",
            ComponentKind::Dialog => "Dialog",
            ComponentKind::Tooltip => "Tooltip",
            ComponentKind::Avatar => "Avatar",
            ComponentKind::Badge => "Badge",
        }
    }

    /// Whether the card has a variant list to expand into.
    pub(crate) fn is_expandable(self) -> bool {
        !matches!(self, ComponentKind::Badge)
    }

    /// Whether the card spans the full grid width.
    pub(crate) fn is_full_width(self) -> bool {
        matches!(self, ComponentKind::Badge)
    }
}

/// Preference rows of the expanded switch card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PreferenceSwitch {
    Animations,
    GlassEffects,
    ReducedMotion,
}

impl PreferenceSwitch {
    pub(crate) const ALL: [PreferenceSwitch; 3] = [
        PreferenceSwitch::Animations,
        PreferenceSwitch::GlassEffects,
        PreferenceSwitch::ReducedMotion,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            PreferenceSwitch::Animations => "Animations",
            PreferenceSwitch::GlassEffects => "Glass effects",
            PreferenceSwitch::ReducedMotion => "Reduced motion",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum PillTab {
    #[default]
    Design,
    Code,
    Preview,
}

impl PillTab {
    pub(crate) const ALL: [PillTab; 3] =
        [PillTab::Design, PillTab::Code, PillTab::Preview];

    pub(crate) fn label(self) -> &'static str {
        match self {
            PillTab::Design => "Design",
            PillTab::Code => "Code",
            PillTab::Preview => "Preview",
        }
    }

    pub(crate) fn caption(self) -> &'static str {
        match self {
            PillTab::Design => "Design tokens and visual properties",
            PillTab::Code => "Implementation and code examples",
            PillTab::Preview => "Live component preview",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum UnderlineTab {
    #[default]
    Overview,
    Props,
    Examples,
}

impl UnderlineTab {
    pub(crate) const ALL: [UnderlineTab; 3] = [
        UnderlineTab::Overview,
        UnderlineTab::Props,
        UnderlineTab::Examples,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            UnderlineTab::Overview => "Overview",
            UnderlineTab::Props => "Props",
            UnderlineTab::Examples => "Examples",
        }
    }

    pub(crate) fn caption(self) -> &'static str {
        match self {
            UnderlineTab::Overview => "Component overview and usage",
            UnderlineTab::Props => "Available props and configuration",
            UnderlineTab::Examples => "Usage examples and patterns",
        }
    }
}

/// Dialogs that can be opened from the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DialogKind {
    /// Opened from the collapsed dialog card.
    Example,
    Confirm,
    Simple,
}

impl DialogKind {
    pub(crate) fn title(self) -> &'static str {
        match self {
            DialogKind::Example => "Example Dialog",
            DialogKind::Confirm => "Confirm Action",
            DialogKind::Simple => "Settings saved",
        }
    }

    pub(crate) fn description(self) -> &'static str {
        match self {
            DialogKind::Example => {
                "Glass morphism overlay with spring animation."
            },
            DialogKind::Confirm => {
                "This action cannot be undone. Are you sure you want to continue?"
            },
            DialogKind::Simple => {
                "Your preferences have been updated successfully."
            },
        }
    }

    /// Whether the dialog offers cancel and confirm actions.
    pub(crate) fn has_actions(self) -> bool {
        matches!(self, DialogKind::Confirm)
    }
}

/// Read-only snapshot of the gallery for rendering.
#[derive(Debug, Clone, Copy)]
pub(crate) struct GalleryViewModel<'a> {
    pub(crate) expanded: Option<ComponentKind>,
    pub(crate) preview_switch: bool,
    pub(crate) animations: bool,
    pub(crate) glass_effects: bool,
    pub(crate) reduced_motion: bool,
    pub(crate) pill_tab: PillTab,
    pub(crate) underline_tab: UnderlineTab,
    pub(crate) input_value: &'a str,
    pub(crate) search_value: &'a str,
    pub(crate) dialog: Option<DialogKind>,
    pub(crate) last_pressed: Option<&'static str>,
}

impl GalleryViewModel<'_> {
    pub(crate) fn preference(&self, switch: PreferenceSwitch) -> bool {
        match switch {
            PreferenceSwitch::Animations => self.animations,
            PreferenceSwitch::GlassEffects => self.glass_effects,
            PreferenceSwitch::ReducedMotion => self.reduced_motion,
        }
    }
}
