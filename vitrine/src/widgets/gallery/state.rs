use super::model::{
    ComponentKind, DialogKind, PillTab, PreferenceSwitch, UnderlineTab,
};

/// Local state of the component gallery.
#[derive(Debug)]
pub(super) struct GalleryState {
    expanded: Option<ComponentKind>,
    preview_switch: bool,
    animations: bool,
    glass_effects: bool,
    reduced_motion: bool,
    pill_tab: PillTab,
    underline_tab: UnderlineTab,
    input_value: String,
    search_value: String,
    dialog: Option<DialogKind>,
    last_pressed: Option<&'static str>,
}

impl GalleryState {
    pub(super) fn new(reduced_motion: bool) -> Self {
        Self {
            expanded: None,
            preview_switch: false,
            animations: true,
            glass_effects: true,
            reduced_motion,
            pill_tab: PillTab::default(),
            underline_tab: UnderlineTab::default(),
            input_value: String::new(),
            search_value: String::new(),
            dialog: None,
            last_pressed: None,
        }
    }

    pub(super) fn expanded(&self) -> Option<ComponentKind> {
        self.expanded
    }

    /// Expand `kind`, or collapse it when already expanded.
    pub(super) fn toggle_expanded(&mut self, kind: ComponentKind) {
        self.expanded = if self.expanded == Some(kind) {
            None
        } else {
            Some(kind)
        };
    }

    pub(super) fn preview_switch(&self) -> bool {
        self.preview_switch
    }

    pub(super) fn set_preview_switch(&mut self, value: bool) {
        self.preview_switch = value;
    }

    pub(super) fn preference(&self, switch: PreferenceSwitch) -> bool {
        match switch {
            PreferenceSwitch::Animations => self.animations,
            PreferenceSwitch::GlassEffects => self.glass_effects,
            PreferenceSwitch::ReducedMotion => self.reduced_motion,
        }
    }

    /// Store a preference and return whether it changed.
    pub(super) fn set_preference(
        &mut self,
        switch: PreferenceSwitch,
        value: bool,
    ) -> bool {
        let slot = match switch {
            PreferenceSwitch::Animations => &mut self.animations,
            PreferenceSwitch::GlassEffects => &mut self.glass_effects,
            PreferenceSwitch::ReducedMotion => &mut self.reduced_motion,
        };
        let changed = *slot != value;
        *slot = value;
        changed
    }

    pub(super) fn pill_tab(&self) -> PillTab {
        self.pill_tab
    }

    pub(super) fn set_pill_tab(&mut self, tab: PillTab) {
        self.pill_tab = tab;
    }

    pub(super) fn underline_tab(&self) -> UnderlineTab {
        self.underline_tab
    }

    pub(super) fn set_underline_tab(&mut self, tab: UnderlineTab) {
        self.underline_tab = tab;
    }

    pub(super) fn input_value(&self) -> &str {
        &self.input_value
    }

    pub(super) fn set_input_value(&mut self, value: String) {
        self.input_value = value;
    }

    pub(super) fn search_value(&self) -> &str {
        &self.search_value
    }

    pub(super) fn set_search_value(&mut self, value: String) {
        self.search_value = value;
    }

    pub(super) fn dialog(&self) -> Option<DialogKind> {
        self.dialog
    }

    pub(super) fn set_dialog(&mut self, dialog: Option<DialogKind>) {
        self.dialog = dialog;
    }

    pub(super) fn last_pressed(&self) -> Option<&'static str> {
        self.last_pressed
    }

    pub(super) fn set_last_pressed(&mut self, label: &'static str) {
        self.last_pressed = Some(label);
    }
}
