use super::model::{
    ComponentKind, DialogKind, PillTab, PreferenceSwitch, UnderlineTab,
};

/// Intent events handled by the component gallery.
#[derive(Debug, Clone)]
pub(crate) enum GalleryIntent {
    /// A card header was pressed.
    CardToggled(ComponentKind),
    /// The switch on the collapsed switch card changed.
    PreviewSwitchToggled(bool),
    PreferenceToggled(PreferenceSwitch, bool),
    PillTabSelected(PillTab),
    UnderlineTabSelected(UnderlineTab),
    InputChanged(String),
    SearchChanged(String),
    /// A sample button was pressed; carries its variant label.
    SamplePressed(&'static str),
    DialogOpened(DialogKind),
    DialogDismissed,
}

/// Effect events produced by the gallery reducer.
#[derive(Debug, Clone)]
pub(crate) enum GalleryEffect {
    /// The reduced motion preference changed.
    ReducedMotionChanged(bool),
}

/// Gallery event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum GalleryEvent {
    /// Intent event reduced by the gallery widget.
    Intent(GalleryIntent),
    /// External effect orchestrated by app-level routing.
    Effect(GalleryEffect),
}
