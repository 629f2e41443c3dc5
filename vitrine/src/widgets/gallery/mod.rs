pub(crate) mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

use iced::Task;

pub(crate) use self::event::{GalleryEffect, GalleryEvent, GalleryIntent};
use self::model::GalleryViewModel;
use self::state::GalleryState;

/// Interactive component gallery shown on the components page.
pub(crate) struct GalleryWidget {
    state: GalleryState,
}

impl GalleryWidget {
    /// Create the gallery with the initial reduced motion preference.
    pub(crate) fn new(reduced_motion: bool) -> Self {
        Self {
            state: GalleryState::new(reduced_motion),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(&mut self, event: GalleryIntent) -> Task<GalleryEvent> {
        reducer::reduce(&mut self.state, event)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> GalleryViewModel<'_> {
        GalleryViewModel {
            expanded: self.state.expanded(),
            preview_switch: self.state.preview_switch(),
            animations: self.state.preference(model::PreferenceSwitch::Animations),
            glass_effects: self
                .state
                .preference(model::PreferenceSwitch::GlassEffects),
            reduced_motion: self
                .state
                .preference(model::PreferenceSwitch::ReducedMotion),
            pill_tab: self.state.pill_tab(),
            underline_tab: self.state.underline_tab(),
            input_value: self.state.input_value(),
            search_value: self.state.search_value(),
            dialog: self.state.dialog(),
            last_pressed: self.state.last_pressed(),
        }
    }
}
