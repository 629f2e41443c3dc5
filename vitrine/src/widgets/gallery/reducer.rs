use iced::Task;

use super::event::{GalleryEffect, GalleryEvent, GalleryIntent};
use super::model::PreferenceSwitch;
use super::state::GalleryState;

/// Reduce a gallery intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut GalleryState,
    event: GalleryIntent,
) -> Task<GalleryEvent> {
    match apply(state, event) {
        Some(effect) => Task::done(GalleryEvent::Effect(effect)),
        None => Task::none(),
    }
}

fn apply(state: &mut GalleryState, event: GalleryIntent) -> Option<GalleryEffect> {
    match event {
        GalleryIntent::CardToggled(kind) => {
            if kind.is_expandable() {
                state.toggle_expanded(kind);
            }
            None
        },
        GalleryIntent::PreviewSwitchToggled(value) => {
            state.set_preview_switch(value);
            None
        },
        GalleryIntent::PreferenceToggled(switch, value) => {
            let changed = state.set_preference(switch, value);
            if changed && switch == PreferenceSwitch::ReducedMotion {
                Some(GalleryEffect::ReducedMotionChanged(value))
            } else {
                None
            }
        },
        GalleryIntent::PillTabSelected(tab) => {
            state.set_pill_tab(tab);
            None
        },
        GalleryIntent::UnderlineTabSelected(tab) => {
            state.set_underline_tab(tab);
            None
        },
        GalleryIntent::InputChanged(value) => {
            state.set_input_value(value);
            None
        },
        GalleryIntent::SearchChanged(value) => {
            state.set_search_value(value);
            None
        },
        GalleryIntent::SamplePressed(label) => {
            state.set_last_pressed(label);
            None
        },
        GalleryIntent::DialogOpened(kind) => {
            state.set_dialog(Some(kind));
            None
        },
        GalleryIntent::DialogDismissed => {
            state.set_dialog(None);
            None
        },
    }
}

#[cfg(test)]
mod tests {
    use super::apply;
    use crate::widgets::gallery::event::{GalleryEffect, GalleryIntent};
    use crate::widgets::gallery::model::{
        ComponentKind, DialogKind, PillTab, PreferenceSwitch, UnderlineTab,
    };
    use crate::widgets::gallery::state::GalleryState;
    use crate::widgets::gallery::GalleryWidget;

    #[test]
    fn given_new_gallery_when_inspected_then_defaults_match_reference() {
        let widget = GalleryWidget::new(false);
        let vm = widget.vm();

        assert_eq!(vm.expanded, None);
        assert!(!vm.preview_switch);
        assert!(vm.animations);
        assert!(vm.glass_effects);
        assert!(!vm.reduced_motion);
        assert_eq!(vm.pill_tab, PillTab::Design);
        assert_eq!(vm.underline_tab, UnderlineTab::Overview);
        assert_eq!(vm.dialog, None);
    }

    #[test]
    fn given_expanded_card_when_other_card_toggled_then_only_one_is_expanded() {
        let mut state = GalleryState::new(false);

        let _ = apply(&mut state, GalleryIntent::CardToggled(ComponentKind::Button));
        assert_eq!(state.expanded(), Some(ComponentKind::Button));

        let _ = apply(&mut state, GalleryIntent::CardToggled(ComponentKind::Tabs));
        assert_eq!(state.expanded(), Some(ComponentKind::Tabs));

        let _ = apply(&mut state, GalleryIntent::CardToggled(ComponentKind::Tabs));
        assert_eq!(state.expanded(), None);
    }

    #[test]
    fn given_badge_card_when_toggled_then_expansion_is_unchanged() {
        let mut state = GalleryState::new(false);
        let _ = apply(&mut state, GalleryIntent::CardToggled(ComponentKind::Input));

        let _ = apply(&mut state, GalleryIntent::CardToggled(ComponentKind::Badge));

        assert_eq!(state.expanded(), Some(ComponentKind::Input));
    }

    #[test]
    fn given_reduced_motion_switch_when_changed_then_effect_is_emitted_once() {
        let mut state = GalleryState::new(false);
        let toggle = |value| {
            GalleryIntent::PreferenceToggled(PreferenceSwitch::ReducedMotion, value)
        };

        let first = apply(&mut state, toggle(true));
        assert!(matches!(first, Some(GalleryEffect::ReducedMotionChanged(true))));

        assert!(apply(&mut state, toggle(true)).is_none());
        assert!(state.preference(PreferenceSwitch::ReducedMotion));
    }

    #[test]
    fn given_other_preferences_when_changed_then_no_effect_is_emitted() {
        let mut state = GalleryState::new(false);

        let effect = apply(
            &mut state,
            GalleryIntent::PreferenceToggled(PreferenceSwitch::GlassEffects, false),
        );

        assert!(effect.is_none());
        assert!(!state.preference(PreferenceSwitch::GlassEffects));
        assert!(state.preference(PreferenceSwitch::Animations));
    }

    #[test]
    fn given_text_inputs_when_changed_then_values_are_kept_separately() {
        let mut widget = GalleryWidget::new(true);

        let _task = widget.reduce(GalleryIntent::InputChanged(String::from("42")));
        let _task =
            widget.reduce(GalleryIntent::SearchChanged(String::from("tabs")));

        let vm = widget.vm();
        assert_eq!(vm.input_value, "42");
        assert_eq!(vm.search_value, "tabs");
        assert!(vm.reduced_motion);
    }

    #[test]
    fn given_open_dialog_when_dismissed_then_no_dialog_is_shown() {
        let mut state = GalleryState::new(false);

        let _ = apply(&mut state, GalleryIntent::DialogOpened(DialogKind::Confirm));
        assert_eq!(state.dialog(), Some(DialogKind::Confirm));

        let _ = apply(&mut state, GalleryIntent::DialogDismissed);
        assert_eq!(state.dialog(), None);
    }

    #[test]
    fn given_tab_selection_when_reduced_then_each_tab_list_is_independent() {
        let mut state = GalleryState::new(false);

        let _ = apply(&mut state, GalleryIntent::PillTabSelected(PillTab::Code));
        let _ = apply(
            &mut state,
            GalleryIntent::UnderlineTabSelected(UnderlineTab::Examples),
        );

        assert_eq!(state.pill_tab(), PillTab::Code);
        assert_eq!(state.underline_tab(), UnderlineTab::Examples);
    }

    #[test]
    fn given_sample_press_when_reduced_then_label_is_recorded() {
        let mut state = GalleryState::new(false);

        let _ = apply(&mut state, GalleryIntent::SamplePressed("ghost"));

        assert_eq!(state.last_pressed(), Some("ghost"));
    }
}
