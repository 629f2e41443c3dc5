use iced::Task;

use super::event::{TopNavEffect, TopNavEvent, TopNavIntent};
use super::state::TopNavState;

/// Reduce a top nav intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut TopNavState,
    event: TopNavIntent,
) -> Task<TopNavEvent> {
    match event {
        TopNavIntent::SectionPressed(section) => {
            state.set_active_section(section);
            Task::none()
        },
        TopNavIntent::MenuPressed => {
            Task::done(TopNavEvent::Effect(TopNavEffect::ToggleMobileSidebar))
        },
        TopNavIntent::InspectorPressed => {
            Task::done(TopNavEvent::Effect(TopNavEffect::ToggleDrawer))
        },
        TopNavIntent::ThemeTogglePressed => {
            Task::done(TopNavEvent::Effect(TopNavEffect::ToggleTheme))
        },
    }
}

#[cfg(test)]
mod tests {
    use crate::widgets::top_nav::model::NavSection;
    use crate::widgets::top_nav::{TopNavIntent, TopNavWidget};

    #[test]
    fn given_new_nav_when_inspected_then_system_section_is_active() {
        let widget = TopNavWidget::new();
        assert_eq!(widget.vm().active_section, NavSection::System);
    }

    #[test]
    fn given_section_press_when_reduced_then_section_becomes_active() {
        let mut widget = TopNavWidget::new();

        let _task = widget
            .reduce(TopNavIntent::SectionPressed(NavSection::Playground));

        assert_eq!(widget.vm().active_section, NavSection::Playground);
    }

    #[test]
    fn given_chrome_actions_when_reduced_then_active_section_is_kept() {
        let mut widget = TopNavWidget::new();
        let _task =
            widget.reduce(TopNavIntent::SectionPressed(NavSection::Tokens));

        let _task = widget.reduce(TopNavIntent::MenuPressed);
        let _task = widget.reduce(TopNavIntent::ThemeTogglePressed);
        let _task = widget.reduce(TopNavIntent::InspectorPressed);

        assert_eq!(widget.vm().active_section, NavSection::Tokens);
    }
}
