use iced::Task;

use super::event::{SidebarEffect, SidebarEvent, SidebarIntent};
use super::state::SidebarState;

/// Reduce a sidebar intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut SidebarState,
    event: SidebarIntent,
) -> Task<SidebarEvent> {
    match event {
        SidebarIntent::ItemPressed(route) => {
            Task::done(SidebarEvent::Effect(SidebarEffect::SelectNavItem(
                route,
            )))
        },
        SidebarIntent::ToggleCollapse => {
            Task::done(SidebarEvent::Effect(SidebarEffect::ToggleCollapsed))
        },
        SidebarIntent::CloseSheet => {
            Task::done(SidebarEvent::Effect(SidebarEffect::CloseMobileSidebar))
        },
        SidebarIntent::PanelHovered(hovered) => {
            state.set_panel_hovered(hovered);
            Task::none()
        },
    }
}

#[cfg(test)]
mod tests {
    use crate::navigation::Route;
    use crate::widgets::sidebar::{SidebarIntent, SidebarWidget};

    #[test]
    fn given_hover_intents_when_reduced_then_hover_state_follows() {
        let mut widget = SidebarWidget::new();
        assert!(!widget.vm().panel_hovered);

        let _task = widget.reduce(SidebarIntent::PanelHovered(true));
        assert!(widget.vm().panel_hovered);

        let _task = widget.reduce(SidebarIntent::PanelHovered(false));
        assert!(!widget.vm().panel_hovered);
    }

    #[test]
    fn given_item_press_when_reduced_then_local_state_is_unchanged() {
        let mut widget = SidebarWidget::new();
        let _task = widget.reduce(SidebarIntent::PanelHovered(true));

        let _task = widget.reduce(SidebarIntent::ItemPressed(Route::Colors));
        let _task = widget.reduce(SidebarIntent::ToggleCollapse);

        assert!(widget.vm().panel_hovered);
    }
}
