use iced::Task;

use super::event::{ShellEffect, ShellEvent, ShellIntent};
use super::state::ShellState;
use crate::widgets::viewport::ViewportMode;

/// Read-only context for shell reduction.
pub(crate) struct ShellCtx {
    pub(crate) viewport: ViewportMode,
}

/// Reduce a shell intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut ShellState,
    event: ShellIntent,
    ctx: &ShellCtx,
) -> Task<ShellEvent> {
    let effects = apply(state, event, ctx);
    Task::batch(
        effects
            .into_iter()
            .map(|effect| Task::done(ShellEvent::Effect(effect))),
    )
}

fn apply(
    state: &mut ShellState,
    event: ShellIntent,
    ctx: &ShellCtx,
) -> Vec<ShellEffect> {
    match event {
        ShellIntent::ToggleMobileSidebar => {
            state.toggle_mobile_sidebar();
            vec![]
        },
        ShellIntent::CloseMobileSidebar => {
            state.close_mobile_sidebar();
            vec![]
        },
        ShellIntent::ToggleSidebarCollapsed => {
            state.toggle_sidebar_collapsed();
            // The collapsed width only renders on desktop.
            if ctx.viewport.is_desktop {
                vec![ShellEffect::LayoutChanged]
            } else {
                vec![]
            }
        },
        ShellIntent::ToggleDrawer => {
            let open = !state.is_drawer_open();
            state.set_drawer_open(open);
            vec![ShellEffect::LayoutChanged]
        },
        ShellIntent::OpenDrawer => drawer_effects(state.set_drawer_open(true)),
        ShellIntent::CloseDrawer => {
            drawer_effects(state.set_drawer_open(false))
        },
        ShellIntent::SelectNavItem(route) => {
            state.set_active_nav_item(route);
            state.close_mobile_sidebar();
            vec![ShellEffect::Navigate(route)]
        },
        ShellIntent::SyncActiveRoute(route) => {
            state.set_active_nav_item(route);
            vec![]
        },
    }
}

fn drawer_effects(changed: bool) -> Vec<ShellEffect> {
    if changed {
        vec![ShellEffect::LayoutChanged]
    } else {
        vec![]
    }
}

#[cfg(test)]
mod tests {
    use super::{ShellCtx, apply};
    use crate::layout::ShellLayout;
    use crate::navigation::Route;
    use crate::widgets::shell::model::ShellViewModel;
    use crate::widgets::shell::state::ShellState;
    use crate::widgets::shell::{ShellEffect, ShellIntent, ShellWidget};
    use crate::widgets::viewport::{
        ViewportIntent, ViewportMode, ViewportWidget,
    };

    const DESKTOP: ShellCtx = ShellCtx {
        viewport: ViewportMode { is_desktop: true },
    };
    const MOBILE: ShellCtx = ShellCtx {
        viewport: ViewportMode { is_desktop: false },
    };

    fn vm_after(intents: &[ShellIntent], ctx: &ShellCtx) -> ShellViewModel {
        let mut widget = ShellWidget::new(Route::Overview);
        for intent in intents {
            let _task = widget.reduce(intent.clone(), ctx);
        }
        widget.vm()
    }

    #[test]
    fn given_new_shell_when_inspected_then_every_affordance_is_closed() {
        let vm = ShellWidget::new(Route::Colors).vm();

        assert!(!vm.mobile_sidebar_open);
        assert!(!vm.sidebar_collapsed);
        assert!(!vm.drawer_open);
        assert_eq!(vm.active_nav_item, Route::Colors);
    }

    #[test]
    fn given_toggle_sequences_when_reduced_then_sheet_state_follows_parity() {
        for count in 0..6 {
            let intents = vec![ShellIntent::ToggleMobileSidebar; count];
            let vm = vm_after(&intents, &MOBILE);
            assert_eq!(vm.mobile_sidebar_open, count % 2 == 1);
        }
    }

    #[test]
    fn given_any_sheet_state_when_closed_then_sheet_is_closed() {
        for prefix in [vec![], vec![ShellIntent::ToggleMobileSidebar]] {
            let mut intents = prefix;
            intents.push(ShellIntent::CloseMobileSidebar);
            assert!(!vm_after(&intents, &MOBILE).mobile_sidebar_open);
        }

        let twice = [
            ShellIntent::CloseMobileSidebar,
            ShellIntent::CloseMobileSidebar,
        ];
        assert!(!vm_after(&twice, &MOBILE).mobile_sidebar_open);
    }

    #[test]
    fn given_navigation_state_when_drawer_toggles_then_navigation_is_untouched()
    {
        let setup = vec![
            ShellIntent::ToggleMobileSidebar,
            ShellIntent::ToggleSidebarCollapsed,
            ShellIntent::SyncActiveRoute(Route::Motion),
        ];
        let before = vm_after(&setup, &DESKTOP);

        for drawer_intent in [
            ShellIntent::ToggleDrawer,
            ShellIntent::OpenDrawer,
            ShellIntent::CloseDrawer,
        ] {
            let mut intents = setup.clone();
            intents.push(drawer_intent);
            let after = vm_after(&intents, &DESKTOP);

            assert_eq!(after.mobile_sidebar_open, before.mobile_sidebar_open);
            assert_eq!(after.sidebar_collapsed, before.sidebar_collapsed);
            assert_eq!(after.active_nav_item, before.active_nav_item);
        }
    }

    #[test]
    fn given_open_drawer_when_navigation_changes_then_drawer_stays_open() {
        let intents = [
            ShellIntent::OpenDrawer,
            ShellIntent::ToggleMobileSidebar,
            ShellIntent::SelectNavItem(Route::Colors),
            ShellIntent::ToggleSidebarCollapsed,
        ];
        assert!(vm_after(&intents, &MOBILE).drawer_open);
    }

    #[test]
    fn given_desktop_expanded_when_collapse_toggled_then_offset_drops_to_60() {
        let mut widget = ShellWidget::new(Route::Overview);
        let mode = ViewportMode { is_desktop: true };
        let before = ShellLayout::compute(&widget.vm(), mode, 1280.0);
        assert_eq!(before.content_offset, 220.0);

        let _task = widget.reduce(ShellIntent::ToggleSidebarCollapsed, &DESKTOP);

        let vm = widget.vm();
        let after = ShellLayout::compute(&vm, mode, 1280.0);
        assert!(vm.sidebar_collapsed);
        assert_eq!(after.content_offset, 60.0);
    }

    #[test]
    fn given_mobile_sheet_open_when_item_selected_then_route_set_and_sheet_closed()
     {
        let mut state = ShellState::new(Route::Overview);
        let _ = apply(&mut state, ShellIntent::ToggleMobileSidebar, &MOBILE);
        assert!(state.is_mobile_sidebar_open());

        let effects = apply(
            &mut state,
            ShellIntent::SelectNavItem(Route::Components),
            &MOBILE,
        );

        assert_eq!(state.active_nav_item().path(), "/components");
        assert!(!state.is_mobile_sidebar_open());
        assert!(matches!(
            effects.as_slice(),
            [ShellEffect::Navigate(Route::Components)]
        ));
    }

    #[test]
    fn given_open_sheet_and_collapsed_sidebar_when_viewport_narrows_then_mobile_sheet_is_the_affordance()
     {
        let mut viewport = ViewportWidget::new(1024.0);
        let mut shell = ShellWidget::new(Route::Overview);
        let _task = viewport.reduce(ViewportIntent::Measured(1200.0));
        let _task = shell.reduce(ShellIntent::ToggleSidebarCollapsed, &DESKTOP);
        let _task = shell.reduce(ShellIntent::ToggleMobileSidebar, &DESKTOP);

        let desktop =
            ShellLayout::compute(&shell.vm(), viewport.mode(), 1200.0);
        assert!(desktop.desktop_sidebar_visible);
        assert!(!desktop.mobile_sheet_visible);

        let _task = viewport.reduce(ViewportIntent::Measured(800.0));

        assert!(!viewport.mode().is_desktop);
        let vm = shell.vm();
        assert!(vm.sidebar_collapsed);
        let mobile = ShellLayout::compute(&vm, viewport.mode(), 800.0);
        assert!(!mobile.desktop_sidebar_visible);
        assert!(mobile.mobile_sheet_visible);
        assert_eq!(mobile.content_offset, 0.0);
    }

    #[test]
    fn given_mobile_mode_when_collapse_toggled_then_no_layout_change_is_emitted()
    {
        let mut state = ShellState::new(Route::Overview);

        let mobile =
            apply(&mut state, ShellIntent::ToggleSidebarCollapsed, &MOBILE);
        assert!(mobile.is_empty());
        assert!(state.is_sidebar_collapsed());

        let desktop =
            apply(&mut state, ShellIntent::ToggleSidebarCollapsed, &DESKTOP);
        assert!(matches!(desktop.as_slice(), [ShellEffect::LayoutChanged]));
    }

    #[test]
    fn given_closed_drawer_when_closed_again_then_no_effect_is_emitted() {
        let mut state = ShellState::new(Route::Overview);

        assert!(apply(&mut state, ShellIntent::CloseDrawer, &DESKTOP).is_empty());
        assert_eq!(
            apply(&mut state, ShellIntent::OpenDrawer, &DESKTOP).len(),
            1
        );
        assert!(apply(&mut state, ShellIntent::OpenDrawer, &DESKTOP).is_empty());
    }

    #[test]
    fn given_route_sync_when_reduced_then_no_navigation_is_requested() {
        let mut state = ShellState::new(Route::Overview);

        let effects = apply(
            &mut state,
            ShellIntent::SyncActiveRoute(Route::Components),
            &DESKTOP,
        );

        assert!(effects.is_empty());
        assert_eq!(state.active_nav_item(), Route::Components);
    }
}
