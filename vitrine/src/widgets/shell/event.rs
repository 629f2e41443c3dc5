use crate::navigation::Route;

/// Intent events handled by the shell coordinator.
#[derive(Debug, Clone)]
pub(crate) enum ShellIntent {
    ToggleMobileSidebar,
    CloseMobileSidebar,
    ToggleSidebarCollapsed,
    ToggleDrawer,
    OpenDrawer,
    CloseDrawer,
    /// A navigation item was activated in the sidebar or sheet.
    SelectNavItem(Route),
    /// The location changed outside the sidebar.
    SyncActiveRoute(Route),
}

/// Effect events produced by the shell reducer.
#[derive(Debug, Clone)]
pub(crate) enum ShellEffect {
    /// Ask the route boundary to move to a route.
    Navigate(Route),
    /// Rendered geometry changed and transitions must be retargeted.
    LayoutChanged,
}

/// Shell event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum ShellEvent {
    /// Intent event reduced by the shell widget.
    Intent(ShellIntent),
    /// External effect orchestrated by app-level routing.
    Effect(ShellEffect),
}
