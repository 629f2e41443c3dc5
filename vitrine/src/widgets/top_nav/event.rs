use super::model::NavSection;

/// Intent events handled by the floating nav.
#[derive(Debug, Clone)]
pub(crate) enum TopNavIntent {
    SectionPressed(NavSection),
    MenuPressed,
    InspectorPressed,
    ThemeTogglePressed,
}

/// Effect events produced by the floating nav reducer.
#[derive(Debug, Clone)]
pub(crate) enum TopNavEffect {
    ToggleMobileSidebar,
    ToggleDrawer,
    ToggleTheme,
}

/// Top nav event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum TopNavEvent {
    /// Intent event reduced by the top nav widget.
    Intent(TopNavIntent),
    /// External effect orchestrated by app-level routing.
    Effect(TopNavEffect),
}
