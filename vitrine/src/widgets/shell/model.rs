use crate::navigation::Route;

/// Read-only snapshot of the shell disclosure state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct ShellViewModel {
    pub(crate) mobile_sidebar_open: bool,
    pub(crate) sidebar_collapsed: bool,
    pub(crate) drawer_open: bool,
    pub(crate) active_nav_item: Route,
}
