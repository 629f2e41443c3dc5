use crate::navigation::Route;

/// Disclosure flags of the app frame and the last selected route.
#[derive(Debug)]
pub(super) struct ShellState {
    mobile_sidebar_open: bool,
    sidebar_collapsed: bool,
    drawer_open: bool,
    active_nav_item: Route,
}

impl ShellState {
    pub(super) fn new(active_nav_item: Route) -> Self {
        Self {
            mobile_sidebar_open: false,
            sidebar_collapsed: false,
            drawer_open: false,
            active_nav_item,
        }
    }

    pub(super) fn is_mobile_sidebar_open(&self) -> bool {
        self.mobile_sidebar_open
    }

    pub(super) fn is_sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed
    }

    pub(super) fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    pub(super) fn active_nav_item(&self) -> Route {
        self.active_nav_item
    }

    pub(super) fn toggle_mobile_sidebar(&mut self) {
        self.mobile_sidebar_open = !self.mobile_sidebar_open;
    }

    pub(super) fn close_mobile_sidebar(&mut self) {
        self.mobile_sidebar_open = false;
    }

    pub(super) fn toggle_sidebar_collapsed(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    /// Set drawer visibility and return whether it changed.
    pub(super) fn set_drawer_open(&mut self, open: bool) -> bool {
        let changed = self.drawer_open != open;
        self.drawer_open = open;
        changed
    }

    pub(super) fn set_active_nav_item(&mut self, route: Route) {
        self.active_nav_item = route;
    }
}
