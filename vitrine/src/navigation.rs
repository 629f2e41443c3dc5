use crate::shared::ui::icons;

/// A navigable page of the reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub(crate) enum Route {
    #[default]
    Overview,
    Components,
    Colors,
    Typography,
    Layout,
    Motion,
}

impl Route {
    pub(crate) const ALL: [Route; 6] = [
        Route::Overview,
        Route::Components,
        Route::Colors,
        Route::Typography,
        Route::Layout,
        Route::Motion,
    ];

    pub(crate) fn path(self) -> &'static str {
        match self {
            Route::Overview => "/",
            Route::Components => "/components",
            Route::Colors => "/colors",
            Route::Typography => "/typography",
            Route::Layout => "/layout",
            Route::Motion => "/motion",
        }
    }

    /// Resolve a location path. Trailing slashes are ignored.
    pub(crate) fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" if trimmed.starts_with('/') => "/",
            other => other,
        };
        Route::ALL
            .into_iter()
            .find(|route| route.path() == normalized)
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Route::Overview => "Overview",
            Route::Components => "Components",
            Route::Colors => "Colors",
            Route::Typography => "Typography",
            Route::Layout => "Layout",
            Route::Motion => "Motion",
        }
    }
}

/// A sidebar destination.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NavItem {
    pub(crate) label: &'static str,
    pub(crate) route: Route,
    pub(crate) icon: &'static [u8],
}

pub(crate) static NAV_ITEMS: [NavItem; 6] = [
    NavItem {
        label: "Overview",
        route: Route::Overview,
        icon: icons::NAV_OVERVIEW,
    },
    NavItem {
        label: "Components",
        route: Route::Components,
        icon: icons::NAV_COMPONENTS,
    },
    NavItem {
        label: "Colors",
        route: Route::Colors,
        icon: icons::NAV_COLORS,
    },
    NavItem {
        label: "Typography",
        route: Route::Typography,
        icon: icons::NAV_TYPOGRAPHY,
    },
    NavItem {
        label: "Layout",
        route: Route::Layout,
        icon: icons::NAV_LAYOUT,
    },
    NavItem {
        label: "Motion",
        route: Route::Motion,
        icon: icons::NAV_MOTION,
    },
];

/// In-process router holding the current location.
#[derive(Debug, Clone)]
pub(crate) struct Navigator {
    current: Route,
}

impl Navigator {
    pub(crate) fn new(initial: Route) -> Self {
        Self { current: initial }
    }

    pub(crate) fn current(&self) -> Route {
        self.current
    }

    /// Move to `route`, returning whether the location changed.
    pub(crate) fn navigate(&mut self, route: Route) -> bool {
        if self.current == route {
            return false;
        }
        self.current = route;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{NAV_ITEMS, Navigator, Route};

    #[test]
    fn given_known_paths_when_parsed_then_routes_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn given_trailing_slash_when_parsed_then_route_is_resolved() {
        assert_eq!(Route::from_path("/colors/"), Some(Route::Colors));
        assert_eq!(Route::from_path("/"), Some(Route::Overview));
    }

    #[test]
    fn given_unknown_path_when_parsed_then_no_route_is_returned() {
        assert_eq!(Route::from_path("/settings"), None);
        assert_eq!(Route::from_path(""), None);
        assert_eq!(Route::from_path("colors"), None);
    }

    #[test]
    fn given_nav_table_when_listed_then_every_route_appears_once() {
        let routes: Vec<Route> =
            NAV_ITEMS.iter().map(|item| item.route).collect();
        assert_eq!(routes, Route::ALL.to_vec());
        for item in NAV_ITEMS {
            assert_eq!(item.label, item.route.label());
        }
    }

    #[test]
    fn given_navigator_when_navigating_to_current_route_then_nothing_changes()
    {
        let mut navigator = Navigator::new(Route::Overview);

        assert!(!navigator.navigate(Route::Overview));
        assert!(navigator.navigate(Route::Components));
        assert_eq!(navigator.current(), Route::Components);
    }

    #[test]
    fn given_navigator_when_matching_items_then_only_current_route_matches() {
        let navigator = Navigator::new(Route::Layout);
        let active: Vec<&str> = NAV_ITEMS
            .iter()
            .filter(|item| item.route == navigator.current())
            .map(|item| item.label)
            .collect();
        assert_eq!(active, vec!["Layout"]);
    }
}
