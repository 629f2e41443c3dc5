pub(crate) const NAV_OVERVIEW: &[u8] =
    include_bytes!("../../../assets/icons/layout-dashboard.svg");
pub(crate) const NAV_COMPONENTS: &[u8] =
    include_bytes!("../../../assets/icons/box.svg");
pub(crate) const NAV_COLORS: &[u8] =
    include_bytes!("../../../assets/icons/palette.svg");
pub(crate) const NAV_TYPOGRAPHY: &[u8] =
    include_bytes!("../../../assets/icons/type.svg");
pub(crate) const NAV_LAYOUT: &[u8] =
    include_bytes!("../../../assets/icons/layout-grid.svg");
pub(crate) const NAV_MOTION: &[u8] =
    include_bytes!("../../../assets/icons/sparkles.svg");

pub(crate) const MENU: &[u8] = include_bytes!("../../../assets/icons/menu.svg");
pub(crate) const CLOSE: &[u8] = include_bytes!("../../../assets/icons/x.svg");
pub(crate) const INSPECTOR: &[u8] =
    include_bytes!("../../../assets/icons/panel-right.svg");
pub(crate) const THEME_LIGHT: &[u8] =
    include_bytes!("../../../assets/icons/sun.svg");
pub(crate) const THEME_DARK: &[u8] =
    include_bytes!("../../../assets/icons/moon.svg");
pub(crate) const PLUS: &[u8] = include_bytes!("../../../assets/icons/plus.svg");
pub(crate) const HEART: &[u8] =
    include_bytes!("../../../assets/icons/heart.svg");
pub(crate) const CHEVRON_DOWN: &[u8] =
    include_bytes!("../../../assets/icons/chevron-down.svg");
pub(crate) const CHEVRON_UP: &[u8] =
    include_bytes!("../../../assets/icons/chevron-up.svg");
pub(crate) const SEARCH: &[u8] =
    include_bytes!("../../../assets/icons/search.svg");
