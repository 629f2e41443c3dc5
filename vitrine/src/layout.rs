//! Shell geometry derived from disclosure state and viewport mode.

use crate::shared::ui::tokens::panel;
use crate::widgets::shell::model::ShellViewModel;
use crate::widgets::viewport::ViewportMode;

/// Logical width of the desktop sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SidebarWidth {
    Collapsed,
    Expanded,
}

impl SidebarWidth {
    pub(crate) fn from_collapsed(collapsed: bool) -> Self {
        if collapsed {
            SidebarWidth::Collapsed
        } else {
            SidebarWidth::Expanded
        }
    }

    pub(crate) fn px(self) -> f32 {
        match self {
            SidebarWidth::Collapsed => panel::SIDEBAR_COLLAPSED_WIDTH,
            SidebarWidth::Expanded => panel::SIDEBAR_WIDTH,
        }
    }
}

/// Horizontal centering of the floating nav.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct NavAnchor {
    /// Left edge of the region the nav is centered in.
    pub(crate) region_start: f32,
    pub(crate) region_width: f32,
    /// Absolute x of the nav center.
    pub(crate) center_x: f32,
}

impl NavAnchor {
    /// Center within the area right of `sidebar_width` on desktop, or
    /// within the full viewport on mobile.
    pub(crate) fn resolve(
        sidebar_width: f32,
        mode: ViewportMode,
        viewport_width: f32,
    ) -> Self {
        let region_start = if mode.is_desktop {
            sidebar_width.min(viewport_width)
        } else {
            0.0
        };
        let region_width = (viewport_width - region_start).max(0.0);

        Self {
            region_start,
            region_width,
            center_x: region_start + region_width / 2.0,
        }
    }
}

/// Geometry consumed by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ShellLayout {
    pub(crate) sidebar_width: SidebarWidth,
    pub(crate) content_offset: f32,
    pub(crate) nav_anchor: NavAnchor,
    pub(crate) desktop_sidebar_visible: bool,
    pub(crate) mobile_sheet_visible: bool,
}

impl ShellLayout {
    pub(crate) fn compute(
        shell: &ShellViewModel,
        mode: ViewportMode,
        viewport_width: f32,
    ) -> Self {
        let sidebar_width = SidebarWidth::from_collapsed(shell.sidebar_collapsed);
        let content_offset = if mode.is_desktop {
            sidebar_width.px()
        } else {
            0.0
        };

        Self {
            sidebar_width,
            content_offset,
            nav_anchor: NavAnchor::resolve(
                sidebar_width.px(),
                mode,
                viewport_width,
            ),
            desktop_sidebar_visible: mode.is_desktop,
            mobile_sheet_visible: !mode.is_desktop
                && shell.mobile_sidebar_open,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{NavAnchor, ShellLayout, SidebarWidth};
    use crate::widgets::shell::model::ShellViewModel;
    use crate::widgets::viewport::ViewportMode;

    const DESKTOP: ViewportMode = ViewportMode { is_desktop: true };
    const MOBILE: ViewportMode = ViewportMode { is_desktop: false };

    fn shell(collapsed: bool, mobile_open: bool) -> ShellViewModel {
        ShellViewModel {
            sidebar_collapsed: collapsed,
            mobile_sidebar_open: mobile_open,
            ..ShellViewModel::default()
        }
    }

    #[test]
    fn given_any_disclosure_state_when_computed_then_width_follows_collapse() {
        for collapsed in [false, true] {
            for mobile_open in [false, true] {
                for mode in [DESKTOP, MOBILE] {
                    let layout = ShellLayout::compute(
                        &shell(collapsed, mobile_open),
                        mode,
                        1280.0,
                    );
                    let expected = if collapsed { 60.0 } else { 220.0 };
                    assert_eq!(layout.sidebar_width.px(), expected);
                }
            }
        }
    }

    #[test]
    fn given_mobile_mode_when_computed_then_desktop_sidebar_is_never_shown() {
        for collapsed in [false, true] {
            for mobile_open in [false, true] {
                let layout = ShellLayout::compute(
                    &shell(collapsed, mobile_open),
                    MOBILE,
                    800.0,
                );
                assert!(!layout.desktop_sidebar_visible);
                assert_eq!(layout.mobile_sheet_visible, mobile_open);
                assert_eq!(layout.content_offset, 0.0);
            }
        }
    }

    #[test]
    fn given_desktop_mode_with_open_sheet_flag_when_computed_then_sheet_is_hidden()
     {
        let layout = ShellLayout::compute(&shell(false, true), DESKTOP, 1280.0);

        assert!(layout.desktop_sidebar_visible);
        assert!(!layout.mobile_sheet_visible);
    }

    #[test]
    fn given_expanded_desktop_when_collapsed_then_content_offset_shrinks() {
        let expanded =
            ShellLayout::compute(&shell(false, false), DESKTOP, 1280.0);
        assert_eq!(expanded.content_offset, 220.0);

        let collapsed =
            ShellLayout::compute(&shell(true, false), DESKTOP, 1280.0);
        assert_eq!(collapsed.content_offset, 60.0);
    }

    #[test]
    fn given_desktop_mode_when_anchoring_nav_then_center_is_right_of_sidebar() {
        let layout = ShellLayout::compute(&shell(false, false), DESKTOP, 1220.0);

        assert_eq!(layout.nav_anchor.region_start, 220.0);
        assert_eq!(layout.nav_anchor.region_width, 1000.0);
        assert_eq!(layout.nav_anchor.center_x, 720.0);
    }

    #[test]
    fn given_mobile_mode_when_anchoring_nav_then_center_is_viewport_middle() {
        let layout = ShellLayout::compute(&shell(true, false), MOBILE, 800.0);

        assert_eq!(layout.nav_anchor.region_start, 0.0);
        assert_eq!(layout.nav_anchor.center_x, 400.0);
    }

    #[test]
    fn given_viewport_narrower_than_sidebar_when_anchoring_then_region_is_empty()
    {
        let anchor = NavAnchor::resolve(220.0, DESKTOP, 100.0);

        assert_eq!(anchor.region_start, 100.0);
        assert_eq!(anchor.region_width, 0.0);
    }

    #[test]
    fn given_collapse_flag_when_converted_then_width_variant_matches() {
        assert_eq!(SidebarWidth::from_collapsed(true), SidebarWidth::Collapsed);
        assert_eq!(
            SidebarWidth::from_collapsed(false),
            SidebarWidth::Expanded
        );
    }
}
