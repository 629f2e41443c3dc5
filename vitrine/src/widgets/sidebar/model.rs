/// View model for the sidebar widget.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct SidebarViewModel {
    pub(crate) panel_hovered: bool,
}

const HANDLE_HIDDEN: f32 = 0.0;
const HANDLE_HINT: f32 = 0.5;
const HANDLE_VISIBLE: f32 = 1.0;

/// Opacity of the collapse handle.
///
/// An expanded panel only reveals the handle on hover; a collapsed panel
/// always hints at it so it can be found again.
pub(crate) fn handle_opacity(collapsed: bool, panel_hovered: bool) -> f32 {
    match (collapsed, panel_hovered) {
        (_, true) => HANDLE_VISIBLE,
        (true, false) => HANDLE_HINT,
        (false, false) => HANDLE_HIDDEN,
    }
}

#[cfg(test)]
mod tests {
    use super::handle_opacity;

    #[test]
    fn given_expanded_panel_when_not_hovered_then_handle_is_hidden() {
        assert_eq!(handle_opacity(false, false), 0.0);
        assert_eq!(handle_opacity(false, true), 1.0);
    }

    #[test]
    fn given_collapsed_panel_when_not_hovered_then_handle_is_partially_visible()
    {
        let opacity = handle_opacity(true, false);
        assert!(opacity > 0.0 && opacity < 1.0);
        assert_eq!(handle_opacity(true, true), 1.0);
    }
}
