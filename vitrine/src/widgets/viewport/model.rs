/// Coarse classification of the available window width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct ViewportMode {
    pub(crate) is_desktop: bool,
}

impl ViewportMode {
    /// Classify `width`; unknown widths resolve to mobile.
    pub(crate) fn resolve(width: Option<f32>, breakpoint: f32) -> Self {
        Self {
            is_desktop: width.is_some_and(|width| width >= breakpoint),
        }
    }
}
