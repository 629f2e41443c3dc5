use super::model::ViewportMode;

/// Last observed window width and the desktop breakpoint.
#[derive(Debug)]
pub(super) struct ViewportState {
    width: Option<f32>,
    breakpoint: f32,
}

impl ViewportState {
    pub(super) fn new(breakpoint: f32) -> Self {
        Self {
            width: None,
            breakpoint,
        }
    }

    pub(super) fn width(&self) -> Option<f32> {
        self.width
    }

    pub(super) fn mode(&self) -> ViewportMode {
        ViewportMode::resolve(self.width, self.breakpoint)
    }

    /// Store a measurement and return the previous width.
    pub(super) fn measure(&mut self, width: f32) -> Option<f32> {
        self.width.replace(width.max(0.0))
    }
}
