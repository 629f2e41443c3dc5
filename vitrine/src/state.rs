use iced::Size;

/// Window geometry state.
#[derive(Debug, Default)]
pub(crate) struct State {
    pub(crate) window_size: Size,
}

impl State {
    pub(crate) fn new(window_size: Size) -> Self {
        Self { window_size }
    }

    /// Width of the page column right of the sidebar, capped at `max_width`.
    pub(crate) fn content_width(&self, offset: f32, max_width: f32) -> f32 {
        (self.window_size.width - offset).clamp(0.0, max_width)
    }
}

#[cfg(test)]
mod tests {
    use iced::Size;

    use super::State;

    #[test]
    fn given_wide_window_when_measuring_content_then_width_is_capped() {
        let state = State::new(Size::new(1600.0, 900.0));
        assert_eq!(state.content_width(220.0, 768.0), 768.0);
    }

    #[test]
    fn given_narrow_window_when_measuring_content_then_offset_is_subtracted() {
        let state = State::new(Size::new(700.0, 900.0));
        assert_eq!(state.content_width(0.0, 768.0), 700.0);
        assert_eq!(state.content_width(900.0, 768.0), 0.0);
    }
}
