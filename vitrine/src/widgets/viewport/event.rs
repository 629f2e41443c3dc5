use super::model::ViewportMode;

/// Intent events fed from window observation.
#[derive(Debug, Clone)]
pub(crate) enum ViewportIntent {
    /// A new logical window width was observed.
    Measured(f32),
}

/// Effect events produced by the viewport reducer.
#[derive(Debug, Clone)]
pub(crate) enum ViewportEffect {
    /// The mode was resolved for the first time or crossed the breakpoint.
    ModeChanged(ViewportMode),
}

/// Viewport event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum ViewportEvent {
    /// Intent event reduced by the viewport widget.
    Intent(ViewportIntent),
    /// External effect orchestrated by app-level routing.
    Effect(ViewportEffect),
}
