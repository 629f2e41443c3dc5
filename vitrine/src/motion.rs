//! Presentational motion: easing curves and value transitions.
//!
//! Transitions only interpolate what the view draws. Logical shell state is
//! settled the moment an intent is reduced; nothing here is read back into it.

use std::time::Duration;

use iced::time::Instant;

use crate::layout::ShellLayout;
use crate::shared::ui::tokens::{DurationToken, EasingToken};

const NEWTON_ITERATIONS: usize = 8;
const NEWTON_EPSILON: f32 = 0.0001;

/// A CSS-style `cubic-bezier(x1, y1, x2, y2)` timing curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CubicBezier {
    pub(crate) x1: f32,
    pub(crate) y1: f32,
    pub(crate) x2: f32,
    pub(crate) y2: f32,
}

impl CubicBezier {
    pub(crate) const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Return eased progress for normalized time `t` in `0.0..=1.0`.
    pub(crate) fn sample(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }

        // Solve x(u) = t for the curve parameter, then evaluate y(u).
        let mut guess = t;
        for _ in 0..NEWTON_ITERATIONS {
            let x = component(guess, self.x1, self.x2) - t;
            if x.abs() < NEWTON_EPSILON {
                break;
            }
            let dx = derivative(guess, self.x1, self.x2);
            if dx.abs() < NEWTON_EPSILON {
                break;
            }
            guess -= x / dx;
        }

        component(guess.clamp(0.0, 1.0), self.y1, self.y2)
    }

    /// Render the curve as its CSS declaration.
    pub(crate) fn css(&self) -> String {
        format!(
            "cubic-bezier({}, {}, {}, {})",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}

fn component(t: f32, p1: f32, p2: f32) -> f32 {
    let mt = 1.0 - t;
    3.0 * mt * mt * t * p1 + 3.0 * mt * t * t * p2 + t * t * t
}

fn derivative(t: f32, p1: f32, p2: f32) -> f32 {
    let mt = 1.0 - t;
    3.0 * mt * mt * p1 + 6.0 * mt * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

/// A single animated scalar.
#[derive(Debug, Clone)]
pub(crate) struct Transition {
    from: f32,
    to: f32,
    value: f32,
    started_at: Option<Instant>,
    duration: Duration,
    easing: CubicBezier,
}

impl Transition {
    /// Create a settled transition resting at `value`.
    pub(crate) fn settled(value: f32, easing: CubicBezier) -> Self {
        Self {
            from: value,
            to: value,
            value,
            started_at: None,
            duration: Duration::ZERO,
            easing,
        }
    }

    pub(crate) fn value(&self) -> f32 {
        self.value
    }

    pub(crate) fn target(&self) -> f32 {
        self.to
    }

    pub(crate) fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Start moving from the current value towards `to`.
    ///
    /// Returns `false` when `to` is already the target.
    pub(crate) fn retarget(
        &mut self,
        to: f32,
        duration: Duration,
        now: Instant,
    ) -> bool {
        if to == self.to {
            return false;
        }

        self.from = self.value;
        self.to = to;

        if duration.is_zero() {
            self.value = to;
            self.started_at = None;
        } else {
            self.duration = duration;
            self.started_at = Some(now);
        }
        true
    }

    /// Jump to `value` without animating.
    pub(crate) fn snap(&mut self, value: f32) {
        self.from = value;
        self.to = value;
        self.value = value;
        self.started_at = None;
    }

    /// Advance the interpolated value to `now`.
    pub(crate) fn advance(&mut self, now: Instant) {
        let Some(started_at) = self.started_at else {
            return;
        };

        let elapsed = now.saturating_duration_since(started_at);
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        if t >= 1.0 {
            self.value = self.to;
            self.started_at = None;
        } else {
            let progress = self.easing.sample(t);
            self.value = self.from + (self.to - self.from) * progress;
        }
    }
}

/// Animated geometry layered on top of the settled shell layout.
#[derive(Debug, Clone)]
pub(crate) struct ShellMotion {
    sidebar_width: Transition,
    drawer_reveal: Transition,
    reduced: bool,
}

impl ShellMotion {
    pub(crate) fn new(sidebar_width: f32, reduced: bool) -> Self {
        Self {
            sidebar_width: Transition::settled(
                sidebar_width,
                EasingToken::Panel.curve(),
            ),
            drawer_reveal: Transition::settled(
                0.0,
                EasingToken::Panel.curve(),
            ),
            reduced,
        }
    }

    /// Toggle reduced motion; running transitions jump to their targets.
    pub(crate) fn set_reduced(&mut self, reduced: bool) {
        self.reduced = reduced;
        if reduced {
            self.sidebar_width.snap(self.sidebar_width.target());
            self.drawer_reveal.snap(self.drawer_reveal.target());
        }
    }

    /// Point every transition at the geometry of `layout`.
    pub(crate) fn retarget(
        &mut self,
        layout: &ShellLayout,
        drawer_open: bool,
        now: Instant,
    ) {
        let panel = self.duration(DurationToken::Enter);
        self.sidebar_width
            .retarget(layout.sidebar_width.px(), panel, now);

        let (reveal, duration) = if drawer_open {
            (1.0, self.duration(DurationToken::Enter))
        } else {
            (0.0, self.duration(DurationToken::Exit))
        };
        self.drawer_reveal.retarget(reveal, duration, now);
    }

    pub(crate) fn advance(&mut self, now: Instant) {
        self.sidebar_width.advance(now);
        self.drawer_reveal.advance(now);
    }

    pub(crate) fn is_animating(&self) -> bool {
        self.sidebar_width.is_running() || self.drawer_reveal.is_running()
    }

    /// Sidebar width as currently drawn.
    pub(crate) fn sidebar_width(&self) -> f32 {
        self.sidebar_width.value()
    }

    /// Drawer slide progress, `0.0` hidden to `1.0` fully shown.
    pub(crate) fn drawer_reveal(&self) -> f32 {
        self.drawer_reveal.value()
    }

    fn duration(&self, token: DurationToken) -> Duration {
        if self.reduced {
            Duration::ZERO
        } else {
            token.duration()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use iced::time::Instant;

    use super::{CubicBezier, ShellMotion, Transition};
    use crate::layout::{ShellLayout, SidebarWidth};
    use crate::shared::ui::tokens::EasingToken;
    use crate::widgets::shell::model::ShellViewModel;
    use crate::widgets::viewport::ViewportMode;

    fn collapsed_shell() -> ShellViewModel {
        ShellViewModel {
            sidebar_collapsed: true,
            ..ShellViewModel::default()
        }
    }

    #[test]
    fn given_any_curve_when_sampling_endpoints_then_progress_is_zero_and_one()
    {
        for token in EasingToken::ALL {
            let curve = token.curve();
            assert_eq!(curve.sample(0.0), 0.0);
            assert_eq!(curve.sample(1.0), 1.0);
        }
    }

    #[test]
    fn given_linear_curve_when_sampling_midpoint_then_progress_matches_time() {
        let linear = CubicBezier::new(0.0, 0.0, 1.0, 1.0);
        assert!((linear.sample(0.5) - 0.5).abs() < 0.001);
        assert!((linear.sample(0.25) - 0.25).abs() < 0.001);
    }

    #[test]
    fn given_spring_curve_when_sampling_early_then_progress_leads_time() {
        let spring = EasingToken::Spring.curve();
        assert!(spring.sample(0.25) > 0.25);
        assert!(spring.sample(0.5) > spring.sample(0.25));
    }

    #[test]
    fn given_switch_curve_when_sampling_late_then_progress_overshoots() {
        let switch = EasingToken::Switch.curve();
        let peak = (1..20)
            .map(|step| switch.sample(step as f32 / 20.0))
            .fold(0.0_f32, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn given_curve_when_rendering_css_then_declaration_lists_points() {
        assert_eq!(
            EasingToken::Spring.curve().css(),
            "cubic-bezier(0.22, 1, 0.36, 1)"
        );
    }

    #[test]
    fn given_running_transition_when_duration_elapses_then_value_settles() {
        let start = Instant::now();
        let mut transition =
            Transition::settled(220.0, EasingToken::Panel.curve());

        assert!(transition.retarget(
            60.0,
            Duration::from_millis(300),
            start
        ));
        assert!(transition.is_running());

        transition.advance(start + Duration::from_millis(150));
        let midway = transition.value();
        assert!(midway < 220.0 && midway > 60.0);

        transition.advance(start + Duration::from_millis(400));
        assert_eq!(transition.value(), 60.0);
        assert!(!transition.is_running());
    }

    #[test]
    fn given_same_target_when_retargeting_then_transition_does_not_restart() {
        let start = Instant::now();
        let mut transition =
            Transition::settled(220.0, EasingToken::Panel.curve());
        assert!(!transition.retarget(
            220.0,
            Duration::from_millis(300),
            start
        ));
        assert!(!transition.is_running());
    }

    #[test]
    fn given_reduced_motion_when_layout_changes_then_values_jump() {
        let now = Instant::now();
        let mut motion = ShellMotion::new(220.0, true);
        let layout = ShellLayout::compute(
            &collapsed_shell(),
            ViewportMode { is_desktop: true },
            1200.0,
        );

        motion.retarget(&layout, true, now);

        assert!(!motion.is_animating());
        assert_eq!(motion.sidebar_width(), SidebarWidth::Collapsed.px());
        assert_eq!(motion.drawer_reveal(), 1.0);
    }

    #[test]
    fn given_animating_motion_when_reduced_is_enabled_then_targets_are_reached()
    {
        let now = Instant::now();
        let mut motion = ShellMotion::new(220.0, false);
        let layout = ShellLayout::compute(
            &collapsed_shell(),
            ViewportMode { is_desktop: true },
            1200.0,
        );
        motion.retarget(&layout, false, now);
        assert!(motion.is_animating());

        motion.set_reduced(true);

        assert!(!motion.is_animating());
        assert_eq!(motion.sidebar_width(), 60.0);
    }
}
