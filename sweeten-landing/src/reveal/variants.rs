//! Variants - named visual states and the transition into each
//!
//! A variant table is plain immutable data. The wrapper reports the name of
//! the variant it is in or heading to as `data-variant`.

use crate::primitives::{Easing, Offset, Opacity, Progress};

/// What an element looks like at rest in one variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub opacity: Opacity,
    pub offset: Offset,
}

impl VisualState {
    pub const fn new(opacity: Opacity, offset: Offset) -> Self {
        Self { opacity, offset }
    }

    pub fn lerp(self, to: Self, t: f32) -> Self {
        Self {
            opacity: self.opacity.lerp(to.opacity, t),
            offset: self.offset.lerp(to.offset, t),
        }
    }

    /// Inline style for the reveal wrapper
    pub fn to_css(&self) -> String {
        format!("{} {}", self.opacity.to_css(), self.offset.to_css())
    }
}

/// How an element moves into a variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration_secs: f32,
    pub easing: Easing,
}

impl Transition {
    /// Jump straight to the target state
    pub const INSTANT: Self = Self {
        duration_secs: 0.0,
        easing: Easing::Linear,
    };

    pub const fn new(duration_secs: f32, easing: Easing) -> Self {
        Self { duration_secs, easing }
    }

    /// Whole milliseconds, so f32 seconds like 0.6 land on 600 exactly
    pub fn duration_ms(&self) -> f64 {
        (f64::from(self.duration_secs) * 1000.0).round()
    }

    /// Eased fraction of the way through after `elapsed_ms`
    pub fn eased(&self, elapsed_ms: f64) -> f32 {
        let progress = Progress::from_elapsed(elapsed_ms, self.duration_ms());
        self.easing.apply(progress)
    }

    pub fn describe(&self) -> String {
        format!("{}s {}", self.duration_secs, self.easing.to_css())
    }
}

/// A named state plus the transition used to enter it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variant {
    pub name: &'static str,
    pub state: VisualState,
    pub transition: Transition,
}

/// The pair of variants a reveal moves between
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variants {
    pub hidden: Variant,
    pub visible: Variant,
}

/// Fade in while rising 30px into place
pub const FADE_UP: Variants = Variants {
    hidden: Variant {
        name: "hidden",
        state: VisualState::new(Opacity::HIDDEN, Offset::down(30.0)),
        transition: Transition::INSTANT,
    },
    visible: Variant {
        name: "visible",
        state: VisualState::new(Opacity::VISIBLE, Offset::ZERO),
        transition: Transition::new(0.6, Easing::EaseOut),
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_up_table() {
        assert_eq!(FADE_UP.hidden.state.opacity, Opacity::HIDDEN);
        assert_eq!(FADE_UP.hidden.state.offset.y, 30.0);
        assert_eq!(FADE_UP.visible.state.opacity, Opacity::VISIBLE);
        assert_eq!(FADE_UP.visible.state.offset, Offset::ZERO);
        assert_eq!(FADE_UP.visible.transition.duration_secs, 0.6);
        assert_eq!(FADE_UP.visible.transition.easing, Easing::EaseOut);
    }

    #[test]
    fn variant_names() {
        assert_eq!(FADE_UP.hidden.name, "hidden");
        assert_eq!(FADE_UP.visible.name, "visible");
    }

    #[test]
    fn transition_eased_bounds() {
        let t = FADE_UP.visible.transition;
        assert_eq!(t.duration_ms(), 600.0);
        assert_eq!(t.eased(0.0), 0.0);
        assert_eq!(t.eased(600.0), 1.0);
        assert_eq!(t.eased(10_000.0), 1.0);
        assert_eq!(Transition::INSTANT.eased(0.0), 1.0);
    }

    #[test]
    fn visual_state_css() {
        assert_eq!(
            FADE_UP.hidden.state.to_css(),
            "opacity: 0.000; transform: translateY(30.00px);"
        );
    }

    #[test]
    fn transition_describe() {
        assert_eq!(FADE_UP.visible.transition.describe(), "0.6s ease-out");
    }
}
