//! RevealState - per-element reveal bookkeeping
//!
//! A reveal fires at most once. After that no trigger can move the element
//! back to its hidden variant; the transition always runs to completion.

use super::variants::{Variant, Variants, VisualState};

/// The signal a trigger source delivers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Trigger {
    #[default]
    Hidden,
    Visible,
}

impl Trigger {
    pub fn from_in_view(in_view: bool) -> Self {
        if in_view { Self::Visible } else { Self::Hidden }
    }
}

/// What an `apply` call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The transition started with this call
    Started,
    /// Nothing changed
    Ignored,
}

/// Observable reveal phase, exposed as `data-reveal` on the wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Hidden,
    Animating,
    Revealed,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hidden => "hidden",
            Self::Animating => "animating",
            Self::Revealed => "revealed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RevealState {
    trigger: Trigger,
    has_fired: bool,
    started_at_ms: Option<f64>,
}

impl RevealState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a trigger signal observed at `now_ms`.
    ///
    /// Only the first `Visible` does anything. `Hidden` is recorded while the
    /// element has never fired and dropped afterwards.
    pub fn apply(&mut self, trigger: Trigger, now_ms: f64) -> Applied {
        if self.has_fired {
            return Applied::Ignored;
        }
        match trigger {
            Trigger::Hidden => {
                self.trigger = Trigger::Hidden;
                Applied::Ignored
            }
            Trigger::Visible => {
                self.trigger = Trigger::Visible;
                self.has_fired = true;
                self.started_at_ms = Some(now_ms);
                Applied::Started
            }
        }
    }

    /// The variant the element rests in or is moving towards
    pub fn target<'a>(&self, variants: &'a Variants) -> &'a Variant {
        match self.trigger {
            Trigger::Hidden => &variants.hidden,
            Trigger::Visible => &variants.visible,
        }
    }

    /// Visual state at `now_ms`
    pub fn sample(&self, variants: &Variants, now_ms: f64) -> VisualState {
        let from = variants.hidden.state;
        let target = self.target(variants);
        let Some(start) = self.started_at_ms else {
            return from;
        };
        let elapsed = now_ms - start;
        if elapsed >= target.transition.duration_ms() {
            return target.state;
        }
        from.lerp(target.state, target.transition.eased(elapsed))
    }

    pub fn is_settled(&self, variants: &Variants, now_ms: f64) -> bool {
        match self.started_at_ms {
            Some(start) => now_ms - start >= self.target(variants).transition.duration_ms(),
            None => false,
        }
    }

    pub fn phase(&self, variants: &Variants, now_ms: f64) -> Phase {
        match self.trigger {
            Trigger::Hidden => Phase::Hidden,
            Trigger::Visible if self.is_settled(variants, now_ms) => Phase::Revealed,
            Trigger::Visible => Phase::Animating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{Offset, Opacity};
    use crate::reveal::variants::FADE_UP;

    #[test]
    fn hidden_before_trigger() {
        let state = RevealState::new();
        let visual = state.sample(&FADE_UP, 5_000.0);
        assert_eq!(visual.opacity, Opacity::HIDDEN);
        assert_eq!(visual.offset, Offset::down(30.0));
        assert_eq!(state.phase(&FADE_UP, 5_000.0), Phase::Hidden);
        assert_eq!(state.target(&FADE_UP).name, "hidden");
    }

    #[test]
    fn enters_viewport_at_zero_revealed_by_600ms() {
        let mut state = RevealState::new();
        assert_eq!(state.apply(Trigger::Visible, 0.0), Applied::Started);
        assert_eq!(state.target(&FADE_UP).name, "visible");

        let start = state.sample(&FADE_UP, 0.0);
        assert_eq!(start.opacity, Opacity::HIDDEN);
        assert_eq!(start.offset.y, 30.0);

        let mid = state.sample(&FADE_UP, 300.0);
        assert!(mid.opacity.value() > 0.5);
        assert!(mid.offset.y > 0.0 && mid.offset.y < 15.0);

        let end = state.sample(&FADE_UP, 600.0);
        assert_eq!(end.opacity, Opacity::VISIBLE);
        assert_eq!(end.offset, Offset::ZERO);
        assert!(state.is_settled(&FADE_UP, 600.0));
        assert_eq!(state.phase(&FADE_UP, 600.0), Phase::Revealed);
    }

    #[test]
    fn opacity_converges_monotonically() {
        let mut state = RevealState::new();
        state.apply(Trigger::Visible, 1_000.0);
        let mut prev = -1.0;
        for ms in (1_000..=1_600).step_by(16) {
            let o = state.sample(&FADE_UP, ms as f64).opacity.value();
            assert!(o >= prev);
            prev = o;
        }
        assert_eq!(state.phase(&FADE_UP, 1_200.0), Phase::Animating);
    }

    #[test]
    fn second_visible_is_a_noop() {
        let mut state = RevealState::new();
        state.apply(Trigger::Visible, 100.0);
        assert_eq!(state.apply(Trigger::Visible, 400.0), Applied::Ignored);
        assert_eq!(state.started_at_ms, Some(100.0));
        assert_eq!(state.sample(&FADE_UP, 700.0).opacity, Opacity::VISIBLE);
    }

    #[test]
    fn hidden_after_fire_does_not_revert() {
        let mut state = RevealState::new();
        state.apply(Trigger::Visible, 0.0);
        assert_eq!(state.apply(Trigger::Hidden, 200.0), Applied::Ignored);
        assert_eq!(state.trigger, Trigger::Visible);
        assert!(state.has_fired);
        assert_eq!(state.sample(&FADE_UP, 10_000.0).opacity, Opacity::VISIBLE);
    }

    #[test]
    fn never_visible_stays_hidden() {
        let mut state = RevealState::new();
        for ms in [0.0, 1_000.0, 60_000.0] {
            assert_eq!(state.apply(Trigger::Hidden, ms), Applied::Ignored);
            assert_eq!(state.sample(&FADE_UP, ms).opacity, Opacity::HIDDEN);
        }
        assert!(!state.has_fired);
        assert!(!state.is_settled(&FADE_UP, 60_000.0));
    }

    #[test]
    fn elements_are_independent() {
        let mut hero = RevealState::new();
        let footer = RevealState::new();
        hero.apply(Trigger::Visible, 0.0);
        assert_eq!(hero.sample(&FADE_UP, 600.0).opacity, Opacity::VISIBLE);
        assert_eq!(footer.sample(&FADE_UP, 600.0).opacity, Opacity::HIDDEN);
    }

    #[test]
    fn trigger_from_observer_report() {
        assert_eq!(Trigger::from_in_view(true), Trigger::Visible);
        assert_eq!(Trigger::from_in_view(false), Trigger::Hidden);
    }

    #[test]
    fn phase_names() {
        assert_eq!(Phase::Hidden.as_str(), "hidden");
        assert_eq!(Phase::Animating.as_str(), "animating");
        assert_eq!(Phase::Revealed.as_str(), "revealed");
    }
}
