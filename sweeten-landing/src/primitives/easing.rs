//! Easing - timing curves for reveal transitions
//!
//! Named curves match the CSS keywords of the same name, so a curve sampled
//! here lands on the same values the browser would produce for
//! `transition-timing-function: ease-out`.

use super::progress::Progress;

const NEWTON_ITERATIONS: usize = 8;
const NEWTON_EPSILON: f32 = 1e-6;
const BISECTION_ITERATIONS: usize = 32;

/// Control points of CSS `ease-out`, anchored at (0,0) and (1,1)
const EASE_OUT: (f32, f32, f32, f32) = (0.0, 0.0, 0.58, 1.0);

/// Timing curve mapping linear progress to eased progress
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    EaseOut,
}

impl Easing {
    /// Eased value for `progress`. Endpoints are exact.
    pub fn apply(&self, progress: Progress) -> f32 {
        let t = progress.value();
        if t <= 0.0 || t >= 1.0 {
            return t;
        }
        match self {
            Self::Linear => t,
            Self::EaseOut => {
                let (x1, y1, x2, y2) = EASE_OUT;
                let s = solve_curve_x(t, x1, x2);
                bezier(s, y1, y2)
            }
        }
    }

    /// CSS `transition-timing-function` value
    pub fn to_css(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseOut => "ease-out",
        }
    }
}

/// One axis of a cubic bezier with p0 = 0, p3 = 1
fn bezier(t: f32, p1: f32, p2: f32) -> f32 {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    ((a * t + b) * t + c) * t
}

fn bezier_slope(t: f32, p1: f32, p2: f32) -> f32 {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    (3.0 * a * t + 2.0 * b) * t + c
}

/// Curve parameter whose x coordinate is `x`
fn solve_curve_x(x: f32, x1: f32, x2: f32) -> f32 {
    let mut t = x;
    for _ in 0..NEWTON_ITERATIONS {
        let err = bezier(t, x1, x2) - x;
        if err.abs() < NEWTON_EPSILON {
            return t;
        }
        let slope = bezier_slope(t, x1, x2);
        if slope.abs() < NEWTON_EPSILON {
            break;
        }
        t -= err / slope;
    }

    // Newton stalled on a flat segment; bisect instead
    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    t = x;
    for _ in 0..BISECTION_ITERATIONS {
        let value = bezier(t, x1, x2);
        if (value - x).abs() < NEWTON_EPSILON {
            break;
        }
        if value < x {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) * 0.5;
    }
    t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        for easing in [Easing::Linear, Easing::EaseOut] {
            assert_eq!(easing.apply(Progress::new(0.0)), 0.0);
            assert_eq!(easing.apply(Progress::END), 1.0);
        }
    }

    #[test]
    fn linear_is_identity() {
        assert_eq!(Easing::Linear.apply(Progress::new(0.3)), 0.3);
    }

    #[test]
    fn ease_out_leads_linear() {
        for step in 1..10 {
            let p = Progress::new(step as f32 / 10.0);
            assert!(Easing::EaseOut.apply(p) > p.value());
        }
    }

    #[test]
    fn ease_out_is_monotonic() {
        let mut prev = 0.0;
        for step in 0..=100 {
            let v = Easing::EaseOut.apply(Progress::new(step as f32 / 100.0));
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn ease_out_midpoint() {
        // cubic-bezier(0, 0, 0.58, 1) passes x = 0.5 at y ~= 0.69
        let mid = Easing::EaseOut.apply(Progress::new(0.5));
        assert!((mid - 0.69).abs() < 0.02);
    }

    #[test]
    fn css_names() {
        assert_eq!(Easing::EaseOut.to_css(), "ease-out");
        assert_eq!(Easing::Linear.to_css(), "linear");
    }
}
