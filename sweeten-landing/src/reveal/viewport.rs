//! Viewport triggers
//!
//! Intersection itself is the browser's job. This module decides what a
//! reveal does at mount, builds the observer scripts handed to the page, and
//! mirrors the observer's rule for the first synchronous check.

use super::state::Trigger;
use crate::primitives::bounded::bounded_f32;

bounded_f32!(Amount, 0.0, 1.0);

/// `window` property holding live observers, keyed by element id
const OBSERVER_REGISTRY: &str = "__revealObservers";

/// When an element should be considered in view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportOptions {
    /// Fraction of the element that must be visible. Zero means any pixel.
    pub amount: Amount,
    /// Grows (positive) or shrinks (negative) the viewport's bottom edge, px
    pub margin_px: f32,
}

impl ViewportOptions {
    pub const DEFAULT: Self = Self {
        amount: Amount::new(0.0),
        margin_px: 0.0,
    };
}

/// What fires a reveal
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealOn {
    /// First frame after mount, regardless of scroll position
    Mount,
    /// First time the element intersects the viewport
    InView(ViewportOptions),
}

impl RevealOn {
    pub const IN_VIEW: Self = Self::InView(ViewportOptions::DEFAULT);

    /// Trigger delivered when the element mounts. `in_view` is the
    /// synchronous intersection check; `Mount` ignores it.
    pub fn trigger_at_mount(&self, in_view: bool) -> Trigger {
        match self {
            Self::Mount => Trigger::Visible,
            Self::InView(_) => Trigger::from_in_view(in_view),
        }
    }
}

impl Default for RevealOn {
    fn default() -> Self {
        Self::IN_VIEW
    }
}

/// Whether a box spanning `top..bottom` (viewport coordinates) counts as
/// visible in a viewport of `viewport_height`. Boxes touching an edge count,
/// as they do for IntersectionObserver.
pub fn intersects(top: f64, bottom: f64, viewport_height: f64, options: &ViewportOptions) -> bool {
    let height = bottom - top;
    let view_bottom = viewport_height + f64::from(options.margin_px);
    let visible = bottom.min(view_bottom) - top.max(0.0);
    let amount = f64::from(options.amount.value());

    if height <= 0.0 {
        return top >= 0.0 && top <= view_bottom;
    }
    if amount == 0.0 {
        return visible >= 0.0;
    }
    visible / height >= amount
}

/// Script that observes `#{element_id}` and sends each intersection report
/// (`true`/`false`) until the first `true`, then disconnects.
///
/// The observer is parked on `window` so `disconnect_script` can find it.
pub fn observer_script(element_id: &str, options: &ViewportOptions) -> String {
    format!(
        r#"
        const el = document.getElementById("{element_id}");
        if (!el || !("IntersectionObserver" in window)) {{
            dioxus.send(true);
        }} else {{
            const registry = window.{OBSERVER_REGISTRY} = window.{OBSERVER_REGISTRY} || {{}};
            const observer = new IntersectionObserver((entries) => {{
                for (const entry of entries) {{
                    if (entry.isIntersecting) {{
                        observer.disconnect();
                        delete registry["{element_id}"];
                        dioxus.send(true);
                        return;
                    }}
                }}
                dioxus.send(false);
            }}, {{ threshold: {threshold}, rootMargin: "0px 0px {margin}px 0px" }});
            registry["{element_id}"] = observer;
            observer.observe(el);
        }}
        "#,
        threshold = options.amount.value(),
        margin = options.margin_px,
    )
}

/// Script that disconnects and forgets the observer for `#{element_id}`, if any.
/// Self-contained, so it can run through a plain global `eval`.
pub fn disconnect_script(element_id: &str) -> String {
    format!(
        r#"
        (() => {{
            const registry = window.{OBSERVER_REGISTRY};
            if (registry && registry["{element_id}"]) {{
                registry["{element_id}"].disconnect();
                delete registry["{element_id}"];
            }}
        }})();
        "#
    )
}
