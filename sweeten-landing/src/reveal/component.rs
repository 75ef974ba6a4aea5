//! Reveal component - fades its children up into place once
//!
//! Structure:
//!   wrapper div (sampled opacity/offset + data-* attributes)
//!     children
//!
//! Each wrapper owns its own `RevealState`; nothing is shared between
//! instances except the id counter.

use std::cell::Cell;
use std::rc::Rc;

use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;

use super::clock::{self, FRAME_INTERVAL_MS};
use super::state::{Applied, RevealState, Trigger};
use super::variants::{FADE_UP, Variants};
use super::viewport::{RevealOn, ViewportOptions, disconnect_script, intersects, observer_script};

/// Hands out DOM ids for reveal wrappers. Provided once by the app shell.
#[derive(Clone, Default)]
pub struct RevealIds(Rc<Cell<usize>>);

impl RevealIds {
    pub fn next(&self) -> String {
        let id = self.0.get();
        self.0.set(id + 1);
        format!("reveal-{id}")
    }
}

/// Synchronous check for elements that are already on screen at mount
fn in_view_now(element_id: &str, options: &ViewportOptions) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(element) = window.document().and_then(|d| d.get_element_by_id(element_id)) else {
        return false;
    };
    let Some(viewport_h) = window.inner_height().ok().and_then(|v| v.as_f64()) else {
        return false;
    };
    let rect = element.get_bounding_client_rect();
    intersects(rect.top(), rect.bottom(), viewport_h, options)
}

/// Apply a trigger; if it starts the transition, tick frames until it settles
fn deliver(
    id: &str,
    trigger: Trigger,
    mut state: Signal<RevealState>,
    mut now: Signal<f64>,
    variants: Variants,
) -> Applied {
    let t = clock::now_ms();
    let applied = state.write().apply(trigger, t);
    if applied == Applied::Started {
        debug!("reveal {id}: started at {t:.1}ms");
        now.set(t);
        let id = id.to_string();
        spawn(async move {
            loop {
                gloo_timers::future::TimeoutFuture::new(FRAME_INTERVAL_MS).await;
                let t = clock::now_ms();
                now.set(t);
                if state.peek().is_settled(&variants, t) {
                    debug!("reveal {id}: settled");
                    break;
                }
            }
        });
    }
    applied
}

/// Feed observer reports into the state until one starts the reveal
async fn watch_viewport(
    id: String,
    options: ViewportOptions,
    state: Signal<RevealState>,
    now: Signal<f64>,
    variants: Variants,
) {
    let mut eval = document::eval(&observer_script(&id, &options));
    loop {
        match eval.recv::<bool>().await {
            Ok(in_view) => {
                let trigger = Trigger::from_in_view(in_view);
                if deliver(&id, trigger, state, now, variants) == Applied::Started {
                    break;
                }
            }
            Err(err) => {
                warn!("reveal {id}: viewport observer closed: {err:?}");
                break;
            }
        }
    }
}

#[component]
pub fn Reveal(
    #[props(default)] on: RevealOn,
    #[props(default = FADE_UP)] variants: Variants,
    // extra wrapper style, applied after the reveal styles
    #[props(default)] style: String,
    children: Element,
) -> Element {
    let ids = use_context::<RevealIds>();
    let id = use_hook(|| ids.next());
    let state = use_signal(RevealState::new);
    let now = use_signal(|| 0.0f64);

    // An off-screen wrapper unmounted before it fired still has a live observer
    let drop_id = id.clone();
    use_drop(move || {
        if let Err(err) = js_sys::eval(&disconnect_script(&drop_id)) {
            warn!("reveal {drop_id}: failed to disconnect observer: {err:?}");
        }
    });

    let t = now();
    let current = *state.read();
    let visual = current.sample(&variants, t);
    let phase = current.phase(&variants, t).as_str();
    let variant = current.target(&variants).name;
    let transition = variants.visible.transition.describe();
    let wrapper_style = format!("{} will-change: opacity, transform; {}", visual.to_css(), style);

    let mount_id = id.clone();

    rsx! {
        div {
            id: "{id}",
            style: "{wrapper_style}",
            "data-reveal": phase,
            "data-variant": variant,
            "data-transition": "{transition}",
            onmounted: move |_| {
                let id = mount_id.clone();
                let in_view = match on {
                    RevealOn::Mount => false,
                    RevealOn::InView(options) => in_view_now(&id, &options),
                };
                let trigger = on.trigger_at_mount(in_view);
                if deliver(&id, trigger, state, now, variants) == Applied::Started {
                    return;
                }
                if let RevealOn::InView(options) = on {
                    spawn(watch_viewport(id, options, state, now, variants));
                }
            },
            {children}
        }
    }
}
