use dioxus::prelude::*;

use crate::reveal::{Reveal, RevealOn};
use crate::theme::{BACKGROUND_VIDEO, DISPLAY_FONT};

/// The wordmark reveals on mount, wherever the page is scrolled to
pub const HERO_TRIGGER: RevealOn = RevealOn::Mount;

/// Muted looping video that fills its positioned parent
#[component]
pub fn BackgroundVideo() -> Element {
    rsx! {
        video {
            autoplay: true,
            muted: true,
            r#loop: true,
            playsinline: true,
            style: "position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover;",
            source { src: BACKGROUND_VIDEO, r#type: "video/mp4" }
        }
    }
}

/// Full-height video with the wordmark along the bottom edge
#[component]
pub fn Hero() -> Element {
    rsx! {
        section {
            style: "position: relative; width: 100%; height: 100vh; overflow: hidden; padding-top: 96px; box-sizing: border-box;",
            BackgroundVideo {}
            div {
                style: "position: absolute; bottom: 40px; left: 0; right: 0; padding: 0 32px;",
                Reveal {
                    on: HERO_TRIGGER,
                    h1 {
                        class: "hero-title",
                        style: "color: white; width: 100%; margin: 0; text-align: center; letter-spacing: -0.025em; font-family: {DISPLAY_FONT}; font-weight: 400;",
                        "sweeten"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::state::Trigger;

    #[test]
    fn hero_title_reveals_on_mount() {
        assert_eq!(HERO_TRIGGER, RevealOn::Mount);
        // scrolled far past the hero, it still fires at mount
        assert_eq!(HERO_TRIGGER.trigger_at_mount(false), Trigger::Visible);
    }
}
