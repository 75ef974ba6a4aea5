use dioxus::prelude::*;

use super::content::heading_style;
use super::hero::BackgroundVideo;
use crate::reveal::Reveal;
use crate::theme::PLUM;

pub const GET_STARTED_COPY: &str = "Ready to take control of your health journey? Join Sweeten today and experience a better, balanced lifestyle.";

#[component]
pub fn GetStarted() -> Element {
    let heading = heading_style(false, 24);
    rsx! {
        section {
            id: "get-started",
            style: "position: relative; width: 100%; height: 80vh; overflow: hidden; text-align: center;",
            BackgroundVideo {}
            div {
                style: "position: relative; z-index: 10; padding: 96px 32px; max-width: 1152px; margin: 0 auto;",
                Reveal {
                    h2 { style: "{heading}", "Get Started" }
                }
                Reveal {
                    style: "max-width: 672px; margin: 0 auto 32px auto;",
                    p { style: "font-size: 20px; margin: 0;", "{GET_STARTED_COPY}" }
                }
                Reveal {
                    button {
                        class: "cta-button",
                        style: "margin-top: 16px; padding: 16px 40px; background: {PLUM}; color: white; font-size: 20px; border: none; border-radius: 9999px; cursor: pointer;",
                        "Sign Up Now"
                    }
                }
            }
        }
    }
}
