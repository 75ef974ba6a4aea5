use dioxus::prelude::*;

use crate::Route;
use crate::theme::{BODY_FONT, PAGE_BG, PLUM};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    rsx! {
        div {
            style: "min-height: 100vh; background: {PAGE_BG}; color: {PLUM}; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 16px; font-family: {BODY_FONT};",
            h1 { style: "margin: 0; font-size: 32px;", "Nothing at {path}" }
            Link {
                to: Route::Landing {},
                style: "color: {PLUM}; font-size: 18px;",
                "\u{2190} Back to sweeten"
            }
        }
    }
}
