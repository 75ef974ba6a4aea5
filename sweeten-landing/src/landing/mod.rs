//! The sweeten landing page
//!
//! Sections top to bottom: header, hero, about, features, budget, aims,
//! get started, footer. Every revealed element fades up independently.

mod content;
mod footer;
mod get_started;
mod header;
mod hero;

use dioxus::prelude::*;

use crate::theme::{self, BODY_FONT, FONTS_HREF, PAGE_BG, PLUM};
use content::{About, Aims, Budget, Features};
use footer::Footer;
use get_started::GetStarted;
use header::Header;
use hero::Hero;

#[component]
pub fn Landing() -> Element {
    let css = theme::global_css();

    rsx! {
        document::Link { rel: "preconnect", href: "https://fonts.gstatic.com" }
        document::Link { rel: "stylesheet", href: FONTS_HREF }
        style { "{css}" }

        main {
            style: "background: {PAGE_BG}; color: {PLUM}; font-family: {BODY_FONT};",
            Header {}
            Hero {}
            About {}
            Features {}
            Budget {}
            Aims {}
            GetStarted {}
            Footer {}
        }
    }
}
