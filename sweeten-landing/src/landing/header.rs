use dioxus::prelude::*;

use crate::theme::PLUM_BORDER;

pub const NAV_LINKS: &[&str] = &["About", "Features", "Get Started"];

/// Section id a nav label points at: lowercased, first space replaced by `-`
pub fn anchor_id(label: &str) -> String {
    label.to_lowercase().replacen(' ', "-", 1)
}

#[component]
pub fn Header() -> Element {
    let links: Vec<(&str, String)> = NAV_LINKS
        .iter()
        .map(|label| (*label, format!("#{}", anchor_id(label))))
        .collect();

    rsx! {
        header {
            style: "position: fixed; top: 0; left: 0; width: 100%; z-index: 50; background: transparent; backdrop-filter: blur(12px); -webkit-backdrop-filter: blur(12px); border-bottom: 1px solid {PLUM_BORDER}; padding: 24px 0;",
            nav {
                style: "display: flex; justify-content: center; gap: 64px; font-size: 14px;",
                for (label, href) in links.iter() {
                    a {
                        key: "{label}",
                        class: "nav-link",
                        href: "{href}",
                        "{label}"
                    }
                }
            }
        }
    }
}
