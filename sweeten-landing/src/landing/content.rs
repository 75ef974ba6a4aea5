//! Body sections between the hero and the get-started band

use dioxus::prelude::*;

use crate::reveal::Reveal;
use crate::theme::{DISPLAY_FONT, LILAC, PLACEHOLDER_BG, PLACEHOLDER_TEXT, PLUM_INK};

pub const ABOUT_COPY: &str = "Sweeten is a modern diabetes management app built to simplify and sweeten your journey to better health. We provide tools for daily tracking, insights, and empowering support.";

pub const FEATURE_STEPS: &[&str] = &["Track", "Understand", "Thrive"];

/// (share in percent, category)
pub const BUDGET_SPLIT: &[(u8, &str)] = &[
    (50, "Education"),
    (30, "Tech Development"),
    (20, "Community"),
];

pub const AIMS: &[&str] = &["Better Health", "Daily Tracking", "User Empowerment", "Global Reach"];

const SECTION_STYLE: &str = "padding: 224px 32px; max-width: 1152px; margin: 0 auto; box-sizing: border-box;";

pub fn feature_blurb(step: &str) -> String {
    format!("Brief description of how you can {} with Sweeten.", step.to_lowercase())
}

/// Heading style shared by every body section
pub fn heading_style(centered: bool, gap_below_px: u32) -> String {
    let align = if centered { "text-align: center;" } else { "" };
    format!(
        "font-size: 60px; line-height: 1; font-weight: 800; margin: 0 0 {gap_below_px}px 0; width: 100%; font-family: {DISPLAY_FONT}; {align}"
    )
}

#[component]
fn ImagePlaceholder(label: String, height: u32, #[props(default = 12)] radius: u32) -> Element {
    rsx! {
        div {
            style: "width: 100%; height: {height}px; background: {PLACEHOLDER_BG}; border-radius: {radius}px; display: flex; align-items: center; justify-content: center;",
            span { style: "color: {PLACEHOLDER_TEXT};", "[ {label} Image ]" }
        }
    }
}

#[component]
pub fn About() -> Element {
    let heading = heading_style(false, 40);
    rsx! {
        section {
            id: "about",
            style: "{SECTION_STYLE} text-align: center;",
            Reveal {
                h2 { style: "{heading}", "About" }
            }
            Reveal {
                p {
                    style: "font-size: 24px; line-height: 1.4; color: {PLUM_INK}; margin: 0;",
                    "{ABOUT_COPY}"
                }
            }
        }
    }
}

#[component]
pub fn Features() -> Element {
    let heading = heading_style(true, 40);
    rsx! {
        section {
            id: "features",
            style: "{SECTION_STYLE}",
            Reveal {
                h2 { style: "{heading}", "Features" }
            }
            div {
                class: "grid-3",
                style: "font-size: 18px;",
                for step in FEATURE_STEPS.iter() {
                    Reveal {
                        key: "{step}",
                        div {
                            style: "margin-bottom: 16px;",
                            ImagePlaceholder { label: step.to_string(), height: 192 }
                        }
                        h3 { style: "font-size: 24px; font-weight: 700; margin: 0 0 8px 0;", "{step}" }
                        p { style: "margin: 0;", {feature_blurb(step)} }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Budget() -> Element {
    let heading = heading_style(true, 40);
    rsx! {
        section {
            style: "{SECTION_STYLE} background: {LILAC};",
            Reveal {
                h2 { style: "{heading}", "THE BUDGET" }
            }
            p { style: "font-size: 24px; margin: 0 0 24px 0;", "We believe in transparency and value for care." }
            div {
                style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 32px; text-align: center; font-size: 20px;",
                for (share, category) in BUDGET_SPLIT.iter() {
                    div {
                        key: "{category}",
                        p { style: "font-size: 36px; font-weight: 700; margin: 0;", "{share}%" }
                        p { style: "margin: 0;", "{category}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Aims() -> Element {
    let heading = heading_style(true, 40);
    rsx! {
        section {
            style: "{SECTION_STYLE}",
            Reveal {
                h2 { style: "{heading}", "AIMS" }
            }
            div {
                class: "grid-2",
                ImagePlaceholder { label: "Aims".to_string(), height: 320 }
                div {
                    style: "display: grid; grid-template-columns: repeat(2, 1fr); gap: 16px;",
                    for aim in AIMS.iter() {
                        div {
                            key: "{aim}",
                            style: "background: {LILAC}; border-radius: 9999px; padding: 32px; display: flex; align-items: center; justify-content: center; text-align: center; font-weight: 700; font-size: 18px;",
                            "{aim}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_adds_up() {
        let total: u32 = BUDGET_SPLIT.iter().map(|(share, _)| u32::from(*share)).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn feature_blurb_lowercases_step() {
        assert_eq!(
            feature_blurb("Understand"),
            "Brief description of how you can understand with Sweeten."
        );
    }

    #[test]
    fn heading_alignment() {
        assert!(heading_style(true, 40).contains("text-align: center;"));
        assert!(!heading_style(false, 40).contains("text-align"));
        assert!(heading_style(false, 24).contains("margin: 0 0 24px 0;"));
    }

    #[test]
    fn four_aims() {
        assert_eq!(AIMS.len(), 4);
        assert_eq!(FEATURE_STEPS, &["Track", "Understand", "Thrive"]);
    }
}
