use dioxus::prelude::*;

use crate::theme::FOOTER_TEXT;

pub fn copyright_line(year: u32) -> String {
    format!("\u{a9} {year} Sweeten. All rights reserved.")
}

#[component]
pub fn Footer() -> Element {
    let year = js_sys::Date::new_0().get_full_year();
    let line = copyright_line(year);
    rsx! {
        footer {
            style: "text-align: center; padding: 40px 0; font-size: 14px; color: {FOOTER_TEXT};",
            "{line}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_has_year() {
        assert_eq!(copyright_line(2026), "\u{a9} 2026 Sweeten. All rights reserved.");
    }
}
