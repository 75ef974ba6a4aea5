//! Palette, fonts and page-wide CSS

pub const PAGE_BG: &str = "#f9f7f8";
pub const PLUM: &str = "#7a004b";
pub const PLUM_DARK: &str = "#5c0037";
pub const PLUM_INK: &str = "#4a0034";
pub const PLUM_BORDER: &str = "#7a004b33";
pub const LILAC: &str = "#e8dbf0";
pub const PLACEHOLDER_BG: &str = "#e5e7eb";
pub const PLACEHOLDER_TEXT: &str = "#9ca3af";
pub const FOOTER_TEXT: &str = "#6b7280";

pub const DISPLAY_FONT: &str = "'Lexend Tera', system-ui, sans-serif";
pub const BODY_FONT: &str = "'Lexend', system-ui, sans-serif";

pub const FONTS_HREF: &str =
    "https://fonts.googleapis.com/css2?family=Lexend+Tera:wght@400;700&family=Lexend:wght@400;500&display=swap";

/// Background loop used by the hero and the get-started band
pub const BACKGROUND_VIDEO: &str = "/sweeten-bg.mp4";

/// Hover effects and breakpoints that inline styles can't express.
/// Inject once as a <style> block.
pub fn global_css() -> String {
    format!(
        r#"
html {{ scroll-behavior: smooth; }}
body {{ margin: 0; background: {PAGE_BG}; }}

.nav-link {{ position: relative; color: white; text-decoration: none; transition: all 0.3s; }}
.nav-link:hover {{ transform: translateY(-2px); font-weight: 700; }}
.nav-link::after {{ content: ""; display: block; position: absolute; bottom: -4px; left: 0; width: 0; height: 2px; background: white; transition: all 0.3s; }}
.nav-link:hover::after {{ width: 100%; }}

.cta-button {{ transition: all 0.3s; }}
.cta-button:hover {{ transform: translateY(-4px) scale(1.05); background: {PLUM_DARK} !important; }}

.hero-title {{ font-size: 12vw; }}
.grid-3 {{ display: grid; grid-template-columns: 1fr; gap: 40px; }}
.grid-2 {{ display: grid; grid-template-columns: 1fr; gap: 32px; align-items: center; }}

@media (min-width: 768px) {{
  .hero-title {{ font-size: 10vw; }}
  .grid-3 {{ grid-template-columns: repeat(3, 1fr); }}
  .grid-2 {{ grid-template-columns: repeat(2, 1fr); }}
}}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_css_uses_palette() {
        let css = global_css();
        assert!(css.contains(PAGE_BG));
        assert!(css.contains(PLUM_DARK));
        assert!(css.contains("@media (min-width: 768px)"));
    }

    #[test]
    fn fonts_cover_both_families() {
        assert!(FONTS_HREF.contains("Lexend+Tera"));
        assert!(FONTS_HREF.contains("family=Lexend:"));
    }
}
