//! Frame clock for driving reveals

/// Delay between animation frames, ~60fps
pub const FRAME_INTERVAL_MS: u32 = 16;

/// Monotonic milliseconds since page load, wall clock if `performance` is missing
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

