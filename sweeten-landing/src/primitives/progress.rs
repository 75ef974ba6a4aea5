//! Progress - normalised position within a transition

bounded_f32!(Progress, 0.0, 1.0);

impl Progress {
    pub const END: Self = Self::new(1.0);

    /// Elapsed time over duration. A zero-length transition is already done.
    pub fn from_elapsed(elapsed_ms: f64, duration_ms: f64) -> Self {
        if duration_ms <= 0.0 {
            return Self::END;
        }
        Self::clamped((elapsed_ms / duration_ms) as f32)
    }
}
