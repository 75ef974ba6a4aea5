//! Opacity - element transparency with CSS output

bounded_f32!(Opacity, 0.0, 1.0);

impl Opacity {
    pub const HIDDEN: Self = Self::new(0.0);
    pub const VISIBLE: Self = Self::new(1.0);

    /// Interpolate towards `to`; `t` outside [0, 1] is clamped
    pub fn lerp(self, to: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self::clamped(self.value() + (to.value() - self.value()) * t)
    }

    /// Emitted at every value, full opacity included
    pub fn to_css(&self) -> String {
        format!("opacity: {:.3};", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opacity_css() {
        assert_eq!(Opacity::VISIBLE.to_css(), "opacity: 1.000;");
        assert_eq!(Opacity::HIDDEN.to_css(), "opacity: 0.000;");
        assert_eq!(Opacity::new(0.25).to_css(), "opacity: 0.250;");
    }

    #[test]
    fn opacity_lerp() {
        assert_eq!(Opacity::HIDDEN.lerp(Opacity::VISIBLE, 0.25).value(), 0.25);
        assert_eq!(Opacity::VISIBLE.lerp(Opacity::HIDDEN, 0.25).value(), 0.75);
        assert_eq!(Opacity::HIDDEN.lerp(Opacity::VISIBLE, 3.0), Opacity::VISIBLE);
        assert_eq!(Opacity::HIDDEN.lerp(Opacity::VISIBLE, -1.0), Opacity::HIDDEN);
    }
}
