//! Offset - vertical displacement from an element's layout position
//!
//! Positive values push the element down, in CSS pixels.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub y: f32,
}

impl Offset {
    pub const ZERO: Self = Self { y: 0.0 };

    pub const fn down(y: f32) -> Self {
        Self { y }
    }

    pub fn lerp(self, to: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            y: self.y + (to.y - self.y) * t,
        }
    }

    pub fn to_css(&self) -> String {
        format!("transform: translateY({:.2}px);", self.y)
    }
}
