//! Bounded - macro for range-constrained f32 newtypes
//!
//! `new` is const so out-of-range literals in variant tables fail at compile
//! time. Everything else saturates at the bounds.

/// Creates a bounded f32 type with min/max constraints.
///
/// # Example
/// ```ignore
/// bounded_f32!(Opacity, 0.0, 1.0);
/// let o = Opacity::new(0.5);
/// let o2 = o + 0.7;  // Opacity(1.0) - clamped to max
/// ```
macro_rules! bounded_f32 {
    ($name:ident, $min:expr, $max:expr) => {
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
        pub struct $name(f32);

        impl $name {
            pub const MIN: f32 = $min;
            pub const MAX: f32 = $max;

            #[track_caller]
            pub const fn new(value: f32) -> Self {
                if value < Self::MIN || value > Self::MAX {
                    panic!(concat!(
                        stringify!($name),
                        " value out of bounds [",
                        stringify!($min),
                        ", ",
                        stringify!($max),
                        "]"
                    ));
                }
                Self(value)
            }

            /// Saturates at the bounds. NaN maps to MIN.
            pub fn clamped(value: f32) -> Self {
                if value.is_nan() {
                    return Self(Self::MIN);
                }
                Self(value.clamp(Self::MIN, Self::MAX))
            }

            pub const fn value(&self) -> f32 {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self(Self::MIN)
            }
        }

        impl std::ops::Add<f32> for $name {
            type Output = Self;
            fn add(self, rhs: f32) -> Self::Output {
                Self::clamped(self.0 + rhs)
            }
        }

        impl std::ops::Sub<f32> for $name {
            type Output = Self;
            fn sub(self, rhs: f32) -> Self::Output {
                Self::clamped(self.0 - rhs)
            }
        }
    };
}

pub(crate) use bounded_f32;
