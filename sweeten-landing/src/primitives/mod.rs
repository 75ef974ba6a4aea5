//! Visual primitives - the values a reveal interpolates between
//!
//! Each primitive:
//! - `to_css()` → CSS declaration or value
//! - const constructors so variant tables can live in `const` items

#[macro_use]
pub mod bounded;
pub mod easing;
pub mod offset;
pub mod opacity;
pub mod progress;

pub use easing::Easing;
pub use offset::Offset;
pub use opacity::Opacity;
pub use progress::Progress;
