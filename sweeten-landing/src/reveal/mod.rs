//! Scroll reveal - fade-up entrance animations
//!
//! Elements start in the `hidden` variant and move to `visible` exactly once,
//! either on mount or on first viewport intersection.

pub mod clock;
pub mod component;
pub mod state;
pub mod variants;
pub mod viewport;

pub use component::{Reveal, RevealIds};
pub use viewport::RevealOn;
