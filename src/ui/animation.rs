//! Animation system for the favorite button
//!
//! Two kinds of motion are combined here:
//!
//! - Springs (`spring`), used for state changes made inside an animation
//!   transaction and for the heart bounce
//! - Eased tweens, using iced's `Animation<bool>` with explicit duration and
//!   delay, used for the splash overlays
//!
//! # Usage
//!
//! ```rust
//! use crate::ui::animation::prelude::*;
//!
//! // Ease-in-out fade that waits 100ms before starting
//! let fade = presets::ease_in_out(Duration::from_millis(300), Duration::from_millis(100));
//!
//! // Spring animation
//! let scale = Spring::from_params(1.0, SpringParams::TAP);
//! ```

mod phase;
pub mod prelude;
mod spring;

pub use phase::PhaseAnimator;
pub use spring::{Spring, SpringParams};
