//! Animation prelude - commonly used types re-exported for convenience
//!
//! # Usage
//!
//! ```rust
//! use crate::ui::animation::prelude::*;
//! ```

pub use std::time::Duration;

pub use iced::animation::{Animation, Easing};
pub use iced::time::Instant;

pub use super::{PhaseAnimator, Spring, SpringParams};

/// Animation presets for common use cases
pub mod presets {
    use super::*;

    /// Ease-in-out tween over a boolean state, starting after `delay`
    pub fn ease_in_out(duration: Duration, delay: Duration) -> Animation<bool> {
        Animation::new(false)
            .easing(Easing::EaseInOut)
            .duration(duration)
            .delay(delay)
    }

    /// Bouncy two-phase animator with the runtime's `bouncy` spring
    pub fn bouncy_phase(duration: Duration, extra_bounce: f64) -> PhaseAnimator {
        PhaseAnimator::new(SpringParams::bouncy(duration, extra_bounce), duration)
    }
}
