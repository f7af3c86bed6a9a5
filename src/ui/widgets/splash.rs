//! Splash ornament
//!
//! Two concentric rings of eight dots used as a background burst. The second
//! ring sits slightly further out and is turned 12° against the first.

use crate::ui::primitives::{Dot, Paint, Shape, UnitPoint};
use crate::ui::theme;

const DOTS_PER_RING: usize = 8;
const RING_STEP_DEGREES: f32 = 45.0;
const INNER_RING_OFFSET: f32 = 24.0;
const OUTER_RING_OFFSET: f32 = 26.0;
const OUTER_RING_ROTATION: f32 = 12.0;
const DOT_DIAMETER: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplashView {
    /// Pushes the dots out to their ring radius. Always on.
    inner_gap: bool,
}

impl Default for SplashView {
    fn default() -> Self {
        Self { inner_gap: true }
    }
}

impl SplashView {
    fn ring(&self, offset: f32, rotation: f32) -> impl Iterator<Item = Dot> {
        let offset = if self.inner_gap { offset } else { 0.0 };
        (0..DOTS_PER_RING).map(move |i| Dot {
            offset,
            rotation: i as f32 * RING_STEP_DEGREES + rotation,
            diameter: DOT_DIAMETER,
        })
    }

    /// All sixteen dots, inner ring first
    pub fn dots(&self) -> Vec<Dot> {
        self.ring(INNER_RING_OFFSET, 0.0)
            .chain(self.ring(OUTER_RING_OFFSET, OUTER_RING_ROTATION))
            .collect()
    }

    pub fn shape(&self) -> Shape {
        Shape::Dots(self.dots())
    }

    /// Pink to orange, bottom to leading edge of each dot
    pub fn paint() -> Paint {
        Paint::LinearGradient {
            colors: [theme::PINK, theme::ORANGE],
            start: UnitPoint::BOTTOM,
            end: UnitPoint::LEADING,
        }
    }
}
