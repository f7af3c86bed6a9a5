//! Spring physics for state-driven animations
//!
//! Uses time-based analytical solutions rather than frame-by-frame integration,
//! so a spring evaluated at `t` gives the same answer no matter how the frames
//! were spaced.
//!
//! ## Presets
//!
//! | Usage | mass | stiffness | damping |
//! |-------|------|-----------|---------|
//! | Tap transaction | 1 | 170 | 5 |
//! | Reset transaction | 1 | 170 | 10 |
//! | Heart bounce (`bouncy(0.4, 0.4)`) | 1 | ≈246.7 | ≈9.42 |
//!
//! ### Overdamped formula
//! ```text
//! angular_frequency = -sqrt(stiffness / mass)
//! leftover = -angular_frequency * delta - velocity
//! position(t) = to - (delta + t * leftover) * e^(t * angular_frequency)
//! ```
//!
//! ### Underdamped formula
//! ```text
//! damping_frequency = sqrt(4 * mass * stiffness - damping^2)
//! leftover = (damping * delta - 2 * mass * velocity) / damping_frequency
//! dfm = 0.5 * damping_frequency / mass
//! dm = -0.5 * damping / mass
//! position(t) = to - (cos(t * dfm) * delta + sin(t * dfm) * leftover) * e^(t * dm)
//! ```

use std::f64::consts::{E, PI};
use std::time::Duration;

pub type Num = f64;

/// Numerical derivative step size
const H: Num = 0.001;

/// Below this distance/velocity/acceleration the spring snaps to its target
const REST_THRESHOLD: Num = 0.01;

/// Base bounce of the runtime's `bouncy` preset
const BOUNCY_BASE: Num = 0.3;

/// Spring parameters for physics simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    pub mass: Num,
    pub stiffness: Num,
    pub damping: Num,
}

impl SpringParams {
    /// Spring applied to state changes made by a tap
    pub const TAP: Self = Self::interpolating(170.0, 5.0);

    /// Spring applied when the burst flag is cleared after a tap
    pub const RESET: Self = Self::interpolating(170.0, 10.0);

    /// Spring with unit mass and explicit stiffness/damping
    pub const fn interpolating(stiffness: Num, damping: Num) -> Self {
        Self {
            mass: 1.0,
            stiffness,
            damping,
        }
    }

    /// Spring described by its perceptual duration and bounce.
    ///
    /// `bounce` of 0 is critically damped, values toward 1 oscillate longer.
    pub fn with_duration(duration: Duration, bounce: Num) -> Self {
        let duration = duration.as_secs_f64().max(H);
        let stiffness = (2.0 * PI / duration).powi(2);
        let damping = 4.0 * PI * (1.0 - bounce) / duration;
        Self {
            mass: 1.0,
            stiffness,
            damping: damping.max(0.0),
        }
    }

    /// The runtime's `bouncy` preset with extra bounce on top of its base
    pub fn bouncy(duration: Duration, extra_bounce: Num) -> Self {
        Self::with_duration(duration, BOUNCY_BASE + extra_bounce)
    }

    /// Check if overdamped: 1.0 <= damping / (2.0 * sqrt(stiffness * mass))
    pub fn is_overdamped(&self) -> bool {
        1.0 <= self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

impl Default for SpringParams {
    fn default() -> Self {
        Self::interpolating(100.0, 10.0)
    }
}

/// Closed-form trajectory from one position toward a target
#[derive(Debug, Clone, Copy)]
struct Solution {
    from: Num,
    to: Num,
    velocity: Num,
    params: SpringParams,
}

impl Solution {
    fn at_rest(position: Num) -> Self {
        Self {
            from: position,
            to: position,
            velocity: 0.0,
            params: SpringParams::default(),
        }
    }

    fn position(&self, t: Num) -> Num {
        if t <= 0.0 {
            return self.from;
        }

        let SpringParams {
            mass,
            stiffness,
            damping,
        } = self.params;
        let delta = self.to - self.from;

        if delta == 0.0 && self.velocity == 0.0 {
            return self.to;
        }

        if self.params.is_overdamped() {
            let angular_frequency = -(stiffness / mass).sqrt();
            let leftover = -angular_frequency * delta - self.velocity;
            self.to - (delta + t * leftover) * E.powf(t * angular_frequency)
        } else {
            let damping_frequency = (4.0 * mass * stiffness - damping.powi(2)).sqrt();
            let leftover = (damping * delta - 2.0 * mass * self.velocity) / damping_frequency;
            let dfm = 0.5 * damping_frequency / mass;
            let dm = -0.5 * damping / mass;
            self.to - ((t * dfm).cos() * delta + (t * dfm).sin() * leftover) * E.powf(t * dm)
        }
    }

    fn velocity(&self, t: Num) -> Num {
        (self.position(t + H) - self.position((t - H).max(0.0))) / (t + H - (t - H).max(0.0))
    }

    fn acceleration(&self, t: Num) -> Num {
        (self.velocity(t + H) - self.velocity((t - H).max(0.0))) / (t + H - (t - H).max(0.0))
    }
}

/// Spring animation with analytical solution
///
/// Retargeting keeps the current position and velocity, so a change of heart
/// mid-flight bends the curve instead of restarting it.
#[derive(Debug, Clone)]
pub struct Spring {
    current_position: Num,
    target_position: Num,
    current_time: Num,
    params: SpringParams,
    solution: Solution,
}

impl Spring {
    /// Create spring at rest at the given position
    pub fn new(current_position: Num) -> Self {
        Self {
            current_position,
            target_position: current_position,
            current_time: 0.0,
            params: SpringParams::default(),
            solution: Solution::at_rest(current_position),
        }
    }

    /// Create spring with custom params
    pub fn from_params(current_position: Num, params: SpringParams) -> Self {
        let mut spring = Self::new(current_position);
        spring.params = params;
        spring
    }

    /// Restart the trajectory from the current state
    fn reset_solver(&mut self) {
        let velocity = self.velocity();
        self.current_time = 0.0;
        self.solution = Solution {
            from: self.current_position,
            to: self.target_position,
            velocity,
            params: self.params,
        };
    }

    /// Check if spring has arrived at target
    pub fn arrived(&self) -> bool {
        (self.target_position - self.current_position).abs() < REST_THRESHOLD
            && self.velocity().abs() < REST_THRESHOLD
            && self.acceleration().abs() < REST_THRESHOLD
    }

    /// Set position immediately without animation
    pub fn set_position(&mut self, position: Num) {
        self.target_position = position;
        self.current_position = position;
        self.current_time = 0.0;
        self.solution = Solution::at_rest(position);
    }

    /// Update spring state - call every frame
    ///
    /// `delta` is the time since the last update in seconds.
    pub fn update(&mut self, delta: Num) {
        self.current_time += delta.max(0.0);
        self.current_position = self.solution.position(self.current_time);

        if self.arrived() {
            self.set_position(self.target_position);
        }
    }

    /// Retarget with new parameters, as a new animation transaction does
    pub fn animate_to(&mut self, target: Num, params: SpringParams) {
        self.params = params;
        self.target_position = target;
        self.reset_solver();
    }

    pub fn position(&self) -> Num {
        self.current_position
    }

    #[cfg(test)]
    pub fn target(&self) -> Num {
        self.target_position
    }

    pub fn velocity(&self) -> Num {
        self.solution.velocity(self.current_time)
    }

    pub fn acceleration(&self) -> Num {
        self.solution.acceleration(self.current_time)
    }

    #[cfg(test)]
    pub fn params(&self) -> &SpringParams {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(spring: &mut Spring, seconds: Num) {
        let steps = (seconds * 120.0).round() as usize;
        for _ in 0..steps {
            spring.update(1.0 / 120.0);
        }
    }

    #[test]
    fn test_presets() {
        assert_eq!(SpringParams::TAP.stiffness, 170.0);
        assert_eq!(SpringParams::TAP.damping, 5.0);
        assert_eq!(SpringParams::RESET.damping, 10.0);
        assert!(!SpringParams::TAP.is_overdamped());
    }

    #[test]
    fn test_bouncy_conversion() {
        let params = SpringParams::bouncy(Duration::from_millis(400), 0.4);
        let expected_stiffness = (2.0 * PI / 0.4).powi(2);
        let expected_damping = 4.0 * PI * 0.3 / 0.4;
        assert!((params.stiffness - expected_stiffness).abs() < 1e-9);
        assert!((params.damping - expected_damping).abs() < 1e-9);
        assert!(!params.is_overdamped());
    }

    #[test]
    fn test_zero_bounce_is_critically_damped() {
        let params = SpringParams::with_duration(Duration::from_millis(500), 0.0);
        assert!(params.is_overdamped());
    }

    #[test]
    fn test_spring_settles_on_target() {
        let mut spring = Spring::new(0.0);
        spring.animate_to(1.0, SpringParams::RESET);
        assert!(!spring.arrived());

        run(&mut spring, 5.0);
        assert!(spring.arrived());
        assert_eq!(spring.position(), 1.0);
    }

    #[test]
    fn test_underdamped_spring_overshoots() {
        let mut spring = Spring::new(0.0);
        spring.animate_to(1.0, SpringParams::TAP);

        let mut peak: Num = 0.0;
        for _ in 0..240 {
            spring.update(1.0 / 120.0);
            peak = peak.max(spring.position());
        }
        assert!(peak > 1.2, "peak was {peak}");
    }

    #[test]
    fn test_retarget_keeps_position() {
        let mut spring = Spring::new(0.0);
        spring.animate_to(1.0, SpringParams::TAP);
        run(&mut spring, 0.05);
        let before = spring.position();

        spring.animate_to(0.0, SpringParams::RESET);
        assert_eq!(spring.position(), before);
        assert_eq!(spring.params(), &SpringParams::RESET);
        assert_eq!(spring.target(), 0.0);
    }

    #[test]
    fn test_set_position_is_immediate() {
        let mut spring = Spring::new(0.0);
        spring.set_position(3.0);
        assert!(spring.arrived());
        spring.update(0.1);
        assert_eq!(spring.position(), 3.0);
    }
}
