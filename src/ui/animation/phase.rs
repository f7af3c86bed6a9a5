//! Two-phase animator keyed to a trigger value
//!
//! Rests on the first phase. Whenever the trigger changes it springs to the
//! second phase, holds it for the curve's duration, then springs back.

use std::time::Duration;

use iced::time::Instant;

use super::spring::{Spring, SpringParams};

/// Which phase the animator is heading toward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Rest,
    Peak,
}

#[derive(Debug, Clone)]
pub struct PhaseAnimator {
    trigger: u64,
    phase: Phase,
    peak_since: Option<Instant>,
    hold: Duration,
    params: SpringParams,
    spring: Spring,
    last_tick: Option<Instant>,
}

impl PhaseAnimator {
    /// `hold` is how long the peak phase is targeted before returning to rest
    pub fn new(params: SpringParams, hold: Duration) -> Self {
        Self {
            trigger: 0,
            phase: Phase::Rest,
            peak_since: None,
            hold,
            params,
            spring: Spring::from_params(0.0, params),
            last_tick: None,
        }
    }

    /// Feed the current trigger value; a change starts a new cycle
    pub fn observe(&mut self, trigger: u64, now: Instant) {
        if trigger == self.trigger {
            return;
        }
        self.trigger = trigger;
        self.advance(now);
        self.phase = Phase::Peak;
        self.peak_since = Some(now);
        self.spring.animate_to(1.0, self.params);
    }

    /// Advance the spring and flip back to rest once the hold has elapsed
    pub fn tick(&mut self, now: Instant) {
        self.advance(now);

        if let (Phase::Peak, Some(since)) = (self.phase, self.peak_since) {
            if now.saturating_duration_since(since) >= self.hold {
                self.phase = Phase::Rest;
                self.peak_since = None;
                self.spring.animate_to(0.0, self.params);
            }
        }
    }

    fn advance(&mut self, now: Instant) {
        match self.last_tick {
            Some(last) if now <= last => {}
            Some(last) => {
                self.spring.update((now - last).as_secs_f64());
                self.last_tick = Some(now);
            }
            None => self.last_tick = Some(now),
        }
    }

    /// Progress toward the peak phase, 0 at rest and 1 at the peak.
    /// Not clamped: the spring may overshoot.
    pub fn progress(&self) -> f32 {
        self.spring.position() as f32
    }

    /// Map progress onto a value range, e.g. a scale from 1.0 to 1.5
    pub fn interpolate(&self, rest: f32, peak: f32) -> f32 {
        rest + (peak - rest) * self.progress()
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        self.phase == Phase::Peak || !self.spring.arrived()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(animator: &mut PhaseAnimator, from: Instant, span: Duration) -> Instant {
        let frame = Duration::from_millis(8);
        let mut elapsed = Duration::ZERO;
        while elapsed < span {
            elapsed += frame;
            animator.tick(from + elapsed);
        }
        from + elapsed
    }

    #[test]
    fn test_rests_until_triggered() {
        let now = Instant::now();
        let mut animator = PhaseAnimator::new(SpringParams::RESET, Duration::from_millis(400));
        animator.tick(now);
        animator.observe(0, now);

        assert_eq!(animator.phase(), Phase::Rest);
        assert_eq!(animator.progress(), 0.0);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_full_cycle_returns_to_rest() {
        let start = Instant::now();
        let params = SpringParams::bouncy(Duration::from_millis(400), 0.4);
        let mut animator = PhaseAnimator::new(params, Duration::from_millis(400));
        animator.tick(start);
        animator.observe(1, start);
        assert_eq!(animator.phase(), Phase::Peak);

        let mid = step(&mut animator, start, Duration::from_millis(200));
        assert!(animator.progress() > 0.5);
        assert!(animator.interpolate(1.0, 1.5) > 1.25);

        step(&mut animator, mid, Duration::from_secs(6));
        assert_eq!(animator.phase(), Phase::Rest);
        assert!(!animator.is_animating());
        assert_eq!(animator.interpolate(1.0, 1.5), 1.0);
    }

    #[test]
    fn test_retrigger_restarts_peak() {
        let start = Instant::now();
        let mut animator = PhaseAnimator::new(SpringParams::RESET, Duration::from_millis(100));
        animator.tick(start);
        animator.observe(1, start);

        let later = start + Duration::from_millis(150);
        animator.tick(later);
        assert_eq!(animator.phase(), Phase::Rest);

        animator.observe(2, later);
        assert_eq!(animator.phase(), Phase::Peak);
        assert!(animator.is_animating());
    }
}
