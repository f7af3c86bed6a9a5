//! Animated favorite button
//!
//! A heart that toggles between loved and not loved on every tap. Every other
//! tap (the odd ones) also plays a splash burst and calls the owner's action.
//!
//! The widget owns its state but not its clock or its timers: the host feeds
//! in `Instant`s, schedules the [`ScheduledReset`] returned by [`FavoriteButton::tap`]
//! and hands it back through [`FavoriteButton::finish_burst`].

use std::fmt;

use iced::task::Handle;
use iced::widget::button;
use iced::{Element, Size};

use crate::ui::animation::prelude::*;
use crate::ui::primitives::{Anchor, Layer, LayerStack, Paint, Shape, Transform, UnitPoint};
use crate::ui::primitives::view_layer_stack;
use crate::ui::theme;
use crate::ui::widgets::SplashView;

/// Delay between a tap and the reset of the burst flag
pub const RESET_DELAY: Duration = Duration::from_millis(450);

const HEART_SIZE: Size = Size::new(22.0, 20.0);
const BOUNCE_DURATION: Duration = Duration::from_millis(400);
const BOUNCE_EXTRA: f64 = 0.4;
const BOUNCE_PEAK_SCALE: f32 = 1.5;

/// Delayed reset a tap asks the host to deliver later
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledReset {
    /// Tap count at the time the reset was scheduled
    pub token: u64,
    pub after: Duration,
}

/// One splash overlay and the tween driving it
#[derive(Debug, Clone)]
struct SplashOverlay {
    peak_scale: f32,
    tween: Animation<bool>,
}

impl SplashOverlay {
    fn new(peak_scale: f32, duration: Duration, delay: Duration) -> Self {
        Self {
            peak_scale,
            tween: presets::ease_in_out(duration, delay),
        }
    }

    fn transform(&self, now: Instant) -> Transform {
        Transform {
            scale: self.tween.interpolate(0.0, self.peak_scale, now),
            opacity: self.tween.interpolate(0.0, 1.0, now),
            ..Transform::default()
        }
    }
}

pub struct FavoriteButton {
    action: Box<dyn FnMut() + Send>,

    is_loved: bool,
    is_animating: bool,
    heart_count: u64,
    /// Tap count of the most recent burst
    last_burst: u64,
    /// Curve of the most recent state change
    transaction: SpringParams,

    love: Spring,
    bounce: PhaseAnimator,
    splashes: [SplashOverlay; 2],
    splash: SplashView,
    last_tick: Option<Instant>,

    /// Abort-on-drop handles of resets still in flight
    pending: Vec<(u64, Handle)>,
}

impl fmt::Debug for FavoriteButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FavoriteButton")
            .field("is_loved", &self.is_loved)
            .field("is_animating", &self.is_animating)
            .field("heart_count", &self.heart_count)
            .field("last_burst", &self.last_burst)
            .field("pending", &self.pending.len())
            .finish()
    }
}

impl FavoriteButton {
    /// Create a button that calls `action` whenever a burst starts
    pub fn new(action: impl FnMut() + Send + 'static) -> Self {
        Self {
            action: Box::new(action),
            is_loved: false,
            is_animating: false,
            heart_count: 0,
            last_burst: 0,
            transaction: SpringParams::TAP,
            love: Spring::from_params(0.0, SpringParams::TAP),
            bounce: presets::bouncy_phase(BOUNCE_DURATION, BOUNCE_EXTRA),
            splashes: [
                SplashOverlay::new(1.5, Duration::from_millis(300), Duration::from_millis(100)),
                SplashOverlay::new(1.25, Duration::from_millis(500), Duration::ZERO),
            ],
            splash: SplashView::default(),
            last_tick: None,
            pending: Vec::new(),
        }
    }

    /// Whether the heart is in the loved state
    pub fn read_state(&self) -> bool {
        self.is_loved
    }

    /// Whether the splash burst is showing
    pub fn is_animating(&self) -> bool {
        self.is_animating
    }

    pub fn heart_count(&self) -> u64 {
        self.heart_count
    }

    /// Spring curve of the most recent state change
    #[cfg(test)]
    pub fn transaction(&self) -> SpringParams {
        self.transaction
    }

    /// Handle a tap.
    ///
    /// Toggles the loved state every time. Odd taps also start a burst and
    /// call the action. The returned reset must be delivered back through
    /// [`FavoriteButton::finish_burst`] once `after` has elapsed.
    pub fn tap(&mut self, now: Instant) -> ScheduledReset {
        self.tick(now);
        self.heart_count += 1;

        self.transaction = SpringParams::TAP;
        self.is_loved = !self.is_loved;
        self.love
            .animate_to(if self.is_loved { 1.0 } else { 0.0 }, self.transaction);

        if self.heart_count % 2 == 1 {
            // Set rather than toggled so a tap landing inside a running
            // burst re-arms it.
            self.is_animating = true;
            self.last_burst = self.heart_count;
            tracing::debug!("Favorite burst #{} started", self.heart_count);
            (self.action)();
        }

        self.sync_splashes(now);
        self.bounce.observe(self.heart_count, now);

        ScheduledReset {
            token: self.heart_count,
            after: RESET_DELAY,
        }
    }

    /// Deliver a reset scheduled by [`FavoriteButton::tap`].
    ///
    /// Clears the burst flag unless a newer burst started after the reset was
    /// scheduled. Returns whether the reset was applied.
    pub fn finish_burst(&mut self, token: u64, now: Instant) -> bool {
        self.pending.retain(|(pending, _)| *pending > token);

        if token < self.last_burst {
            tracing::debug!(
                "Ignoring stale reset {} (latest burst {})",
                token,
                self.last_burst
            );
            return false;
        }

        self.tick(now);
        self.transaction = SpringParams::RESET;
        self.is_animating = false;
        self.sync_splashes(now);
        true
    }

    /// Keep the task handle of a scheduled reset; dropping the button aborts it
    pub fn track(&mut self, token: u64, handle: Handle) {
        self.pending.push((token, handle.abort_on_drop()));
    }

    #[cfg(test)]
    pub fn pending_resets(&self) -> usize {
        self.pending.len()
    }

    fn sync_splashes(&mut self, now: Instant) {
        for overlay in &mut self.splashes {
            if overlay.tween.value() != self.is_animating {
                overlay.tween.go_mut(self.is_animating, now);
            }
        }
    }

    /// Advance the springs to `now`
    pub fn tick(&mut self, now: Instant) {
        match self.last_tick {
            Some(last) if now <= last => {}
            Some(last) => {
                self.love.update((now - last).as_secs_f64());
                self.last_tick = Some(now);
            }
            None => self.last_tick = Some(now),
        }
        self.bounce.tick(now);
    }

    /// Whether any property is still moving and frames are needed
    pub fn is_settling(&self, now: Instant) -> bool {
        !self.love.arrived()
            || self.bounce.is_animating()
            || self.splashes.iter().any(|s| s.tween.is_animating(now))
    }

    /// Visual layers back to front: two splash overlays, then the plain and
    /// the gradient heart
    pub fn layers(&self, now: Instant) -> Vec<Layer> {
        let bounce = Transform {
            scale: self.bounce.interpolate(1.0, BOUNCE_PEAK_SCALE),
            anchor: Anchor::Bottom,
            ..Transform::default()
        };

        let splashes = self.splashes.iter().map(|overlay| Layer {
            shape: self.splash.shape(),
            paint: SplashView::paint(),
            transform: overlay.transform(now),
        });

        splashes
            .chain([
                Layer {
                    shape: Shape::Heart(HEART_SIZE),
                    paint: Paint::Foreground,
                    transform: bounce,
                },
                Layer {
                    shape: Shape::Heart(HEART_SIZE),
                    paint: self.heart_paint(),
                    transform: bounce,
                },
            ])
            .collect()
    }

    /// Gradient between the resting and loved colors, following the spring
    fn heart_paint(&self) -> Paint {
        let progress = self.love.position() as f32;
        let [rest_top, rest_bottom] = theme::love_colors(false);
        let [loved_top, loved_bottom] = theme::love_colors(true);

        Paint::LinearGradient {
            colors: [
                theme::mix(rest_top, loved_top, progress),
                theme::mix(rest_bottom, loved_bottom, progress),
            ],
            start: UnitPoint::TOP,
            end: UnitPoint::BOTTOM,
        }
    }

    /// Build the button element as it looks at `now`
    pub fn view<'a, Message: Clone + 'a>(
        &self,
        size: f32,
        now: Instant,
        on_press: Message,
    ) -> Element<'a, Message> {
        let stack = LayerStack::new(self.layers(now));

        button(view_layer_stack(stack, size))
            .padding(0)
            .style(theme::heart_button)
            .on_press(on_press)
            .into()
    }
}

impl Drop for FavoriteButton {
    fn drop(&mut self) {
        if !self.pending.is_empty() {
            tracing::debug!("Dropping {} pending favorite resets", self.pending.len());
        }
    }
}
