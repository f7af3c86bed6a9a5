//! Main application module

pub mod helpers;
mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use crate::features::Settings;
pub use message::Message;
pub use state::App;

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        tracing::info!(
            "Starting with dark mode {}, button size {}",
            settings.display.dark_mode,
            settings.display.button_size
        );
        (Self::with_settings(settings), Task::none())
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        if self.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title reflecting the loved state
    pub fn title(&self) -> String {
        match &self.heart {
            Some(mounted) if mounted.button.read_state() => "Heartburst ♥".to_string(),
            _ => "Heartburst".to_string(),
        }
    }

    /// Frame subscription while the heart is animating
    pub fn subscription(&self) -> iced::Subscription<Message> {
        let now = iced::time::Instant::now();

        if self.has_active_animations(now) {
            iced::window::frames().map(Message::AnimationTick)
        } else {
            iced::Subscription::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use iced::time::Instant;

    use super::*;

    #[test]
    fn no_frames_at_rest() {
        let app = App::with_settings(Settings::default());
        assert!(!app.has_active_animations(Instant::now()));
    }

    #[test]
    fn frames_while_heart_settles() {
        let mut app = App::with_settings(Settings::default());
        let id = app.heart.as_ref().map(|m| m.id).unwrap();
        let _ = app.update(Message::HeartTapped(id));

        let now = Instant::now();
        assert!(app.has_active_animations(now));

        // once the reset lands and everything settles the frames stop
        let _ = app.update(Message::BurstFinished { id, token: 1 });
        let mut at = now;
        for _ in 0..800 {
            at += Duration::from_millis(10);
            let _ = app.update(Message::AnimationTick(at));
        }
        assert!(!app.has_active_animations(at));
    }

    #[test]
    fn theme_follows_settings() {
        let mut app = App::with_settings(Settings::default());
        assert_eq!(app.theme(), Theme::Dark);
        app.settings.display.dark_mode = false;
        assert_eq!(app.theme(), Theme::Light);
    }

    #[test]
    fn title_marks_loved_heart() {
        let mut app = App::with_settings(Settings::default());
        assert_eq!(app.title(), "Heartburst");
        let id = app.heart.as_ref().map(|m| m.id).unwrap();
        let _ = app.update(Message::HeartTapped(id));
        assert_eq!(app.title(), "Heartburst ♥");
    }
}
