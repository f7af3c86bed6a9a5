//! Heart message handlers

use iced::Task;
use iced::time::Instant;

use crate::app::{App, Message};

impl App {
    /// Handle heart taps, delayed resets, frame ticks and mounting
    pub(super) fn handle_button(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::HeartTapped(id) => {
                let id = *id;
                let Some(button) = self.button_mut(id) else {
                    tracing::debug!("Tap for unmounted heart {:?}", id);
                    return Some(Task::none());
                };

                let reset = button.tap(Instant::now());
                tracing::debug!(
                    "Heart {:?} tapped (count {}, loved {})",
                    id,
                    button.heart_count(),
                    button.read_state()
                );

                // Fire and forget; the handle aborts the sleep if the heart goes away
                let (task, handle) = Task::perform(
                    async move {
                        tokio::time::sleep(reset.after).await;
                    },
                    move |_| Message::BurstFinished {
                        id,
                        token: reset.token,
                    },
                )
                .abortable();
                button.track(reset.token, handle);
                Some(task)
            }

            Message::BurstFinished { id, token } => {
                match self.button_mut(*id) {
                    Some(button) => {
                        let applied = button.finish_burst(*token, Instant::now());
                        tracing::debug!("Reset {} for heart {:?} applied: {}", token, id, applied);
                    }
                    None => {
                        tracing::debug!("Discarding reset {} for unmounted heart {:?}", token, id);
                    }
                }
                Some(Task::none())
            }

            Message::AnimationTick(now) => {
                if let Some(mounted) = self.heart.as_mut() {
                    mounted.button.tick(*now);
                }
                Some(Task::none())
            }

            Message::ToggleMounted => {
                if self.unmount().is_none() {
                    self.mount();
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use iced::futures::StreamExt;
    use iced_runtime::Action;
    use iced_runtime::task::into_stream;

    use crate::app::state::ButtonId;
    use crate::app::{App, Message};
    use crate::features::Settings;
    use crate::ui::widgets::favorite_button::RESET_DELAY;

    fn mounted_id(app: &App) -> ButtonId {
        app.heart.as_ref().map(|m| m.id).unwrap()
    }

    #[test]
    fn test_tap_runs_action_on_odd_taps() {
        let mut app = App::with_settings(Settings::default());
        let id = mounted_id(&app);

        for _ in 0..5 {
            let _ = app.update(Message::HeartTapped(id));
        }

        let button = &app.heart.as_ref().unwrap().button;
        assert_eq!(button.heart_count(), 5);
        assert!(button.read_state());
        assert_eq!(button.pending_resets(), 5);
        assert_eq!(app.favorites_fired(), 3);
    }

    #[test]
    fn test_reset_clears_burst() {
        let mut app = App::with_settings(Settings::default());
        let id = mounted_id(&app);

        let _ = app.update(Message::HeartTapped(id));
        assert!(app.heart.as_ref().unwrap().button.is_animating());

        let _ = app.update(Message::BurstFinished { id, token: 1 });
        let button = &app.heart.as_ref().unwrap().button;
        assert!(!button.is_animating());
        assert_eq!(button.pending_resets(), 0);
    }

    #[test]
    fn test_reset_after_unmount_is_discarded() {
        let mut app = App::with_settings(Settings::default());
        let old = mounted_id(&app);
        let _ = app.update(Message::HeartTapped(old));

        let _ = app.update(Message::ToggleMounted);
        assert!(app.heart.is_none());
        let _ = app.update(Message::BurstFinished { id: old, token: 1 });
        assert!(app.heart.is_none());

        // a fresh heart never sees the old heart's reset
        let _ = app.update(Message::ToggleMounted);
        let new = mounted_id(&app);
        assert_ne!(new, old);
        let _ = app.update(Message::HeartTapped(new));
        let _ = app.update(Message::BurstFinished { id: old, token: 1 });
        assert!(app.heart.as_ref().unwrap().button.is_animating());
    }

    #[test]
    fn test_tap_for_unknown_heart_is_ignored() {
        let mut app = App::with_settings(Settings::default());
        let _ = app.update(Message::HeartTapped(ButtonId(999)));
        assert_eq!(app.heart.as_ref().unwrap().button.heart_count(), 0);
        assert_eq!(app.favorites_fired(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_tap_task_delivers_reset_after_delay() {
        let mut app = App::with_settings(Settings::default());
        let id = mounted_id(&app);

        let task = app.update(Message::HeartTapped(id));
        let mut stream = into_stream(task).expect("tap schedules a reset");
        let start = tokio::time::Instant::now();

        let output = stream.next().await;
        assert!(start.elapsed() >= RESET_DELAY);
        assert!(matches!(
            output,
            Some(Action::Output(Message::BurstFinished { id: got, token: 1 })) if got == id
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmount_cancels_inflight_reset() {
        let mut app = App::with_settings(Settings::default());
        let id = mounted_id(&app);

        let task = app.update(Message::HeartTapped(id));
        let stream = into_stream(task).expect("tap schedules a reset");

        let _ = app.update(Message::ToggleMounted);
        assert!(app.heart.is_none());

        let outputs: Vec<_> = stream.collect().await;
        assert!(outputs.is_empty());
    }
}
