//! Settings message handlers

use iced::Task;

use crate::app::{App, Message, helpers};

impl App {
    /// Handle settings changes and their persistence
    pub(super) fn handle_settings(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ToggleDarkMode => {
                self.settings.display.dark_mode = !self.settings.display.dark_mode;
                tracing::info!("Dark mode: {}", self.settings.display.dark_mode);
                Some(Task::perform(
                    helpers::save_settings(self.settings.clone()),
                    |result| Message::SettingsSaved(result.map_err(|e| format!("{:#}", e))),
                ))
            }

            Message::SettingsSaved(result) => {
                match result {
                    Ok(path) => tracing::info!("Settings saved to {}", path.display()),
                    Err(e) => tracing::warn!("Failed to save settings: {}", e),
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}
