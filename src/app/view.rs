//! Application view rendering

use iced::time::Instant;
use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Fill};

use super::App;
use super::message::Message;
use crate::ui::theme;

impl App {
    /// Build the main view
    pub fn view(&self) -> Element<'_, Message> {
        let size = self.settings.display.button_size;
        let now = Instant::now();

        let heart: Element<'_, Message> = match &self.heart {
            Some(mounted) => mounted
                .button
                .view(size, now, Message::HeartTapped(mounted.id)),
            None => container(text("Heart removed").size(13).style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            }))
            .center_x(size)
            .center_y(size)
            .into(),
        };

        let (loved, bursting, taps) = self
            .heart
            .as_ref()
            .map(|m| {
                (
                    m.button.read_state(),
                    m.button.is_animating(),
                    m.button.heart_count(),
                )
            })
            .unwrap_or((false, false, 0));

        let status = container(
            column![
                text(format!("Loved: {}", if loved { "yes" } else { "no" })).size(14),
                text(format!("Burst: {}", if bursting { "playing" } else { "idle" })).size(14),
                text(format!("Taps: {}", taps)).size(14),
                text(format!("Favorites fired: {}", self.favorites_fired())).size(14),
            ]
            .spacing(6),
        )
        .padding(16)
        .style(theme::card);

        let mount_label = if self.heart.is_some() {
            "Remove heart"
        } else {
            "Add heart"
        };
        let theme_label = if self.settings.display.dark_mode {
            "Light mode"
        } else {
            "Dark mode"
        };

        let controls = row![
            button(text(mount_label).size(13))
                .padding([8, 16])
                .style(theme::secondary_button)
                .on_press(Message::ToggleMounted),
            button(text(theme_label).size(13))
                .padding([8, 16])
                .style(theme::secondary_button)
                .on_press(Message::ToggleDarkMode),
        ]
        .spacing(12);

        let content = column![
            text("Heartburst").size(22),
            Space::new().height(8),
            heart,
            status,
            controls,
        ]
        .spacing(24)
        .align_x(Alignment::Center);

        container(content)
            .center(Fill)
            .style(theme::main_content)
            .into()
    }
}
