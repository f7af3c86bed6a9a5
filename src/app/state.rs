//! Application state

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use iced::time::Instant;

use crate::features::Settings;
use crate::ui::widgets::FavoriteButton;

/// Identifies one mounted heart. Never reused, so messages addressed to an
/// unmounted heart can't reach its successor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ButtonId(pub u64);

#[derive(Debug)]
pub struct MountedButton {
    pub id: ButtonId,
    pub button: FavoriteButton,
}

/// Main application state
#[derive(Debug)]
pub struct App {
    pub settings: Settings,
    pub heart: Option<MountedButton>,
    next_id: u64,
    /// How many times a heart's action has run
    favorites: Arc<AtomicUsize>,
}

impl App {
    pub fn with_settings(settings: Settings) -> Self {
        let mut app = Self {
            settings,
            heart: None,
            next_id: 0,
            favorites: Arc::new(AtomicUsize::new(0)),
        };
        app.mount();
        app
    }

    /// Mount a fresh heart, replacing any existing one
    pub fn mount(&mut self) -> ButtonId {
        self.next_id += 1;
        let id = ButtonId(self.next_id);

        let favorites = Arc::clone(&self.favorites);
        let button = FavoriteButton::new(move || {
            let total = favorites.fetch_add(1, Ordering::Relaxed) + 1;
            tracing::info!("Favorited ({} total)", total);
        });

        tracing::info!("Mounted heart {:?}", id);
        self.heart = Some(MountedButton { id, button });
        id
    }

    /// Drop the current heart along with its pending resets
    pub fn unmount(&mut self) -> Option<ButtonId> {
        let mounted = self.heart.take()?;
        tracing::info!("Unmounted heart {:?}", mounted.id);
        Some(mounted.id)
    }

    pub fn button_mut(&mut self, id: ButtonId) -> Option<&mut FavoriteButton> {
        self.heart
            .as_mut()
            .filter(|mounted| mounted.id == id)
            .map(|mounted| &mut mounted.button)
    }

    pub fn favorites_fired(&self) -> usize {
        self.favorites.load(Ordering::Relaxed)
    }

    /// Check if the mounted heart still needs frames
    pub fn has_active_animations(&self, now: Instant) -> bool {
        self.heart
            .as_ref()
            .is_some_and(|mounted| mounted.button.is_settling(now))
    }
}
