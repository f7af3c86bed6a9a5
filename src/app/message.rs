//! Application messages

use std::path::PathBuf;

use iced::time::Instant;

use super::state::ButtonId;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Heart ============
    /// The heart with this id was pressed
    HeartTapped(ButtonId),
    /// A reset scheduled by a tap came due
    BurstFinished { id: ButtonId, token: u64 },
    /// Remove the heart, or put a fresh one back
    ToggleMounted,
    /// Frame tick while something is animating
    AnimationTick(Instant),

    // ============ Settings ============
    ToggleDarkMode,
    /// Background save finished
    SettingsSaved(Result<PathBuf, String>),
}
