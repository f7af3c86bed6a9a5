//! Async helper functions

use std::path::PathBuf;

use anyhow::Context;

use crate::features::Settings;

/// Write settings to the config directory off the UI thread
pub async fn save_settings(settings: Settings) -> anyhow::Result<PathBuf> {
    tokio::task::spawn_blocking(move || settings.save())
        .await
        .context("settings writer panicked")?
        .context("failed to save settings")
}
