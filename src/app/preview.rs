//! Image open orchestration
//!
//! Resolves the selected image's URL (with placeholder fallback) in the
//! background, then hands it to the configured open command.

use std::process::{Command, Stdio};

use crate::App;

impl App {
    /// Start opening the selected card if it is an image
    pub(crate) fn open_selected_image(&mut self) {
        if self.open_command.is_none() {
            self.model
                .ui
                .show_error("Error: open_command not configured");
            return;
        }

        let Some(card) = self.model.navigation.selected_card() else {
            return;
        };
        if !card.is_image() {
            self.model.ui.show_warning("Selected item is not an image.");
            return;
        }

        self.api.resolve_image(card.path.clone());
    }

    /// Spawn the open command for a resolved URL without waiting on it
    pub(crate) fn open_url(&mut self, url: String) {
        let Some(open_cmd) = self.open_command.as_deref() else {
            return;
        };

        let result = Command::new(open_cmd)
            .arg(&url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match result {
            Ok(_child) => {
                tracing::debug!(%open_cmd, %url, "spawned open command");
                self.model.ui.show_toast(format!("Opened: {}", url));
            }
            Err(e) => {
                tracing::warn!(%open_cmd, error = %e, "failed to execute open command");
                self.model
                    .ui
                    .show_error(format!("Error: Failed to open with '{}'", open_cmd));
            }
        }
    }
}
