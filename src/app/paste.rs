//! Paste-upload orchestration
//!
//! Clipboard content is read in the background; once it arrives the model
//! decides which items are images and where they go.

use visionvault::logic::clipboard::ClipboardItem;
use visionvault::model::controller::PasteOutcome;

use crate::App;

impl App {
    /// Ctrl-V: read the clipboard image through the configured command
    pub(crate) fn paste_from_clipboard(&mut self) {
        match self.clipboard_command.clone() {
            Some(command) => self.api.read_clipboard_command(command),
            None => self
                .model
                .ui
                .show_error("Error: clipboard_command not configured"),
        }
    }

    /// Bracketed paste outside of text inputs: treat lines as file paths
    pub(crate) fn paste_files(&mut self, text: String) {
        self.api.read_pasted_files(text);
    }

    /// Clipboard content arrived: upload every image to the current folder
    pub(crate) fn handle_clipboard_items(
        &mut self,
        explicit: bool,
        items: anyhow::Result<Vec<ClipboardItem>>,
    ) {
        let items = match items {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read clipboard");
                self.model
                    .ui
                    .show_error(format!("Error reading clipboard: {:#}", e));
                return;
            }
        };

        match self.model.paste_images(items) {
            PasteOutcome::Upload(requests) => {
                for request in requests {
                    self.api.dispatch(request);
                }
            }
            PasteOutcome::NoImages if explicit => {
                self.model.ui.show_warning("Clipboard does not contain an image.");
            }
            PasteOutcome::NoImages | PasteOutcome::NoFolder => {}
        }
    }
}
