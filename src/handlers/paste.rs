//! Paste Handler
//!
//! Text pasted into an active input goes into that input; anywhere else the
//! pasted lines are treated as image files to upload.

use crate::App;

pub fn handle_paste(app: &mut App, text: String) {
    if app.model.ui.search_mode {
        app.model.ui.search_query.push_str(text.trim_end_matches(['\r', '\n']));
        return;
    }

    if let Some(modal) = app.model.ui.edit_modal.as_mut() {
        if modal.submitting.is_none() {
            modal.focused_value_mut().push_str(text.trim_end_matches(['\r', '\n']));
        }
        return;
    }

    app.paste_files(text);
}
