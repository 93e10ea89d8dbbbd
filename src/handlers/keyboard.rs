//! Keyboard Input Handler
//!
//! Routes key presses to the edit modal, the search input, or the browser
//! panes, in that order of precedence.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::App;
use visionvault::model::CardAction;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.model.ui.should_quit = true;
        return;
    }

    if app.model.ui.edit_modal.is_some() {
        handle_edit_modal_key(app, key);
        return;
    }

    if app.model.ui.search_mode {
        handle_search_key(app, key);
        return;
    }

    handle_browser_key(app, key);
}

fn handle_edit_modal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.model.close_modal(),
        KeyCode::Enter => {
            let request = app.model.submit_edit();
            app.dispatch(request);
        }
        _ => {
            let Some(modal) = app.model.ui.edit_modal.as_mut() else {
                return;
            };
            // Form is read-only while the submit is in flight
            if modal.submitting.is_some() {
                return;
            }
            match key.code {
                KeyCode::Tab | KeyCode::Down => modal.focused = modal.focused.next(),
                KeyCode::BackTab | KeyCode::Up => modal.focused = modal.focused.prev(),
                KeyCode::Backspace => {
                    modal.focused_value_mut().pop();
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    modal.focused_value_mut().push(c);
                }
                _ => {}
            }
        }
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.model.ui.search_mode = false;
            app.model.ui.search_query.clear();
        }
        KeyCode::Enter => {
            app.model.ui.search_mode = false;
            let query = app.model.ui.search_query.clone();
            let request = app.model.search(&query);
            app.dispatch(request);
        }
        KeyCode::Backspace => {
            app.model.ui.search_query.pop();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.model.ui.search_query.push(c);
        }
        _ => {}
    }
}

fn handle_browser_key(app: &mut App, key: KeyEvent) {
    let vim_mode = app.model.ui.vim_mode;
    let columns = app.model.ui.grid_columns;
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('q') => app.model.ui.should_quit = true,

        KeyCode::Char('f') if ctrl => app.model.ui.search_mode = true,
        KeyCode::Char('/') => app.model.ui.search_mode = true,

        KeyCode::Char('v') if ctrl => app.paste_from_clipboard(),

        KeyCode::Tab => {
            let has_tree = !app.model.navigation.tree.is_empty();
            app.model.navigation.focus =
                visionvault::logic::ui::cycle_focus(app.model.navigation.focus, has_tree);
        }

        KeyCode::Down => app.model.navigation.move_down(columns),
        KeyCode::Up => app.model.navigation.move_up(columns),
        KeyCode::Right => app.model.navigation.move_right(),
        KeyCode::Left => app.model.navigation.move_left(),
        KeyCode::Char('j') if vim_mode => app.model.navigation.move_down(columns),
        KeyCode::Char('k') if vim_mode => app.model.navigation.move_up(columns),
        KeyCode::Char('l') if vim_mode => app.model.navigation.move_right(),
        KeyCode::Char('h') if vim_mode => app.model.navigation.move_left(),

        KeyCode::Enter => {
            let request = app.model.activate_selected();
            app.dispatch(request);
        }

        KeyCode::Backspace => {
            let request = app.model.navigate_up();
            app.dispatch(request);
        }

        KeyCode::Char('r') => {
            let request = app.model.refresh();
            app.dispatch(request);
        }

        KeyCode::Char('e') => {
            let selected = app
                .model
                .navigation
                .selected_card()
                .filter(|card| card.action == CardAction::Edit)
                .cloned();
            if let Some(card) = selected {
                app.model.open_edit_modal(
                    &card.path,
                    &card.name,
                    card.tags.as_deref(),
                    card.description.as_deref(),
                );
            }
        }

        KeyCode::Char('o') => app.open_selected_image(),

        _ => {}
    }
}
