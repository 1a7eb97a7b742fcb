//! Translation of Zellij key presses into application events.
//!
//! The same key means different things per mode: `j` moves the cursor in the
//! list but is a letter in the editor or the search box. [`map_key`] resolves
//! that using the current [`InputMode`].
//!
//! # Keybindings
//!
//! Global outside the editor:
//! - `Ctrl+n` / `Ctrl+p`: move down / up
//!
//! List:
//! - `j`/`Down`, `k`/`Up`: move
//! - `a`: add, `e`/`Enter`: edit, `d`: delete
//! - `/`: search, `q`: close
//!
//! Search, typing: characters, `Backspace`, `Enter` (focus results), `Esc`
//!
//! Search, navigating: like the list, plus `/` (edit query) and `Esc` (exit)
//!
//! Editor: characters, `Backspace`, `Tab`/`Up`/`Down` (switch field),
//! `Enter` (save), `Esc` (cancel)
//!
//! Confirmation: `y`/`Enter` (delete), `n`/`Esc` (cancel)

use super::handler::Event;
use super::modes::{InputMode, SearchFocus};
use zellij_tile::prelude::{BareKey, KeyModifier, KeyWithModifier};

/// Maps a key press to an event, or `None` if the key is unbound in `mode`.
#[must_use]
pub fn map_key(mode: InputMode, key: &KeyWithModifier) -> Option<Event> {
    let ctrl = key.has_modifiers(&[KeyModifier::Ctrl]);

    match mode {
        InputMode::Editor(_) => map_editor_key(key, ctrl),
        InputMode::ConfirmDelete { .. } => map_confirm_key(key),
        InputMode::Search(SearchFocus::Typing) => map_search_typing_key(key, ctrl),
        InputMode::Search(SearchFocus::Navigating) => map_list_key(key, ctrl, true),
        InputMode::Browse => map_list_key(key, ctrl, false),
    }
}

fn map_list_key(key: &KeyWithModifier, ctrl: bool, searching: bool) -> Option<Event> {
    if ctrl {
        return match key.bare_key {
            BareKey::Char('n') => Some(Event::KeyDown),
            BareKey::Char('p') => Some(Event::KeyUp),
            _ => None,
        };
    }

    Some(match key.bare_key {
        BareKey::Down | BareKey::Char('j') => Event::KeyDown,
        BareKey::Up | BareKey::Char('k') => Event::KeyUp,
        BareKey::Char('a') => Event::AddUser,
        BareKey::Enter | BareKey::Char('e') => Event::EditSelected,
        BareKey::Char('d') => Event::DeleteSelected,
        BareKey::Char('/') if searching => Event::FocusSearchBar,
        BareKey::Char('/') => Event::SearchMode,
        BareKey::Esc if searching => Event::ExitSearch,
        BareKey::Char('q') if !searching => Event::CloseFocus,
        _ => return None,
    })
}

fn map_search_typing_key(key: &KeyWithModifier, ctrl: bool) -> Option<Event> {
    if ctrl {
        return match key.bare_key {
            BareKey::Char('n') => Some(Event::KeyDown),
            BareKey::Char('p') => Some(Event::KeyUp),
            _ => None,
        };
    }

    Some(match key.bare_key {
        BareKey::Down => Event::KeyDown,
        BareKey::Up => Event::KeyUp,
        BareKey::Enter => Event::FocusResults,
        BareKey::Esc => Event::ExitSearch,
        BareKey::Backspace => Event::Backspace,
        BareKey::Char(c) => Event::Char(c),
        _ => return None,
    })
}

fn map_editor_key(key: &KeyWithModifier, ctrl: bool) -> Option<Event> {
    if ctrl {
        return None;
    }

    Some(match key.bare_key {
        BareKey::Tab | BareKey::Down | BareKey::Up => Event::NextField,
        BareKey::Enter => Event::Save,
        BareKey::Esc => Event::CancelEditor,
        BareKey::Backspace => Event::Backspace,
        BareKey::Char(c) => Event::Char(c),
        _ => return None,
    })
}

fn map_confirm_key(key: &KeyWithModifier) -> Option<Event> {
    match key.bare_key {
        BareKey::Char('y' | 'Y') | BareKey::Enter => Some(Event::ConfirmDelete),
        BareKey::Char('n' | 'N') | BareKey::Esc => Some(Event::CancelDelete),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::FormField;

    fn key(bare_key: BareKey) -> KeyWithModifier {
        KeyWithModifier::new(bare_key)
    }

    #[test]
    fn list_letters_are_commands() {
        assert_eq!(map_key(InputMode::Browse, &key(BareKey::Char('a'))), Some(Event::AddUser));
        assert_eq!(map_key(InputMode::Browse, &key(BareKey::Char('e'))), Some(Event::EditSelected));
        assert_eq!(map_key(InputMode::Browse, &key(BareKey::Enter)), Some(Event::EditSelected));
        assert_eq!(map_key(InputMode::Browse, &key(BareKey::Char('d'))), Some(Event::DeleteSelected));
        assert_eq!(map_key(InputMode::Browse, &key(BareKey::Char('q'))), Some(Event::CloseFocus));
        assert_eq!(map_key(InputMode::Browse, &key(BareKey::Char('z'))), None);
    }

    #[test]
    fn editor_letters_are_text() {
        let mode = InputMode::Editor(FormField::Name);
        assert_eq!(map_key(mode, &key(BareKey::Char('q'))), Some(Event::Char('q')));
        assert_eq!(map_key(mode, &key(BareKey::Char('d'))), Some(Event::Char('d')));
        assert_eq!(map_key(mode, &key(BareKey::Tab)), Some(Event::NextField));
        assert_eq!(map_key(mode, &key(BareKey::Enter)), Some(Event::Save));
        assert_eq!(map_key(mode, &key(BareKey::Esc)), Some(Event::CancelEditor));
    }

    #[test]
    fn confirmation_accepts_only_yes_or_no() {
        let mode = InputMode::ConfirmDelete { id: 1 };
        assert_eq!(map_key(mode, &key(BareKey::Char('y'))), Some(Event::ConfirmDelete));
        assert_eq!(map_key(mode, &key(BareKey::Esc)), Some(Event::CancelDelete));
        assert_eq!(map_key(mode, &key(BareKey::Char('n'))), Some(Event::CancelDelete));
        assert_eq!(map_key(mode, &key(BareKey::Char('d'))), None);
    }

    #[test]
    fn search_typing_takes_letters() {
        let mode = InputMode::Search(SearchFocus::Typing);
        assert_eq!(map_key(mode, &key(BareKey::Char('j'))), Some(Event::Char('j')));
        assert_eq!(map_key(mode, &key(BareKey::Enter)), Some(Event::FocusResults));
        assert_eq!(
            map_key(mode, &key(BareKey::Char('n')).with_ctrl_modifier()),
            Some(Event::KeyDown)
        );
    }

    #[test]
    fn search_navigating_keeps_list_commands() {
        let mode = InputMode::Search(SearchFocus::Navigating);
        assert_eq!(map_key(mode, &key(BareKey::Char('j'))), Some(Event::KeyDown));
        assert_eq!(map_key(mode, &key(BareKey::Char('/'))), Some(Event::FocusSearchBar));
        assert_eq!(map_key(mode, &key(BareKey::Esc)), Some(Event::ExitSearch));
        assert_eq!(map_key(mode, &key(BareKey::Char('q'))), None);
    }
}
