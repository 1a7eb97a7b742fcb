//! Event handling and state transition logic.
//!
//! [`handle_event`] is the reducer of the screen: it takes the current
//! [`AppState`] and one [`Event`], applies the matching transition, and returns
//! whether the pane needs a redraw plus the side effects to run.
//!
//! # Event Types
//!
//! - **Lifecycle**: `Mounted`, `PermissionsDenied`
//! - **Load outcome**: `LoadSucceeded`, `LoadFailed`
//! - **Navigation**: `KeyDown`, `KeyUp`, `CloseFocus`
//! - **Directory commands**: `AddUser`, `EditSelected`, `DeleteSelected`
//! - **Editor**: `Char`, `Backspace`, `NextField`, `Save`, `CancelEditor`
//! - **Confirmation**: `ConfirmDelete`, `CancelDelete`
//! - **Search**: `SearchMode`, `FocusSearchBar`, `FocusResults`, `ExitSearch`
//!
//! # Example
//!
//! ```rust
//! use rolodex::{handle_event, Action, AppState, Event, IdStrategy, Theme};
//!
//! let mut state = AppState::new(Theme::default(), IdStrategy::Length);
//! let (_, actions) = handle_event(&mut state, &Event::Mounted {
//!     endpoint: "https://jsonplaceholder.typicode.com/users".to_string(),
//! })?;
//! assert!(matches!(actions.as_slice(), [Action::FetchUsers { .. }]));
//! # Ok::<(), rolodex::RolodexError>(())
//! ```

use super::modes::{InputMode, SearchFocus};
use crate::app::{Action, AppState};
use crate::domain::error::{Result, RolodexError};
use crate::domain::User;

/// Events triggered by user input, the host lifecycle, or the directory load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The plugin has the permissions it asked for and may load the directory.
    Mounted {
        /// Directory endpoint to GET.
        endpoint: String,
    },
    /// Web access was refused. Handled as a failed load.
    PermissionsDenied,

    /// The directory answered with a decodable list of users.
    LoadSucceeded {
        /// Users in server order.
        users: Vec<User>,
        /// Unix timestamp of the answer.
        fetched_at: i64,
    },
    /// The load failed (network, HTTP status or body).
    LoadFailed {
        /// Human-readable reason, for the log.
        reason: String,
    },

    /// Moves selection cursor down by one position (wraps to top).
    KeyDown,
    /// Moves selection cursor up by one position (wraps to bottom).
    KeyUp,
    /// Hides the plugin pane.
    CloseFocus,

    /// Opens the editor in create mode.
    AddUser,
    /// Opens the editor on the selected user.
    EditSelected,
    /// Asks for confirmation before deleting the selected user.
    DeleteSelected,

    /// Types a character into the editor field or the search query.
    Char(char),
    /// Removes the last character from the editor field or the search query.
    Backspace,
    /// Moves editor focus to the other field.
    NextField,
    /// Commits the editor draft.
    Save,
    /// Closes the editor, discarding the draft.
    CancelEditor,

    /// Removes the user awaiting confirmation.
    ConfirmDelete,
    /// Dismisses the delete confirmation.
    CancelDelete,

    /// Enters search mode with typing focus.
    SearchMode,
    /// Focuses the search input field (from navigating mode).
    FocusSearchBar,
    /// Focuses the search results list (from typing mode).
    FocusResults,
    /// Exits search mode and clears the query.
    ExitSearch,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns `(should_render, actions)`.
///
/// # Errors
///
/// No transition currently fails.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Mounted { endpoint } => {
            if !state.begin_fetch() {
                tracing::debug!("directory load already issued, ignoring");
                return Ok((false, vec![]));
            }
            tracing::debug!(endpoint = %endpoint, "loading user directory");
            Ok((false, vec![Action::FetchUsers { url: endpoint.clone() }]))
        }
        Event::PermissionsDenied => {
            state.load_failed(
                RolodexError::Request("web access permission denied".to_string()).to_string(),
            );
            Ok((true, vec![]))
        }
        Event::LoadSucceeded { users, fetched_at } => {
            state.load_succeeded(users.clone(), *fetched_at);
            Ok((true, vec![]))
        }
        Event::LoadFailed { reason } => {
            state.load_failed(reason.clone());
            Ok((true, vec![]))
        }
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::AddUser => {
            if state.input_mode.is_overlay() {
                return Ok((false, vec![]));
            }
            state.open_editor(None);
            Ok((true, vec![]))
        }
        Event::EditSelected => {
            if state.input_mode.is_overlay() {
                return Ok((false, vec![]));
            }
            let Some(user) = state.selected_user().cloned() else {
                tracing::debug!("no user selected to edit");
                return Ok((false, vec![]));
            };
            state.open_editor(Some(&user));
            Ok((true, vec![]))
        }
        Event::DeleteSelected => {
            if state.input_mode.is_overlay() {
                return Ok((false, vec![]));
            }
            let Some(id) = state.selected_user().map(|user| user.id) else {
                tracing::debug!("no user selected to delete");
                return Ok((false, vec![]));
            };
            state.request_delete(id);
            Ok((true, vec![]))
        }
        Event::Char(c) => Ok((state.push_char(*c), vec![])),
        Event::Backspace => Ok((state.pop_char(), vec![])),
        Event::NextField => {
            if !state.modal_visible() {
                return Ok((false, vec![]));
            }
            state.focus_next_field();
            Ok((true, vec![]))
        }
        Event::Save => Ok((state.save(), vec![])),
        Event::CancelEditor => {
            if !state.modal_visible() {
                return Ok((false, vec![]));
            }
            state.close_editor();
            Ok((true, vec![]))
        }
        Event::ConfirmDelete => Ok((state.confirm_delete(), vec![])),
        Event::CancelDelete => Ok((state.cancel_delete(), vec![])),
        Event::SearchMode => {
            if state.input_mode != InputMode::Browse {
                return Ok((false, vec![]));
            }
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            state.search_query = String::new();
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }
            if state.search_query.trim().is_empty() {
                state.input_mode = InputMode::Browse;
                state.search_query = String::new();
                state.apply_search_filter();
                return Ok((true, vec![]));
            }
            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }
            tracing::debug!(query = %state.search_query, "exiting search mode");
            state.input_mode = InputMode::Browse;
            state.search_query = String::new();
            state.apply_search_filter();
            Ok((true, vec![]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::FormField;
    use crate::domain::IdStrategy;
    use crate::ui::Theme;

    fn loaded(users: Vec<User>) -> AppState {
        let mut state = AppState::new(Theme::default(), IdStrategy::Length);
        handle_event(&mut state, &Event::LoadSucceeded { users, fetched_at: 0 }).unwrap();
        state
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, &Event::Char(c)).unwrap();
        }
    }

    #[test]
    fn mount_fetches_exactly_once() {
        let mut state = AppState::new(Theme::default(), IdStrategy::Length);
        let mounted = Event::Mounted {
            endpoint: "http://directory.test/users".to_string(),
        };

        let (_, actions) = handle_event(&mut state, &mounted).unwrap();
        assert_eq!(
            actions,
            vec![Action::FetchUsers {
                url: "http://directory.test/users".to_string()
            }]
        );

        let (render, actions) = handle_event(&mut state, &mounted).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn denied_permissions_end_loading() {
        let mut state = AppState::new(Theme::default(), IdStrategy::Length);
        let (render, _) = handle_event(&mut state, &Event::PermissionsDenied).unwrap();
        assert!(render);
        assert!(!state.loading);
        assert!(state.users.is_empty());
    }

    #[test]
    fn failed_load_ends_loading_with_empty_directory() {
        let mut state = AppState::new(Theme::default(), IdStrategy::Length);
        handle_event(
            &mut state,
            &Event::LoadFailed {
                reason: "Directory returned HTTP status 500".to_string(),
            },
        )
        .unwrap();
        assert!(!state.loading);
        assert!(state.users.is_empty());
    }

    #[test]
    fn add_flow_appends_user() {
        let mut state = loaded(vec![User::new(1, "A", "a@x.com")]);

        handle_event(&mut state, &Event::AddUser).unwrap();
        type_text(&mut state, "Bob");
        handle_event(&mut state, &Event::NextField).unwrap();
        type_text(&mut state, "bob@x.com");
        let (render, _) = handle_event(&mut state, &Event::Save).unwrap();

        assert!(render);
        assert!(!state.modal_visible());
        assert_eq!(state.users.last(), Some(&User::new(2, "Bob", "bob@x.com")));
    }

    #[test]
    fn save_with_missing_email_keeps_modal_open() {
        let mut state = loaded(vec![User::new(1, "A", "a@x.com")]);

        handle_event(&mut state, &Event::AddUser).unwrap();
        type_text(&mut state, "Bob");
        let (render, _) = handle_event(&mut state, &Event::Save).unwrap();

        assert!(!render);
        assert_eq!(state.input_mode, InputMode::Editor(FormField::Name));
        assert_eq!(state.users.len(), 1);
    }

    #[test]
    fn edit_selected_prefills_and_saves_in_place() {
        let mut state = loaded(vec![User::new(1, "A", "a@x.com"), User::new(2, "B", "b@x.com")]);

        handle_event(&mut state, &Event::KeyDown).unwrap();
        handle_event(&mut state, &Event::EditSelected).unwrap();
        assert_eq!(state.draft.target, Some(2));
        assert_eq!(state.draft.name, "B");

        type_text(&mut state, "eatrice");
        handle_event(&mut state, &Event::Save).unwrap();

        assert_eq!(state.users[1], User::new(2, "Beatrice", "b@x.com"));
        assert_eq!(state.users[0], User::new(1, "A", "a@x.com"));
    }

    #[test]
    fn cancel_editor_discards_draft() {
        let mut state = loaded(vec![User::new(1, "A", "a@x.com")]);

        handle_event(&mut state, &Event::EditSelected).unwrap();
        type_text(&mut state, "zzz");
        handle_event(&mut state, &Event::CancelEditor).unwrap();

        assert!(!state.modal_visible());
        assert_eq!(state.users[0].name, "A");
    }

    #[test]
    fn editor_keys_do_not_trigger_list_commands() {
        let mut state = loaded(vec![User::new(1, "A", "a@x.com")]);

        handle_event(&mut state, &Event::AddUser).unwrap();
        let (render, _) = handle_event(&mut state, &Event::DeleteSelected).unwrap();

        assert!(!render);
        assert!(state.modal_visible());
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut state = loaded(vec![User::new(1, "A", "a@x.com"), User::new(2, "B", "b@x.com")]);

        handle_event(&mut state, &Event::DeleteSelected).unwrap();
        assert_eq!(state.users.len(), 2);
        assert_eq!(state.input_mode, InputMode::ConfirmDelete { id: 1 });

        handle_event(&mut state, &Event::ConfirmDelete).unwrap();
        assert_eq!(state.users, vec![User::new(2, "B", "b@x.com")]);
        assert_eq!(state.input_mode, InputMode::Browse);
    }

    #[test]
    fn delete_on_empty_directory_is_ignored() {
        let mut state = loaded(vec![]);
        let (render, _) = handle_event(&mut state, &Event::DeleteSelected).unwrap();
        assert!(!render);
        assert_eq!(state.input_mode, InputMode::Browse);
    }

    #[test]
    fn search_round_trip_restores_full_list() {
        let mut state = loaded(vec![
            User::new(1, "Leanne Graham", "Sincere@april.biz"),
            User::new(2, "Ervin Howell", "Shanna@melissa.tv"),
        ]);

        handle_event(&mut state, &Event::SearchMode).unwrap();
        type_text(&mut state, "ervin");
        assert_eq!(state.visible, vec![1]);

        handle_event(&mut state, &Event::FocusResults).unwrap();
        assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Navigating));

        handle_event(&mut state, &Event::ExitSearch).unwrap();
        assert_eq!(state.input_mode, InputMode::Browse);
        assert_eq!(state.visible, vec![0, 1]);
    }

    #[test]
    fn close_focus_emits_action() {
        let mut state = loaded(vec![]);
        let (render, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}
