//! Screen state and its transitions.
//!
//! [`AppState`] is the single value describing the directory screen: the loaded
//! users, the loading flag, the editor draft, the delete confirmation, the
//! search filter and the selection. Every user-visible transition is a method
//! on it, so each can be exercised without a renderer.
//!
//! # State Components
//!
//! - **Users**: the directory, in server order, plus local additions
//! - **Visible**: indices into `users` that pass the search filter
//! - **Selection**: cursor position within `visible`
//! - **Input Mode**: browse, search, editor modal or delete confirmation
//! - **Draft**: name/email being edited and the edit target, if any
//! - **Load bookkeeping**: `loading`, `fetch_issued`, `loaded_at`, `last_error`
//!
//! # Example
//!
//! ```rust
//! use rolodex::{AppState, IdStrategy, Theme, User};
//!
//! let mut state = AppState::new(Theme::default(), IdStrategy::Length);
//! state.load_succeeded(vec![User::new(1, "A", "a@x.com")], 0);
//!
//! state.open_editor(None);
//! state.draft.name = "B".to_string();
//! state.draft.email = "b@x.com".to_string();
//! assert!(state.save());
//! assert_eq!(state.users.len(), 2);
//! ```

use super::modes::{FormField, InputMode, SearchFocus};
use crate::domain::{IdStrategy, User, UserDraft};
use crate::ui::helpers::time_ago;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ConfirmInfo, DisplayItem, EditorInfo, EmptyState, FooterInfo, HeaderInfo, Overlay,
    SearchBarInfo, UIViewModel,
};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::collections::BTreeSet;

/// Width of the NAME column, including the two separating spaces.
pub(crate) const NAME_COLUMN_WIDTH: usize = 32;

/// Central screen state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The directory. Replaced once by the load, then mutated locally.
    pub users: Vec<User>,

    /// Indices into `users` that pass the current search filter, in order.
    pub visible: Vec<usize>,

    /// Zero-based cursor position within `visible`.
    pub selected_index: usize,

    /// True until the load completes, successfully or not.
    pub loading: bool,

    /// Set when the load request has been emitted. Guards against a second one.
    pub fetch_issued: bool,

    /// Unix timestamp of the successful load.
    pub loaded_at: Option<i64>,

    /// Reason of the failed load. Logged, never shown as an error.
    pub last_error: Option<String>,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Editor draft. Only meaningful while the editor is open.
    pub draft: UserDraft,

    /// Current search query.
    pub search_query: String,

    /// How ids of created users are assigned.
    pub id_strategy: IdStrategy,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Mode restored when the editor or the delete confirmation closes.
    resume_mode: InputMode,
}

impl AppState {
    /// Creates an empty, loading screen state.
    #[must_use]
    pub fn new(theme: Theme, id_strategy: IdStrategy) -> Self {
        Self {
            users: vec![],
            visible: vec![],
            selected_index: 0,
            loading: true,
            fetch_issued: false,
            loaded_at: None,
            last_error: None,
            input_mode: InputMode::Browse,
            draft: UserDraft::blank(),
            search_query: String::new(),
            id_strategy,
            theme,
            resume_mode: InputMode::Browse,
        }
    }

    /// Marks the load request as issued.
    ///
    /// Returns `true` the first time only; the caller emits the request when
    /// it does.
    pub fn begin_fetch(&mut self) -> bool {
        if self.fetch_issued {
            return false;
        }
        self.fetch_issued = true;
        true
    }

    /// Replaces the whole directory with the loaded users, in server order.
    pub fn load_succeeded(&mut self, users: Vec<User>, fetched_at: i64) {
        tracing::info!(user_count = users.len(), "user directory loaded");
        self.users = users;
        self.loading = false;
        self.loaded_at = Some(fetched_at);
        self.last_error = None;
        self.selected_index = 0;
        self.apply_search_filter();
    }

    /// Records a failed load. The directory is left as it is (empty at mount).
    pub fn load_failed(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        tracing::error!(reason = %reason, "failed to load user directory");
        self.loading = false;
        self.last_error = Some(reason);
        self.apply_search_filter();
    }

    /// Whether the editor modal is open.
    #[must_use]
    pub const fn modal_visible(&self) -> bool {
        matches!(self.input_mode, InputMode::Editor(_))
    }

    /// Mode underneath an open overlay, or the current mode.
    #[must_use]
    pub const fn base_mode(&self) -> InputMode {
        if self.input_mode.is_overlay() {
            self.resume_mode
        } else {
            self.input_mode
        }
    }

    /// The user under the cursor, if any.
    #[must_use]
    pub fn selected_user(&self) -> Option<&User> {
        self.visible
            .get(self.selected_index)
            .and_then(|&index| self.users.get(index))
    }

    /// Moves the cursor down, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.visible.len();
    }

    /// Moves the cursor up, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        self.selected_index = self
            .selected_index
            .checked_sub(1)
            .unwrap_or(self.visible.len() - 1);
    }

    /// Opens the editor modal.
    ///
    /// With a user the draft is pre-filled and targets that user's id (edit
    /// mode). Without one the draft is empty and has no target (create mode).
    pub fn open_editor(&mut self, user: Option<&User>) {
        self.draft = user.map_or_else(UserDraft::blank, UserDraft::for_user);
        tracing::debug!(target_id = ?self.draft.target, "editor opened");
        self.enter_overlay(InputMode::Editor(FormField::Name));
    }

    /// Closes the editor and discards the draft.
    pub fn close_editor(&mut self) {
        if !self.modal_visible() {
            return;
        }
        self.draft = UserDraft::blank();
        self.leave_overlay();
    }

    /// Moves editor focus to the other field.
    pub fn focus_next_field(&mut self) {
        if let InputMode::Editor(field) = self.input_mode {
            self.input_mode = InputMode::Editor(field.next());
        }
    }

    /// Types a character into the focused editor field or the search query.
    ///
    /// Returns `false` if the current mode does not accept text.
    pub fn push_char(&mut self, c: char) -> bool {
        match self.input_mode {
            InputMode::Editor(FormField::Name) => self.draft.name.push(c),
            InputMode::Editor(FormField::Email) => self.draft.email.push(c),
            InputMode::Search(SearchFocus::Typing) => {
                self.search_query.push(c);
                self.apply_search_filter();
            }
            _ => return false,
        }
        true
    }

    /// Deletes the last character of the focused editor field or the query.
    ///
    /// Returns `false` if the current mode does not accept text.
    pub fn pop_char(&mut self) -> bool {
        match self.input_mode {
            InputMode::Editor(FormField::Name) => {
                self.draft.name.pop();
            }
            InputMode::Editor(FormField::Email) => {
                self.draft.email.pop();
            }
            InputMode::Search(_) => {
                self.search_query.pop();
                self.apply_search_filter();
            }
            _ => return false,
        }
        true
    }

    /// Commits the draft.
    ///
    /// Requires both draft fields to be non-empty; otherwise nothing changes
    /// and the modal stays open. In edit mode every user with the target id has
    /// its name and email overwritten in place. In create mode a user is
    /// appended with an id from [`IdStrategy::next_id`] and becomes selected.
    ///
    /// Returns whether the draft was committed.
    pub fn save(&mut self) -> bool {
        if !self.modal_visible() {
            return false;
        }
        if !self.draft.is_complete() {
            tracing::debug!(
                name_empty = self.draft.name.is_empty(),
                email_empty = self.draft.email.is_empty(),
                "save ignored, draft incomplete"
            );
            return false;
        }

        let draft = std::mem::take(&mut self.draft);
        let created = match draft.target {
            Some(id) => {
                let mut updated = 0;
                for user in self.users.iter_mut().filter(|user| user.id == id) {
                    user.name.clone_from(&draft.name);
                    user.email.clone_from(&draft.email);
                    updated += 1;
                }
                tracing::debug!(user_id = id, updated = updated, "user updated");
                false
            }
            None => {
                let id = self.id_strategy.next_id(&self.users);
                if self.users.iter().any(|user| user.id == id) {
                    tracing::warn!(user_id = id, "assigned id already in use");
                }
                self.users.push(User {
                    id,
                    name: draft.name,
                    email: draft.email,
                });
                tracing::debug!(user_id = id, "user created");
                true
            }
        };

        self.leave_overlay();
        self.apply_search_filter();

        if created {
            let appended = self.users.len() - 1;
            if let Some(position) = self.visible.iter().position(|&index| index == appended) {
                self.selected_index = position;
            }
        }

        true
    }

    /// Opens the delete confirmation for the user with `id`.
    pub fn request_delete(&mut self, id: i64) {
        tracing::debug!(user_id = id, "delete confirmation requested");
        self.enter_overlay(InputMode::ConfirmDelete { id });
    }

    /// Confirms a pending delete. Returns `false` if no confirmation is open.
    pub fn confirm_delete(&mut self) -> bool {
        let InputMode::ConfirmDelete { id } = self.input_mode else {
            return false;
        };
        let removed = self.delete_user(id);
        tracing::debug!(user_id = id, removed = removed, "delete confirmed");
        self.leave_overlay();
        true
    }

    /// Dismisses a pending delete. The directory is left untouched.
    pub fn cancel_delete(&mut self) -> bool {
        if !matches!(self.input_mode, InputMode::ConfirmDelete { .. }) {
            return false;
        }
        tracing::debug!("delete cancelled");
        self.leave_overlay();
        true
    }

    /// Removes every user with `id` and returns how many were removed.
    ///
    /// `visible` is recomputed against the remaining users.
    pub fn delete_user(&mut self, id: i64) -> usize {
        let before = self.users.len();
        self.users.retain(|user| user.id != id);
        self.apply_search_filter();
        before - self.users.len()
    }

    fn enter_overlay(&mut self, mode: InputMode) {
        if !self.input_mode.is_overlay() {
            self.resume_mode = self.input_mode;
        }
        self.input_mode = mode;
    }

    fn leave_overlay(&mut self) {
        self.input_mode = self.resume_mode;
        self.resume_mode = InputMode::Browse;
    }

    /// Recomputes `visible` from the search query and clamps the selection.
    ///
    /// The query is split on whitespace; a user is visible when every token
    /// fuzzy-matches its name or its email (case-insensitive).
    pub fn apply_search_filter(&mut self) {
        let _span = tracing::debug_span!(
            "apply_search_filter",
            total_users = self.users.len(),
            query_len = self.search_query.len()
        )
        .entered();

        let tokens: Vec<&str> = self.search_query.split_whitespace().collect();

        self.visible = if tokens.is_empty() {
            (0..self.users.len()).collect()
        } else {
            let matcher = SkimMatcherV2::default().ignore_case();
            self.users
                .iter()
                .enumerate()
                .filter(|(_, user)| {
                    tokens.iter().all(|token| {
                        matcher.fuzzy_match(&user.name, token).is_some()
                            || matcher.fuzzy_match(&user.email, token).is_some()
                    })
                })
                .map(|(index, _)| index)
                .collect()
        };

        self.selected_index = self
            .selected_index
            .min(self.visible.len().saturating_sub(1));

        tracing::debug!(visible_count = self.visible.len(), "search filter applied");
    }

    /// Computes the renderable view model for a `rows` x `cols` pane.
    ///
    /// The list is windowed around the selection so the cursor stays visible.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let available_rows = self.calculate_available_rows(rows).max(1);

        let mut window_start = self.selected_index.saturating_sub(available_rows / 2);
        let window_end = (window_start + available_rows).min(self.visible.len());
        if window_end - window_start < available_rows {
            window_start = window_end.saturating_sub(available_rows);
        }

        let matcher = (matches!(self.base_mode(), InputMode::Search(_))
            && !self.search_query.trim().is_empty())
        .then(|| SkimMatcherV2::default().ignore_case());

        let display_items = self.visible[window_start..window_end]
            .iter()
            .enumerate()
            .filter_map(|(offset, &index)| {
                self.users.get(index).map(|user| {
                    self.compute_display_item(user, window_start + offset, cols, matcher.as_ref())
                })
            })
            .collect();

        UIViewModel {
            display_items,
            selected_index: self.selected_index.saturating_sub(window_start),
            header: self.compute_header(),
            footer: self.compute_footer(),
            empty_state: self.compute_empty_state(),
            search_bar: self.compute_search_bar(),
            overlay: self.compute_overlay(),
        }
    }

    fn compute_display_item(
        &self,
        user: &User,
        position: usize,
        cols: usize,
        matcher: Option<&SkimMatcherV2>,
    ) -> DisplayItem {
        let name_width = NAME_COLUMN_WIDTH - 2;
        let email_width = cols.saturating_sub(NAME_COLUMN_WIDTH + 2);

        let tokens: Vec<&str> = self.search_query.split_whitespace().collect();
        let ranges = |text: &str| {
            matcher.map_or_else(Vec::new, |m| match_ranges(m, text, &tokens))
        };

        DisplayItem {
            name: truncate(&user.name, name_width),
            email: truncate(&user.email, email_width),
            is_selected: position == self.selected_index,
            highlight_ranges: ranges(&user.name),
            email_highlight_ranges: ranges(&user.email),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = if self.search_query.trim().is_empty() {
            format!(" Users ({}) ", self.users.len())
        } else {
            format!(" Users ({} of {}) ", self.visible.len(), self.users.len())
        };

        let subtitle = self
            .loaded_at
            .map(|at| format!("fetched {}", time_ago(at, chrono::Utc::now().timestamp())));

        HeaderInfo { title, subtitle }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Browse => {
                "j/k: navigate  a: add  e/Enter: edit  d: delete  /: search  q: quit"
            }
            InputMode::Search(SearchFocus::Typing) => {
                "ESC: exit search  Enter: focus results  Ctrl+n/p: navigate  Type to filter"
            }
            InputMode::Search(SearchFocus::Navigating) => {
                "ESC: exit search  /: edit query  j/k: navigate  a: add  e: edit  d: delete"
            }
            InputMode::Editor(_) => "Tab: switch field  Enter: save  Esc: cancel",
            InputMode::ConfirmDelete { .. } => "y/Enter: delete  n/Esc: cancel",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        let (message, subtitle) = if self.loading {
            ("Loading users...", "Fetching the directory")
        } else if self.users.is_empty() {
            ("No users", "Press 'a' to add one")
        } else if self.visible.is_empty() {
            ("No matches", "Esc to clear the search")
        } else {
            return None;
        };

        Some(EmptyState {
            message: message.to_string(),
            subtitle: subtitle.to_string(),
        })
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        match self.base_mode() {
            InputMode::Search(focus) => Some(SearchBarInfo {
                query: self.search_query.clone(),
                is_typing: focus == SearchFocus::Typing && !self.input_mode.is_overlay(),
            }),
            _ => None,
        }
    }

    fn compute_overlay(&self) -> Option<Overlay> {
        match self.input_mode {
            InputMode::Editor(focus) => Some(Overlay::Editor(EditorInfo {
                title: (if self.draft.is_edit() { "Edit user" } else { "Add user" }).to_string(),
                name: self.draft.name.clone(),
                email: self.draft.email.clone(),
                focus,
            })),
            InputMode::ConfirmDelete { id } => {
                let message = self.users.iter().find(|user| user.id == id).map_or_else(
                    || format!("Remove user #{id} from the list?"),
                    |user| format!("Remove {} <{}> from the list?", user.name, user.email),
                );
                Some(Overlay::ConfirmDelete(ConfirmInfo {
                    title: "Delete user?".to_string(),
                    message,
                }))
            }
            _ => None,
        }
    }

    /// Rows left for the list after header, borders, column titles and footer,
    /// plus the search box when it is shown.
    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        match self.base_mode() {
            InputMode::Search(_) => total_rows.saturating_sub(9),
            _ => total_rows.saturating_sub(6),
        }
    }
}

/// Character ranges of `text` matched by any of the search tokens.
fn match_ranges(matcher: &SkimMatcherV2, text: &str, tokens: &[&str]) -> Vec<(usize, usize)> {
    let indices: BTreeSet<usize> = tokens
        .iter()
        .filter_map(|token| matcher.fuzzy_indices(text, token))
        .flat_map(|(_, indices)| indices)
        .collect();
    coalesce_indices(&indices.into_iter().collect::<Vec<_>>())
}

/// Collapses sorted character indices into `(start, end)` ranges, end exclusive.
fn coalesce_indices(indices: &[usize]) -> Vec<(usize, usize)> {
    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for &index in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == index => *end += 1,
            _ => ranges.push((index, index + 1)),
        }
    }
    ranges
}

/// Shortens `text` to at most `max_chars` characters, ending in "..." if cut
/// and there is room for more than the ellipsis.
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars <= 3 {
        return text.chars().take(max_chars).collect();
    }
    let keep = max_chars.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}
