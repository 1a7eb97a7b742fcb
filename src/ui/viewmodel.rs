//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready strings and flags, no logic.

use crate::app::modes::FormField;

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Rows of the visible window of the list.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected row within `display_items`.
    pub selected_index: usize,

    /// Title bar.
    pub header: HeaderInfo,

    /// Keybinding hints.
    pub footer: FooterInfo,

    /// Message shown instead of the list (loading, no users, no matches).
    pub empty_state: Option<EmptyState>,

    /// Search box, when search mode is active.
    pub search_bar: Option<SearchBarInfo>,

    /// Modal drawn over the list.
    pub overlay: Option<Overlay>,
}

/// One row of the user table.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    /// Display name, truncated to the NAME column.
    pub name: String,

    /// Email, truncated to the remaining width.
    pub email: String,

    /// Whether this row is under the cursor.
    pub is_selected: bool,

    /// Character ranges of `name` matched by the search query, end exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,

    /// Character ranges of `email` matched by the search query, end exclusive.
    pub email_highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text, e.g. `" Users (10) "`.
    pub title: String,

    /// Dimmed text after the title, e.g. `"fetched 2m ago"`.
    pub subtitle: Option<String>,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Centered two-line message shown in place of the list.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g., "No users").
    pub message: String,

    /// Secondary explanatory text (e.g., "Press 'a' to add one").
    pub subtitle: String,
}

/// Search box display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,

    /// Whether keystrokes currently go to the query (draws a cursor).
    pub is_typing: bool,
}

/// Modal dialogs drawn over the list.
#[derive(Debug, Clone)]
pub enum Overlay {
    /// Add/edit form.
    Editor(EditorInfo),
    /// Delete confirmation prompt.
    ConfirmDelete(ConfirmInfo),
}

/// Editor modal contents.
#[derive(Debug, Clone)]
pub struct EditorInfo {
    /// "Add user" or "Edit user".
    pub title: String,
    /// Name draft.
    pub name: String,
    /// Email draft.
    pub email: String,
    /// Field receiving keystrokes.
    pub focus: FormField,
}

/// Delete confirmation contents.
#[derive(Debug, Clone)]
pub struct ConfirmInfo {
    pub title: String,
    pub message: String,
}
