//! Input mode state types for the application.
//!
//! The mode decides which keybindings are active, which overlay is drawn and
//! what the footer advertises.
//!
//! # State Machine
//!
//! ```text
//!            /                 Enter
//!  Browse ───────► Search(Typing) ──────► Search(Navigating)
//!    │  ▲   Esc ◄──────┴──────────────────────┘   │
//!    │  │                                         │
//!  a,e│  │Enter (saved) / Esc        a,e          │
//!    ▼  │                                         ▼
//!  Editor(field) ◄────────────────────────────────┘
//!
//!  d (Browse or Navigating) ──► ConfirmDelete { id } ── y/n ──► previous mode
//! ```
//!
//! Leaving the editor or the confirmation returns to the mode they were opened
//! from, so a search stays active across an edit.

/// Field of the editor modal that receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
}

impl FormField {
    /// The other field. Tab cycles between the two.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Name,
        }
    }
}

/// Focus state within search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// Characters go to the query.
    Typing,

    /// j/k move through the filtered list, e/d act on the selected user.
    Navigating,
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// List navigation and commands (add, edit, delete, search, quit).
    Browse,

    /// Filtering the list by a fuzzy query.
    Search(SearchFocus),

    /// Editor modal is open. Holds the focused field.
    Editor(FormField),

    /// Blocking delete confirmation for the user with this id.
    ConfirmDelete {
        /// Id of the user that will be removed on confirmation.
        id: i64,
    },
}

impl InputMode {
    /// Whether this mode is one of the two overlays (editor or confirmation).
    #[must_use]
    pub const fn is_overlay(self) -> bool {
        matches!(self, Self::Editor(_) | Self::ConfirmDelete { .. })
    }
}
