//! Actions representing side effects to be executed by the plugin runtime.
//!
//! [`handle_event`](crate::app::handle_event) only mutates [`AppState`](crate::app::AppState);
//! anything that needs the Zellij host comes back as an [`Action`] and is
//! executed by the plugin shim.

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Issues the one GET request that loads the directory.
    ///
    /// Emitted at most once per plugin lifetime. The answer comes back as a
    /// `WebRequestResult` event which the shim turns into
    /// `Event::LoadSucceeded` or `Event::LoadFailed`.
    FetchUsers {
        /// Directory endpoint.
        url: String,
    },
}
