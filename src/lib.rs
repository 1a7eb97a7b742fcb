//! Rolodex: a Zellij plugin showing an editable user directory.
//!
//! The plugin fetches a list of users from a read-only JSON endpoint once,
//! when the pane is granted web access, and then lets the user add, edit and
//! delete entries locally. Nothing is written back to the server and nothing
//! survives the session.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← host calls
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← reducer
//! │  - Event handling and key mapping                   │
//! │  - Screen state, modal and search modes             │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │
//! ┌───────────────┐   ┌────────────────────┐
//! │ UI Layer      │   │ Directory          │
//! │ (ui/)         │   │ (directory/)       │
//! │ - Rendering   │   │ - Request headers  │
//! │ - Dialogs     │   │ - Response decode  │
//! │ - Theming     │   │                    │
//! └───────────────┘   └────────────────────┘
//!         │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (User, UserDraft, IdStrategy, errors)       │
//! │  Infrastructure (sandbox paths)                     │
//! │  Observability (tracing → OTLP JSON file)           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! plugin location="file:/path/to/rolodex.wasm" {
//!     endpoint "https://jsonplaceholder.typicode.com/users"
//!     id_strategy "length"
//!     theme "catppuccin-mocha"
//!     theme_file "~/.config/rolodex/theme.toml"
//!     trace_level "debug"
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use rolodex::{handle_event, initialize, Action, Config, Event, User};
//!
//! let mut state = initialize(&Config::default());
//!
//! let (_, actions) = handle_event(
//!     &mut state,
//!     &Event::Mounted { endpoint: Config::default().endpoint },
//! ).unwrap();
//! assert!(matches!(actions[0], Action::FetchUsers { .. }));
//!
//! handle_event(&mut state, &Event::LoadSucceeded {
//!     users: vec![User::new(1, "Leanne Graham", "Sincere@april.biz")],
//!     fetched_at: 0,
//! }).unwrap();
//! assert_eq!(state.users.len(), 1);
//! ```

pub mod app;
pub mod directory;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, map_key, Action, AppState, Event, FormField, InputMode, SearchFocus};
pub use domain::{IdStrategy, Result, RolodexError, User, UserDraft};
pub use ui::Theme;

use std::collections::BTreeMap;

use crate::infrastructure::expand_tilde;

/// Plugin configuration, read from the plugin block of the Zellij layout.
#[derive(Debug, Clone)]
pub struct Config {
    /// URL returning the JSON array of users.
    pub endpoint: String,

    /// Id assignment for users created in the editor. Default: `length`.
    pub id_strategy: IdStrategy,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// TOML theme path, `~` allowed. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for exported spans. Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: directory::DEFAULT_ENDPOINT.to_string(),
            id_strategy: IdStrategy::default(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Reads the configuration map Zellij hands to `load`.
    ///
    /// Unknown keys are ignored. Blank values and unrecognized `id_strategy`
    /// names fall back to the defaults.
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let endpoint = value("endpoint").unwrap_or_else(|| directory::DEFAULT_ENDPOINT.to_string());

        let id_strategy = value("id_strategy").map_or_else(IdStrategy::default, |name| {
            IdStrategy::from_config(&name).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "falling back to length id strategy");
                IdStrategy::default()
            })
        });

        Self {
            endpoint,
            id_strategy,
            theme_name: value("theme"),
            theme_file: value("theme_file").map(|path| expand_tilde(&path)),
            trace_level: value("trace_level"),
        }
    }

    /// Resolves the theme: `theme_file`, then `theme`, then the default.
    ///
    /// A file or name that fails to load is logged and skipped.
    #[must_use]
    pub fn resolve_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            match Theme::from_file(theme_file) {
                Ok(theme) => return theme,
                Err(e) => {
                    tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme file");
                }
            }
        }

        if let Some(theme_name) = &self.theme_name {
            if let Some(theme) = Theme::from_name(theme_name) {
                return theme;
            }
            tracing::warn!(theme_name = %theme_name, "unknown theme name");
        }

        Theme::default()
    }
}

/// Builds the initial screen state: loading, empty directory, resolved theme.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(endpoint = %config.endpoint, id_strategy = ?config.id_strategy, "initializing rolodex plugin");

    AppState::new(config.resolve_theme(), config.id_strategy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert_eq!(config.endpoint, directory::DEFAULT_ENDPOINT);
        assert_eq!(config.id_strategy, IdStrategy::Length);
        assert!(config.theme_name.is_none());
        assert!(config.theme_file.is_none());
        assert!(config.trace_level.is_none());
    }

    #[test]
    fn parses_every_key() {
        let config = Config::from_zellij(&map(&[
            ("endpoint", "http://localhost:3000/users"),
            ("id_strategy", "max"),
            ("theme", "catppuccin-latte"),
            ("theme_file", "~/rolodex.toml"),
            ("trace_level", "debug"),
        ]));

        assert_eq!(config.endpoint, "http://localhost:3000/users");
        assert_eq!(config.id_strategy, IdStrategy::MaxPlusOne);
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.theme_file.as_deref(), Some("/host/rolodex.toml"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn blank_endpoint_and_unknown_strategy_fall_back() {
        let config = Config::from_zellij(&map(&[("endpoint", "  "), ("id_strategy", "uuid")]));
        assert_eq!(config.endpoint, directory::DEFAULT_ENDPOINT);
        assert_eq!(config.id_strategy, IdStrategy::Length);
    }

    #[test]
    fn theme_name_selects_builtin() {
        let config = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            ..Config::default()
        };
        assert_eq!(config.resolve_theme().name, "catppuccin-latte");
    }

    #[test]
    fn theme_file_wins_over_name() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(include_str!("../themes/catppuccin-latte.toml").as_bytes())
            .unwrap();

        let config = Config {
            theme_name: Some("catppuccin-mocha".to_string()),
            theme_file: Some(file.path().to_string_lossy().into_owned()),
            ..Config::default()
        };
        assert_eq!(config.resolve_theme().name, "catppuccin-latte");
    }

    #[test]
    fn broken_theme_sources_fall_back_to_default() {
        let config = Config {
            theme_name: Some("no-such-theme".to_string()),
            theme_file: Some("/nonexistent/theme.toml".to_string()),
            ..Config::default()
        };
        assert_eq!(config.resolve_theme().name, "catppuccin-mocha");
    }

    #[test]
    fn initialize_starts_loading_with_configured_strategy() {
        let state = initialize(&Config {
            id_strategy: IdStrategy::MaxPlusOne,
            ..Config::default()
        });
        assert!(state.loading);
        assert!(state.users.is_empty());
        assert_eq!(state.id_strategy, IdStrategy::MaxPlusOne);
    }
}
