//! Zellij plugin entry point.
//!
//! A thin shim over the library: it owns the host calls the library cannot
//! make itself and turns host events into [`rolodex::Event`]s.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: parse config, start tracing, build `AppState`, ask for
//!    `WebAccess`, subscribe to events
//! 2. **Permission granted**: `Event::Mounted`, which issues the one fetch
//! 3. **Web result**: decoded into `LoadSucceeded` or `LoadFailed`
//! 4. **Keys**: mapped per input mode by [`rolodex::map_key`]
//! 5. **Render**: [`rolodex::ui::render`]

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use rolodex::directory::{self, decode_response};
use rolodex::{handle_event, map_key, Action, Config, Event};

register_plugin!(State);

struct State {
    app: rolodex::AppState,

    endpoint: String,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: rolodex::initialize(&default_config),
            endpoint: default_config.endpoint,
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        rolodex::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(endpoint = %config.endpoint, "parsed configuration");
        self.app = rolodex::initialize(&config);
        self.endpoint.clone_from(&config.endpoint);

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", otel.name = %format!("plugin_update::{event_name}"), event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => {
                match map_key(self.app.input_mode, key) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                self.map_permission_result(status)
            }
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                if !directory::is_directory_response(&context) {
                    tracing::debug!(?context, "ignoring unrelated web request result");
                    return false;
                }
                Self::map_web_result(status, &body)
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    Self::execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        rolodex::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    fn map_permission_result(&self, status: PermissionStatus) -> Event {
        match status {
            PermissionStatus::Granted => {
                tracing::debug!("web access granted");
                Event::Mounted {
                    endpoint: self.endpoint.clone(),
                }
            }
            PermissionStatus::Denied => Event::PermissionsDenied,
        }
    }

    fn map_web_result(status: u16, body: &[u8]) -> Event {
        tracing::debug!(status, body_len = body.len(), "directory response");

        match decode_response(status, body) {
            Ok(users) => Event::LoadSucceeded {
                users,
                fetched_at: chrono::Utc::now().timestamp(),
            },
            Err(e) => Event::LoadFailed {
                reason: e.to_string(),
            },
        }
    }

    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::FetchUsers { url } => {
                tracing::debug!(url = %url, "requesting user directory");
                web_request(
                    url,
                    HttpVerb::Get,
                    directory::request_headers(),
                    vec![],
                    directory::request_context(),
                );
            }
        }
    }
}
