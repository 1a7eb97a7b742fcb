//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin shim (`main.rs`) and the domain/UI layers.
//!
//! # Architecture
//!
//! ```text
//! Key / host event → keymap → Event → handle_event → AppState mutation → Actions
//!                                          ↑                                ↓
//!                                          └──── WebRequestResult ◄─ FetchUsers
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`keymap`]: Mode-aware key to event translation
//! - [`modes`]: Input mode state machine types
//! - [`state`]: Screen state container and view model computation

pub mod actions;
pub mod handler;
pub mod keymap;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use keymap::map_key;
pub use modes::{FormField, InputMode, SearchFocus};
pub use state::AppState;
