//! Domain layer for the Rolodex plugin.
//!
//! Core types that are independent of Zellij APIs: the [`User`] record, the
//! transient [`UserDraft`] edited in the modal, the [`IdStrategy`] used to number
//! new entries, and the error types.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`user`]: User record, form draft and id assignment

pub mod error;
pub mod user;

pub use error::{Result, RolodexError};
pub use user::{IdStrategy, User, UserDraft};
