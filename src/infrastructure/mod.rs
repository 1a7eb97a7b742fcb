//! Sandbox filesystem helpers.
//!
//! Inside Zellij the host home directory is mounted at `/host`; everything the
//! plugin reads or writes on disk goes through these paths.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, trace_file_path};
