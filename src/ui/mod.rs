//! Terminal rendering.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI output
//! ```
//!
//! - [`viewmodel`]: display-ready data for one frame
//! - [`renderer`]: frame entry point
//! - [`components`]: header, search box, table, empty state, footer, dialogs
//! - [`helpers`]: cursor positioning, highlighting, relative times
//! - [`theme`]: palettes and ANSI escapes

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    ConfirmInfo, DisplayItem, EditorInfo, EmptyState, FooterInfo, HeaderInfo, Overlay,
    SearchBarInfo, UIViewModel,
};
