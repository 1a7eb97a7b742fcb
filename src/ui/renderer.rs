//! Frame entry point.
//!
//! Computes the view model from `AppState`, paints the list screen and then
//! the active dialog, if any, on top of it.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Overlay, UIViewModel};

/// Renders one frame of the plugin pane to stdout.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    components::render_list(vm, theme, cols, rows);

    match &vm.overlay {
        Some(Overlay::Editor(editor)) => components::render_editor(editor, theme, rows, cols),
        Some(Overlay::ConfirmDelete(confirm)) => {
            components::render_confirm(confirm, theme, rows, cols);
        }
        None => {}
    }
}
