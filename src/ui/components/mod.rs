//! Component renderers.
//!
//! Each component paints one part of the screen at an explicit row and returns
//! the next free row where that is meaningful.
//!
//! - [`header`]: title bar with the user count and fetch age
//! - [`search`]: query box
//! - [`table`]: NAME / EMAIL rows
//! - [`empty`]: loading / no users / no matches message
//! - [`footer`]: keybinding hints
//! - [`modal`]: editor form and delete confirmation
//!
//! Layout of the list screen:
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search Bar - 3 lines, search mode only]
//! [Table Headers]
//! [Table Rows | Empty State]
//! [Border]
//! [Footer]
//! ```

mod empty;
mod footer;
mod header;
pub mod modal;
mod search;
mod table;

pub use modal::{render_confirm, render_editor};

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};

/// Rows between the table headers and the empty state message.
const EMPTY_STATE_OFFSET: usize = 2;

fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}{}{}", Theme::fg(color), "─".repeat(cols), Theme::reset());
    row + 1
}

/// Renders everything except dialogs.
pub fn render_list(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row + EMPTY_STATE_OFFSET, empty, theme, cols);
    } else {
        current_row = render_table_headers(current_row, theme);
        render_table_rows(current_row, &vm.display_items, theme, cols);
    }

    let footer_row = rows.saturating_sub(1);
    render_border(footer_row.saturating_sub(1), &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
