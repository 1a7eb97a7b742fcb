//! User table.
//!
//! Two columns, NAME (fixed width) and EMAIL (the rest of the line). The
//! selected row is painted with the selection colors and carries the
//! `[e]dit [d]elete` hint on its right edge.

use crate::app::state::NAME_COLUMN_WIDTH;
use crate::ui::helpers::{self, display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Action hint drawn on the selected row.
const ROW_ACTIONS: &str = "[e]dit [d]elete ";

/// Renders the column titles. Returns the next free row.
pub fn render_table_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    print!("  {:<width$}{}", "NAME", "EMAIL", width = NAME_COLUMN_WIDTH);
    print!("{}", Theme::reset());
    row + 1
}

/// Renders every row of the window. Returns the row after the last one.
pub fn render_table_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    items
        .iter()
        .fold(row, |current, item| render_table_row(current, item, theme, cols))
}

fn render_table_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
        print!("> ");
    } else {
        print!("{}  ", Theme::fg(&theme.colors.text_normal));
    }

    helpers::render_highlighted_text(&item.name, &item.highlight_ranges, theme, item.is_selected);
    print!(
        "{}",
        " ".repeat(NAME_COLUMN_WIDTH.saturating_sub(display_width(&item.name)))
    );

    helpers::render_highlighted_text(
        &item.email,
        &item.email_highlight_ranges,
        theme,
        item.is_selected,
    );
    let line_len = 2 + NAME_COLUMN_WIDTH + display_width(&item.email);
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    let hint_len = display_width(ROW_ACTIONS);
    if item.is_selected && cols >= NAME_COLUMN_WIDTH + hint_len + 2 {
        position_cursor(row, cols - hint_len + 1);
        print!("{}{ROW_ACTIONS}", Theme::bold());
    }

    print!("{}", Theme::reset());
    row + 1
}
