//! Placeholder shown instead of the table.
//!
//! Used while the directory loads, when it holds no users, and when a search
//! matches nothing.

use crate::ui::helpers::{clip, display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the message and its dimmed subtitle centered on rows `row` and
/// `row + 1`.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    render_centered(row, &empty.message, &Theme::fg(&theme.colors.empty_state_fg), cols);

    let dim = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    render_centered(row + 1, &empty.subtitle, &dim, cols);
}

fn render_centered(row: usize, text: &str, style: &str, cols: usize) {
    let text = clip(text, cols);
    let len = display_width(&text);
    let padding = cols.saturating_sub(len) / 2;

    position_cursor(row, 1);
    print!("{style}{}{text}", " ".repeat(padding));
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
    print!("{}", Theme::reset());
}
