//! Search input box.
//!
//! A three-line framed box showing the current query. While the query has
//! focus a block cursor follows the text.

use crate::ui::helpers::{clip, display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin around the box.
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the search box starting at `row`. Returns `row + 3`.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = Theme::fg(&theme.colors.search_bar_border);

    position_cursor(row, 1);
    print!("{}{border}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("┌{}┐{}", "─".repeat(inner_width), Theme::reset());

    let cursor = if search.is_typing { 1 } else { 0 };
    let search_text = clip(
        &format!(" Search: {}", search.query),
        inner_width.saturating_sub(cursor),
    );
    let padding = inner_width.saturating_sub(display_width(&search_text) + cursor);

    position_cursor(row + 1, 1);
    print!("{}{border}│", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}{search_text}", Theme::fg(&theme.colors.text_normal));
    if search.is_typing {
        print!("{} {}", Theme::reverse(), Theme::reset());
    }
    print!("{}{border}│{}", " ".repeat(padding), Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}{border}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("└{}┘{}", "─".repeat(inner_width), Theme::reset());

    row + 3
}
